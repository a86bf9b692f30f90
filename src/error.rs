use crate::{blog_client, config, health_client, newsletter_client, web};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("web error: {0}")]
    Web(#[from] web::Error),
    #[error("health db client error: {0}")]
    HealthDbClient(#[from] health_client::Error),
    #[error("newsletter client error: {0}")]
    NewsletterClient(#[from] newsletter_client::Error),
    #[error("blog client error: {0}")]
    BlogClient(#[from] blog_client::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
