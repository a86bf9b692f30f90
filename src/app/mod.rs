pub mod serve;

// re-export
pub use serve::serve;

use std::{net::SocketAddr, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::AppConfig, BlogClient, HealthDbClient, NewsletterClient, Result};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    pub async fn build_from_config(config: &AppConfig) -> Result<Self> {
        let health_client = HealthDbClient::new(
            &config.health_config.url,
            config.health_config.auth_token.clone(),
            config.health_config.timeout(),
        )?;
        let newsletter_client = NewsletterClient::new(
            &config.newsletter_config.url,
            config.newsletter_config.auth_token.clone(),
            config.newsletter_config.tag.clone(),
            config.newsletter_config.timeout(),
        )?;
        let blog_client = BlogClient::new(
            &config.blog_config.base_url,
            config.blog_config.timeout(),
        )?;

        let app_state = AppState::new(health_client, newsletter_client, blog_client);

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }
}

pub struct InternalState {
    pub health_client: HealthDbClient,
    pub newsletter_client: NewsletterClient,
    pub blog_client: BlogClient,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(
        health_client: HealthDbClient,
        newsletter_client: NewsletterClient,
        blog_client: BlogClient,
    ) -> Self {
        AppState(Arc::new(InternalState {
            health_client,
            newsletter_client,
            blog_client,
        }))
    }
}
