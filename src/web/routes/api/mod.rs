pub mod health;
pub mod subscribe;
pub mod subscribe_blog;

pub use health::health_ingest;
pub use subscribe::subscribe;
pub use subscribe_blog::subscribe_blog;
