//! A small personal API that forwards data between third-party services:
//! device health exports get reshaped and written to a hosted GraphQL
//! database, newsletter signups get relayed to the configured providers.

pub mod app;
pub mod blog_client;
pub mod config;
mod error;
pub mod health_client;
pub mod newsletter_client;
pub mod web;

// re-exports
pub use app::{serve, App, AppState};
pub use blog_client::BlogClient;
pub use error::{Error, Result};
pub use health_client::HealthDbClient;
pub use newsletter_client::NewsletterClient;

use tracing_subscriber::EnvFilter;

/// Console-oriented tracing for debug builds.
pub fn init_dbg_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("personal_api=debug,tower_http=debug,info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Tracing for production: no ANSI colors, targets included so log lines
/// can be filtered downstream.
pub fn init_production_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("personal_api=info,tower_http=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .init();
}
