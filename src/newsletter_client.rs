//! Client for the transactional-email provider keeping the newsletter
//! subscriber list.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

#[derive(Debug)]
pub struct NewsletterClient {
    pub http_client: Client,
    pub url: reqwest::Url,
    auth_token: SecretString,
    tag: String,
}

impl NewsletterClient {
    pub fn new<S: AsRef<str>>(
        url: S,
        auth_token: SecretString,
        tag: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self> {
        let url =
            reqwest::Url::parse(url.as_ref()).map_err(|e| Error::UrlParsing(e.to_string()))?;

        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(NewsletterClient {
            http_client,
            url,
            auth_token,
            tag: tag.into(),
        })
    }

    /// Subscribes `email` to the newsletter, tagged with the configured
    /// origin tag.
    ///
    /// The provider reports rejections as a JSON array of human-readable
    /// strings. A rejection mentioning an existing subscription maps to
    /// `Error::AlreadySubscribed` so the caller can translate it; everything
    /// else surfaces the provider's own message.
    pub async fn subscribe<S: AsRef<str>>(&self, email: S) -> Result<()> {
        let url = self
            .url
            .join("v1/subscribers")
            .map_err(|e| Error::UrlParsing(e.to_string()))?;

        let subscriber = NewSubscriber {
            email: email.as_ref(),
            tags: [&self.tag],
        };

        let resp = self
            .http_client
            .post(url)
            .header(
                "Authorization",
                format!("Token {}", self.auth_token.expose_secret()),
            )
            .json(&subscriber)
            .send()
            .await?;

        if resp.status().is_success() {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        let messages: Vec<String> = serde_json::from_str(&body).unwrap_or_default();
        if messages.iter().any(|m| m.contains("already subscribed")) {
            return Err(Error::AlreadySubscribed);
        }

        Err(Error::Rejected(
            messages.into_iter().next().unwrap_or(body),
        ))
    }
}

#[derive(Serialize)]
struct NewSubscriber<'a> {
    email: &'a str,
    tags: [&'a str; 1],
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("url parsing error: {0}")]
    UrlParsing(String),
    #[error("the email address is already subscribed")]
    AlreadySubscribed,
    #[error("{0}")]
    Rejected(String),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
