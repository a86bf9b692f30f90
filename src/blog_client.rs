//! Client for the blog-platform publication that keeps its own subscriber
//! list. The platform's signup endpoint expects the same form payload its
//! own subscribe page would send.

use reqwest::Client;
use serde::Serialize;

#[derive(Debug)]
pub struct BlogClient {
    pub http_client: Client,
    pub base_url: reqwest::Url,
}

impl BlogClient {
    pub fn new<S: AsRef<str>>(base_url: S, timeout: std::time::Duration) -> Result<Self> {
        let base_url =
            reqwest::Url::parse(base_url.as_ref()).map_err(|e| Error::UrlParsing(e.to_string()))?;

        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(BlogClient {
            http_client,
            base_url,
        })
    }

    /// Signs `email` up with the publication.
    ///
    /// A rejection keeps the upstream status and body text instead of
    /// collapsing them into a generic error, otherwise there is nothing left
    /// to debug with once the response has been sent.
    pub async fn subscribe<S: AsRef<str>>(&self, email: S) -> Result<()> {
        let url = self
            .base_url
            .join("api/v1/free")
            .map_err(|e| Error::UrlParsing(e.to_string()))?;

        let signup = SignupPayload {
            first_url: self.base_url.as_str(),
            current_url: self.base_url.as_str(),
            first_referrer: "",
            current_referrer: "",
            source: "subscribe_page",
            email: email.as_ref(),
        };

        let resp = self.http_client.post(url).json(&signup).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Rejected { status, body });
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct SignupPayload<'a> {
    first_url: &'a str,
    current_url: &'a str,
    first_referrer: &'a str,
    current_referrer: &'a str,
    source: &'a str,
    email: &'a str,
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("url parsing error: {0}")]
    UrlParsing(String),
    #[error("the platform rejected the signup ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
