//! Client for the hosted GraphQL database that stores the daily health
//! entries. One mutation per request, no retries.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::web::data::HealthEntry;

/// The mutation is fixed: the schema only ever grows by appending entries.
const ADD_ENTRY_MUTATION: &str = r#"
mutation($entries: [EntryInput]) {
  addEntry(entries: $entries) {
    heartRate {
      value
      timestamp
    }
    steps {
      value
      timestamp
    }
    date
  }
}
"#;

#[derive(Debug)]
pub struct HealthDbClient {
    pub http_client: Client,
    pub url: reqwest::Url,
    auth_token: SecretString,
}

impl HealthDbClient {
    pub fn new<S: AsRef<str>>(
        url: S,
        auth_token: SecretString,
        timeout: std::time::Duration,
    ) -> Result<Self> {
        let url =
            reqwest::Url::parse(url.as_ref()).map_err(|e| Error::UrlParsing(e.to_string()))?;

        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(HealthDbClient {
            http_client,
            url,
            auth_token,
        })
    }

    /// Writes a single `HealthEntry` via the `addEntry` mutation.
    ///
    /// GraphQL backends report rejections with a 200 status and a non-empty
    /// `errors` array, so both transport failures and in-band errors are
    /// checked. Only the first error message is surfaced.
    pub async fn store_entry(&self, entry: &HealthEntry) -> Result<()> {
        let body = json!({
            "query": ADD_ENTRY_MUTATION,
            "variables": { "entries": [entry] },
        });

        let resp = self
            .http_client
            .post(self.url.clone())
            .bearer_auth(self.auth_token.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let resp: GraphQlResponse = resp.json().await?;
        if let Some(first_error) = resp.errors.unwrap_or_default().into_iter().next() {
            return Err(Error::GraphQl(first_error.message));
        }

        Ok(())
    }
}

#[derive(Deserialize)]
struct GraphQlResponse {
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("url parsing error: {0}")]
    UrlParsing(String),
    #[error("{0}")]
    GraphQl(String),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
