use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{json, Value};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::{blog_client, health_client, newsletter_client};

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("email field missing or empty")]
    EmailMissing,
    #[error("failed to parse the subscribe body: {0}")]
    SubscribeBodyParse(String),

    #[error("data parsing error: {0}")]
    DataParsing(#[from] super::data::DataParsingError),

    #[error("health db client error: {0}")]
    HealthDb(#[from] health_client::Error),
    #[error("newsletter client error: {0}")]
    Newsletter(#[from] newsletter_client::Error),
    #[error("blog client error: {0}")]
    Blog(#[from] blog_client::Error),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::EmailMissing => (StatusCode::BAD_REQUEST, EmailRequired),
            Error::DataParsing(data_er) => {
                (StatusCode::BAD_REQUEST, InvalidInput(data_er.to_string()))
            }
            // The health route reports failures under a "response" key, with
            // the first error message the database returned.
            Error::HealthDb(er) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                HealthWriteFailed(er.to_string()),
            ),
            Error::Newsletter(newsletter_client::Error::AlreadySubscribed) => {
                (StatusCode::BAD_REQUEST, AlreadySubscribed)
            }
            Error::Newsletter(er) => (StatusCode::BAD_REQUEST, SubscribeRejected(er.to_string())),
            Error::Blog(er) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                BlogSignupFailed(er.to_string()),
            ),
            Error::SubscribeBodyParse(er) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                BlogSignupFailed(er.clone()),
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The client-facing rendition of a handler error. Each variant knows the
/// exact JSON body its route promises to callers.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Email is required")]
    EmailRequired,
    #[display("Looks like you already subscribed to my newsletter!")]
    AlreadySubscribed,
    #[display("{_0}")]
    SubscribeRejected(String),
    #[display("{_0}")]
    BlogSignupFailed(String),
    #[display("Received invalid input: {_0}")]
    InvalidInput(String),
    #[display("{_0}")]
    HealthWriteFailed(String),
}

impl ClientError {
    pub fn to_body(&self) -> Value {
        match self {
            // The health ingestion contract uses "response" for both the
            // success and the failure message.
            ClientError::HealthWriteFailed(_) => json!({ "response": self.to_string() }),
            _ => json!({ "error": self.to_string() }),
        }
    }
}
