use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    web::{data::SubscribeRequest, Error, WebResult},
    AppState,
};

/// Relays a signup to the transactional-email provider. Also serves the
/// CORS-enabled widget route.
#[tracing::instrument(name = "Subscribing an email to the newsletter", skip_all)]
pub async fn subscribe(
    State(app_state): State<AppState>,
    Json(req): Json<SubscribeRequest>,
) -> WebResult<Json<Value>> {
    let email = req
        .email
        .filter(|email| !email.is_empty())
        .ok_or(Error::EmailMissing)?;

    if let Err(er) = app_state.newsletter_client.subscribe(&email).await {
        tracing::error!(error = ?er, "newsletter provider rejected the subscription");
        return Err(er.into());
    }
    info!("SUCCESS");

    Ok(Json(json!({ "response": "subscribed!", "error": "" })))
}
