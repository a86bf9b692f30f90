use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    web::{data::BlogSubscribeRequest, Error, WebResult},
    AppState,
};

/// Relays a signup to the blog-platform publication.
///
/// The frontend posting here sends the payload as a plain string, so the body
/// is parsed explicitly instead of going through the `Json` extractor.
#[tracing::instrument(name = "Subscribing an email to the blog publication", skip_all)]
pub async fn subscribe_blog(
    State(app_state): State<AppState>,
    body: String,
) -> WebResult<Json<Value>> {
    let req: BlogSubscribeRequest =
        serde_json::from_str(&body).map_err(|er| Error::SubscribeBodyParse(er.to_string()))?;

    app_state.blog_client.subscribe(&req.email).await?;
    info!("SUCCESS");

    Ok(Json(json!({ "response": "subscribed!" })))
}
