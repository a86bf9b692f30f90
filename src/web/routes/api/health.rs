use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    web::{
        data::{HealthEntry, HealthSample},
        WebResult,
    },
    AppState,
};

/// The payload the device shortcut exports: two raw time series plus the
/// device-local date.
#[derive(Deserialize, Debug)]
pub struct HealthExport {
    pub heart: HealthSample,
    pub steps: HealthSample,
    pub date: String,
}

#[tracing::instrument(
    name = "Storing a daily health entry",
    skip(app_state, export),
    fields(date = %export.date)
)]
pub async fn health_ingest(
    State(app_state): State<AppState>,
    Json(export): Json<HealthExport>,
) -> WebResult<Json<Value>> {
    let entry = HealthEntry::build(&export.heart, &export.steps, &export.date)?;
    info!(
        "heart rate: {} samples, steps: {} samples",
        entry.heart_rate.len(),
        entry.steps.len()
    );

    app_state.health_client.store_entry(&entry).await?;
    info!("Successfully transferred heart rate and steps data to the database");

    Ok(Json(json!({ "response": "OK" })))
}
