use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::{
    matchers::{any, header_exists, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::TestApp;

fn device_export() -> serde_json::Value {
    json!({
        "heart": {
            "values": "60\n62\n",
            "timestamps": "2021-05-01T08:00:00Z\n2021-05-01T09:00:00Z\n"
        },
        "steps": {
            "values": "100\n250\n",
            "timestamps": "2021-05-01T08:00:00Z\n2021-05-01T09:00:00Z\n"
        },
        "date": "2021-05-01"
    })
}

#[tokio::test]
async fn health_ingest_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(path("/"))
        .and(method("POST"))
        .and(header_exists("Authorization"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "addEntry": [] } })),
        )
        .expect(1)
        .mount(&app.health_server)
        .await;

    let res = app.post_health(&device_export()).await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body, json!({ "response": "OK" }));

    Ok(())
}

#[tokio::test]
async fn health_ingest_zips_and_filters_the_series() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "addEntry": [] } })),
        )
        .expect(1)
        .mount(&app.health_server)
        .await;

    let res = app.post_health(&device_export()).await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Inspect what actually went over the wire to the database.
    let requests = app.health_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
    let entry = &body["variables"]["entries"][0];

    assert_eq!(
        entry["heartRate"],
        json!([
            { "value": 60, "timestamp": "2021-05-01T08:00:00.000Z" },
            { "value": 62, "timestamp": "2021-05-01T09:00:00.000Z" }
        ])
    );
    assert_eq!(entry["date"], json!("2021-05-01T00:00:00.000Z"));

    Ok(())
}

#[tokio::test]
async fn health_ingest_surfaces_first_graphql_error_as_500() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                { "message": "Instance is not unique." },
                { "message": "Another failure." }
            ]
        })))
        .expect(1)
        .mount(&app.health_server)
        .await;

    let res = app.post_health(&device_export()).await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body, json!({ "response": "Instance is not unique." }));

    Ok(())
}

#[tokio::test]
async fn health_ingest_rejects_malformed_export_without_upstream_call() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.health_server)
        .await;

    let export = json!({
        "heart": { "values": "not-a-number", "timestamps": "2021-05-01T08:00:00Z" },
        "steps": { "values": "", "timestamps": "" },
        "date": "2021-05-01"
    });

    let res = app.post_health(&export).await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
