use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{TestApp, NEWSLETTER_TAG};

#[tokio::test]
async fn subscribe_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(path("/v1/subscribers"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.newsletter_server)
        .await;

    let res = app
        .post_subscribe(&json!({ "email": "john.doe@example.com" }))
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body, json!({ "response": "subscribed!", "error": "" }));

    // The provider should have received the email tagged with the blog's tag.
    let requests = app.newsletter_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
    assert_eq!(sent["email"], json!("john.doe@example.com"));
    assert_eq!(sent["tags"], json!([NEWSLETTER_TAG]));

    Ok(())
}

#[tokio::test]
async fn subscribe_missing_email_is_rejected_locally() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.newsletter_server)
        .await;

    for (body, case) in [
        (json!({}), "missing email"),
        (json!({ "email": "" }), "empty email"),
    ] {
        let res = app.post_subscribe(&body).await?;

        assert_eq!(
            res.status(),
            StatusCode::BAD_REQUEST,
            "wrong status for request with {case}"
        );
        let body: serde_json::Value = res.json().await?;
        assert_eq!(body, json!({ "error": "Email is required" }));
    }

    Ok(())
}

#[tokio::test]
async fn subscribe_duplicate_gets_a_friendly_message() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!(["That email is already subscribed to this newsletter."])),
        )
        .expect(1)
        .mount(&app.newsletter_server)
        .await;

    let res = app
        .post_subscribe(&json!({ "email": "john.doe@example.com" }))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(
        body,
        json!({ "error": "Looks like you already subscribed to my newsletter!" })
    );

    Ok(())
}

#[tokio::test]
async fn subscribe_other_provider_failures_surface_the_raw_message() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!(["That email address is blocked."])),
        )
        .expect(1)
        .mount(&app.newsletter_server)
        .await;

    let res = app
        .post_subscribe(&json!({ "email": "john.doe@example.com" }))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body, json!({ "error": "That email address is blocked." }));

    Ok(())
}
