//! The widget route is the only one reachable from other origins, so it has
//! to answer CORS preflights itself and attach the allow headers to every
//! response.

use anyhow::Result;
use reqwest::{header, Method, StatusCode};
use serde_json::json;
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::TestApp;

#[tokio::test]
async fn widget_preflight_is_answered_without_an_upstream_call() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.newsletter_server)
        .await;

    let res = app
        .http_client
        .request(Method::OPTIONS, app.widget_url())
        .header(header::ORIGIN, "https://blog.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "preflight response is missing the allow-origin header"
    );

    Ok(())
}

#[tokio::test]
async fn widget_subscribe_ok_with_cors_headers() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(path("/v1/subscribers"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.newsletter_server)
        .await;

    let res = app
        .http_client
        .post(app.widget_url())
        .header(header::ORIGIN, "https://blog.example.com")
        .json(&json!({ "email": "john.doe@example.com" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body, json!({ "response": "subscribed!", "error": "" }));

    Ok(())
}

#[tokio::test]
async fn widget_missing_email_matches_the_plain_route() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.newsletter_server)
        .await;

    let res = app
        .http_client
        .post(app.widget_url())
        .header(header::ORIGIN, "https://blog.example.com")
        .json(&json!({}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(
        res.headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "error response lost the CORS headers"
    );
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body, json!({ "error": "Email is required" }));

    Ok(())
}
