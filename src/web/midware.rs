use std::sync::Arc;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::web::{log, Error};

/// Maps handler errors stashed in the response extensions into the
/// client-facing JSON bodies, and emits the per-request log line.
pub async fn response_mapper(req_method: Method, uri: Uri, resp: Response) -> Response {
    let uuid = Uuid::new_v4();

    let web_error = resp.extensions().get::<Arc<Error>>().map(|er| er.as_ref());
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let mut err_resp = (*status, Json(cl_err.to_body())).into_response();
        // Keep the headers inner layers already attached to the failed
        // response: the propagated request id and, on the widget route, the
        // CORS allow headers the browser needs to read the error at all.
        for (name, value) in resp.headers() {
            if !err_resp.headers().contains_key(name) {
                err_resp.headers_mut().insert(name, value.clone());
            }
        }
        err_resp
    });

    #[allow(clippy::redundant_pattern_matching)]
    if let Ok(_) = log::log_request(
        uuid,
        req_method,
        uri,
        resp.status(),
        web_error,
        client_status_and_error,
    )
    .await
    {}

    err_resp.unwrap_or(resp)
}
