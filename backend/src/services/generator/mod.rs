//! # Document Generation Route
//!
//! `POST /api/generator` is forwarded to the document service's render
//! endpoint with the request body and `Content-Type` unchanged. Validation of
//! the body is left to the service; its status and error detail reach the
//! browser verbatim.

use actix_web::http::header::CONTENT_TYPE;
use actix_web::web::{post, scope, Bytes, Data};
use actix_web::{HttpRequest, HttpResponse, Scope};
use log::info;

use super::upstream::Upstream;

/// The base path for generation API endpoints.
const API_PATH: &str = "/api/generator";

/// Path of the render endpoint on the document service.
const UPSTREAM_PATH: &str = "/api/generator/render";

const FAILURE_MESSAGE: &str = "Failed to generate document";

/// Configures and returns the Actix `Scope` for the generation route.
///
/// # Registered Routes:
///
/// *   **`POST /api/generator`**: body `{template_id, user_id, inputs, output_format}`,
///     answered with the generated artifact or the service's error.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(process))
        .route("/", post().to(process))
}

async fn process(req: HttpRequest, body: Bytes, upstream: Data<Upstream>) -> HttpResponse {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let url = upstream.url(UPSTREAM_PATH, req.query_string());
    info!("POST {} ({} bytes)", url, body.len());

    let request = upstream
        .client()
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, content_type)
        .body(body.to_vec());
    upstream.relay(request, FAILURE_MESSAGE).await
}
