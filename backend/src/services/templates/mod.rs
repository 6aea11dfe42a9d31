//! # Template Catalog Route
//!
//! `GET /api/templates` is forwarded to the document service's catalog
//! endpoint. The query string is passed through so filters understood by the
//! service keep working.

use actix_web::web::{get, scope, Data};
use actix_web::{HttpRequest, HttpResponse, Scope};
use log::info;

use super::upstream::Upstream;

/// The base path for template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Path of the catalog on the document service.
const UPSTREAM_PATH: &str = "/api/templates";

const FAILURE_MESSAGE: &str = "Failed to load templates";

/// Configures and returns the Actix `Scope` for the catalog route.
///
/// # Registered Routes:
///
/// *   **`GET /api/templates`**: JSON array of template schemas, relayed as-is.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(process))
        .route("/", get().to(process))
}

async fn process(req: HttpRequest, upstream: Data<Upstream>) -> HttpResponse {
    let url = upstream.url(UPSTREAM_PATH, req.query_string());
    info!("GET {}", url);
    upstream
        .relay(upstream.client().get(url), FAILURE_MESSAGE)
        .await
}
