//! Calls to the document service through the `/api` proxy.

use docgen_common::catalog::CatalogOutcome;
use docgen_common::model::GeneratedArtifact;
use docgen_common::requests::{
    parse_catalog_response, parse_generation_response, GenerationRequest, GENERATOR_PATH,
    TEMPLATES_PATH,
};
use docgen_common::AppError;
use gloo_net::http::Request;
use web_sys::AbortSignal;

/// Fetches the template catalog. An aborted fetch yields `Cancelled`.
pub async fn fetch_templates(api_base: &str, signal: Option<&AbortSignal>) -> CatalogOutcome {
    let url = format!("{}{}", api_base, TEMPLATES_PATH);
    let response = match Request::get(&url).abort_signal(signal).send().await {
        Ok(response) => response,
        Err(err) if is_abort(&err) => return CatalogOutcome::Cancelled,
        Err(err) => {
            tracing::error!("GET {} failed: {}", url, err);
            return CatalogOutcome::Failed(AppError::load_failed());
        }
    };

    let status = response.status();
    match response.text().await {
        Ok(body) => match parse_catalog_response(status, &body) {
            Ok(templates) => CatalogOutcome::Loaded(templates),
            Err(err) => CatalogOutcome::Failed(err),
        },
        Err(err) if is_abort(&err) => CatalogOutcome::Cancelled,
        Err(err) => {
            tracing::error!("reading {} failed: {}", url, err);
            CatalogOutcome::Failed(AppError::load_failed())
        }
    }
}

/// Sends one generation request and decodes the answer.
pub async fn generate(
    api_base: &str,
    request: &GenerationRequest,
) -> Result<GeneratedArtifact, AppError> {
    let url = format!("{}{}", api_base, GENERATOR_PATH);
    let response = Request::post(&url)
        .json(request)
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    parse_generation_response(status, &body)
}

fn is_abort(err: &gloo_net::Error) -> bool {
    matches!(err, gloo_net::Error::JsError(js) if js.name == "AbortError")
}

fn transport_error(err: gloo_net::Error) -> AppError {
    tracing::error!("generation request failed: {}", err);
    let message = match err {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    };
    AppError::Generation(message)
}
