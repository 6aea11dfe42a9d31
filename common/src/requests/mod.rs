//! Request and response bodies of the two document service calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, GENERATION_FAILED, UNREADABLE_ARTIFACT};
use crate::model::{GeneratedArtifact, TemplateSchema};

/// Path of the catalog call, relative to the API base path.
pub const TEMPLATES_PATH: &str = "/templates";

/// Path of the generation call, relative to the API base path.
pub const GENERATOR_PATH: &str = "/generator";

/// Field values keyed by field name.
pub type FormInputs = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Pdf,
    Docx,
}

/// Body of `POST /generator`. Built once per submission and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub template_id: String,
    pub user_id: String,
    pub inputs: FormInputs,
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Error body returned by the document service.
///
/// `detail` is usually a sentence, but request validation failures carry a
/// list of objects instead; only the string form is shown to the user.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(Value::as_str)
            .filter(|detail| !detail.trim().is_empty())
    }
}

/// Body the proxy answers with when the document service is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyFailure {
    pub message: String,
    pub error: String,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decodes the answer to `GET /templates`.
pub fn parse_catalog_response(status: u16, body: &str) -> Result<Vec<TemplateSchema>, AppError> {
    if !is_success(status) {
        tracing::warn!("template catalog request failed with status {}", status);
        return Err(AppError::load_failed());
    }
    serde_json::from_str(body).map_err(|err| {
        tracing::warn!("template catalog body could not be decoded: {}", err);
        AppError::load_failed()
    })
}

/// Decodes the answer to `POST /generator`.
///
/// Error statuses surface the service's `detail` message when there is one,
/// and the generic failure message otherwise.
pub fn parse_generation_response(status: u16, body: &str) -> Result<GeneratedArtifact, AppError> {
    if is_success(status) {
        return serde_json::from_str(body).map_err(|err| {
            tracing::warn!("generated document could not be decoded: {}", err);
            AppError::Generation(UNREADABLE_ARTIFACT.to_string())
        });
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|error| error.message().map(str::to_string))
        .unwrap_or_else(|| GENERATION_FAILED.to_string());
    tracing::warn!("document generation failed with status {}: {}", status, message);
    Err(AppError::Generation(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_service_shape() {
        let request = GenerationRequest {
            template_id: "t1".to_string(),
            user_id: "u1".to_string(),
            inputs: FormInputs::from([("party".to_string(), "Acme Corp".to_string())]),
            output_format: OutputFormat::default(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "template_id": "t1",
                "user_id": "u1",
                "inputs": { "party": "Acme Corp" },
                "output_format": "text"
            })
        );
    }

    #[test]
    fn error_status_surfaces_detail() {
        let err = parse_generation_response(400, r#"{"detail":"Missing required field"}"#).unwrap_err();
        assert_eq!(err, AppError::Generation("Missing required field".to_string()));
    }

    #[test]
    fn error_status_without_usable_detail_is_generic() {
        let generic = AppError::Generation(GENERATION_FAILED.to_string());
        assert_eq!(parse_generation_response(500, "<html>").unwrap_err(), generic);
        assert_eq!(parse_generation_response(500, "{}").unwrap_err(), generic);
        assert_eq!(
            parse_generation_response(500, r#"{"message":"Failed to generate document","error":"refused"}"#)
                .unwrap_err(),
            generic
        );
        assert_eq!(
            parse_generation_response(422, r#"{"detail":[{"loc":["body","user_id"],"msg":"invalid"}]}"#)
                .unwrap_err(),
            generic
        );
    }

    #[test]
    fn unreadable_success_body_is_a_generation_error() {
        let err = parse_generation_response(201, r#"{"document_id":"d1"}"#).unwrap_err();
        assert_eq!(err, AppError::Generation(UNREADABLE_ARTIFACT.to_string()));
    }

    #[test]
    fn catalog_failures_map_to_load_error() {
        assert_eq!(parse_catalog_response(502, "[]").unwrap_err(), AppError::load_failed());
        assert_eq!(parse_catalog_response(200, "{\"oops\":1}").unwrap_err(), AppError::load_failed());
        assert!(parse_catalog_response(200, "[]").unwrap().is_empty());
    }
}
