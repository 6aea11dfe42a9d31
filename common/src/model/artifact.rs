use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::template::TemplateVersion;

/// A generated document as returned by `POST /generator`.
///
/// Only `document_id` and `generated_text` are mandatory. Everything else is
/// defaulted when the service omits it, so a partial response still yields an
/// artifact the user can copy or download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default)]
    pub template_name: String,
    #[serde(default)]
    pub template_version: TemplateVersion,
    pub generated_text: String,
    /// Timestamp exactly as sent by the service; formatted by the view.
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub metadata: ArtifactMetadata,
}

impl GeneratedArtifact {
    pub fn placeholder_count(&self) -> usize {
        self.metadata.placeholder_keys.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Redaction placeholders the service substituted for PII values.
    #[serde(default)]
    pub placeholder_keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pii_mapping_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    /// Any further keys, kept untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_service_response() {
        let artifact: GeneratedArtifact = serde_json::from_value(json!({
            "document_id": "d1",
            "template_id": "t1",
            "template_name": "NDA",
            "template_version": "1.0.0",
            "generated_text": "This agreement...",
            "generated_at": "2024-01-01T00:00:00",
            "metadata": {
                "pii_mapping_id": null,
                "placeholder_keys": ["[[PARTY]]", "[[EMAIL_1]]"],
                "output_format": "text",
                "reviewed": false
            }
        }))
        .unwrap();

        assert_eq!(artifact.template_id.as_deref(), Some("t1"));
        assert_eq!(artifact.placeholder_count(), 2);
        assert_eq!(artifact.metadata.pii_mapping_id, None);
        assert_eq!(artifact.metadata.output_format.as_deref(), Some("text"));
        assert_eq!(artifact.metadata.extra.get("reviewed"), Some(&json!(false)));
    }

    #[test]
    fn missing_metadata_defaults_to_empty() {
        let artifact: GeneratedArtifact = serde_json::from_value(json!({
            "document_id": "d2",
            "generated_text": "text"
        }))
        .unwrap();

        assert_eq!(artifact.metadata, ArtifactMetadata::default());
        assert_eq!(artifact.placeholder_count(), 0);
        assert_eq!(artifact.template_name, "");
        assert_eq!(artifact.generated_at, "");
    }

    #[test]
    fn missing_generated_text_is_rejected() {
        let result = serde_json::from_value::<GeneratedArtifact>(json!({ "document_id": "d3" }));
        assert!(result.is_err());
    }
}
