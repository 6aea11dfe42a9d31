//! Template schemas as served by `GET /templates`.
//!
//! A [`TemplateSchema`] is an opaque description of a document type: its
//! identity, some display metadata and the ordered list of [`FieldSpec`]s the
//! user has to fill in. The client never interprets the template text itself;
//! it only turns the field list into a form.
//!
//! The document service has used two vocabularies for field types over time
//! (`text`/`textarea`/`select`/`tel` and `short-text`/`long-text`/
//! `single-select`/`phone`). Both decode into the same closed [`FieldKind`];
//! anything else is preserved as [`FieldKind::Unknown`] and rendered as a
//! plain text input.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Label of the empty option every select input starts with.
pub const SELECT_PLACEHOLDER: &str = "Select an option";

/// Hint shown under a field that has no description of its own.
pub const DEFAULT_FIELD_HINT: &str = "Provide the required information.";

/// A named, versioned document blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSchema {
    /// Stable opaque identifier. The service stores it as `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Display-only; may be a number or a string on the wire.
    #[serde(default)]
    pub version: TemplateVersion,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl TemplateSchema {
    /// Number of fields flagged as personally identifiable information.
    pub fn pii_field_count(&self) -> usize {
        self.fields.iter().filter(|field| field.is_pii).count()
    }

    /// Field names that appear more than once, in order of their second occurrence.
    pub fn duplicate_field_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.fields
            .iter()
            .filter(|field| !seen.insert(field.name.as_str()))
            .map(|field| field.name.as_str())
            .collect()
    }
}

/// Template version, either numeric (`1`) or textual (`"1.0.0"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateVersion {
    Number(serde_json::Number),
    Text(String),
}

impl Default for TemplateVersion {
    fn default() -> Self {
        TemplateVersion::Text(String::new())
    }
}

impl fmt::Display for TemplateVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateVersion::Number(number) => write!(f, "{}", number),
            TemplateVersion::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for TemplateVersion {
    fn from(value: i64) -> Self {
        TemplateVersion::Number(value.into())
    }
}

impl From<&str> for TemplateVersion {
    fn from(value: &str) -> Self {
        TemplateVersion::Text(value.to_string())
    }
}

/// One named, typed input of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    /// Choices of a single-select field, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, alias = "isPii")]
    pub is_pii: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

fn default_required() -> bool {
    true
}

impl FieldSpec {
    /// The label, or the raw name when the schema does not provide one.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    pub fn hint(&self) -> &str {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
            .unwrap_or(DEFAULT_FIELD_HINT)
    }

    /// Initial value of the field when its template is selected.
    pub fn initial_value(&self) -> String {
        self.default.clone().unwrap_or_default()
    }

    /// Chooses the input widget for this field.
    ///
    /// A single-select without an option list has nothing to choose from and
    /// degrades to a text input, as do unknown kinds.
    pub fn widget(&self) -> FieldWidget<'_> {
        match (&self.kind, self.options.as_deref()) {
            (FieldKind::LongText, _) => FieldWidget::TextArea { rows: 4 },
            (FieldKind::SingleSelect, Some(options)) => FieldWidget::Select { options },
            (kind, _) => FieldWidget::Input {
                input_type: kind.input_type(),
            },
        }
    }
}

/// Closed set of field kinds understood by the form engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    #[default]
    ShortText,
    LongText,
    SingleSelect,
    Date,
    Number,
    Email,
    Phone,
    /// A type string this client does not know; kept verbatim.
    Unknown(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::ShortText => "short-text",
            FieldKind::LongText => "long-text",
            FieldKind::SingleSelect => "single-select",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Unknown(raw) => raw,
        }
    }

    /// HTML `type` attribute of a single-line input for this kind.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            _ => "text",
        }
    }
}

impl From<String> for FieldKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "short-text" | "text" | "string" => FieldKind::ShortText,
            "long-text" | "textarea" => FieldKind::LongText,
            "single-select" | "select" => FieldKind::SingleSelect,
            "date" => FieldKind::Date,
            "number" => FieldKind::Number,
            "email" => FieldKind::Email,
            "phone" | "tel" => FieldKind::Phone,
            _ => FieldKind::Unknown(raw),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

/// How a field is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidget<'a> {
    TextArea { rows: u32 },
    /// Rendered with a leading empty option labelled [`SELECT_PLACEHOLDER`].
    Select { options: &'a [String] },
    Input { input_type: &'static str },
}
