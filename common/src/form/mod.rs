//! Dynamic form engine.
//!
//! Holds the [`FormState`] of the selected template. The state is rebuilt
//! from scratch on every selection, so values never carry over between
//! templates, and `set_field` is the only way to change a single value.

use crate::model::TemplateSchema;
use crate::requests::FormInputs;

/// Current value of every field of the selected template, keyed by name.
pub type FormState = FormInputs;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEngine {
    values: FormState,
    pii_count: usize,
}

impl FormEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the form with the defaults of `schema`.
    ///
    /// When a field name repeats, the first declaration provides the default.
    pub fn load(&mut self, schema: &TemplateSchema) {
        let mut values = FormState::new();
        for field in &schema.fields {
            values
                .entry(field.name.clone())
                .or_insert_with(|| field.initial_value());
        }
        self.values = values;
        self.pii_count = schema.pii_field_count();
    }

    /// Drops every field, for when nothing is selected.
    pub fn clear(&mut self) {
        self.values.clear();
        self.pii_count = 0;
    }

    /// Updates one field. Returns `false` for names the form does not have.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => {
                tracing::debug!("ignoring value for unknown field {}", name);
                false
            }
        }
    }

    /// Empties every field. Defaults are not restored.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    /// Copy of the current values, as sent with a generation request.
    pub fn snapshot(&self) -> FormState {
        self.values.clone()
    }

    /// Number of PII fields of the loaded template.
    pub fn pii_count(&self) -> usize {
        self.pii_count
    }

    /// Labels of required fields of `schema` that are still blank.
    pub fn missing_required(&self, schema: &TemplateSchema) -> Vec<String> {
        schema
            .fields
            .iter()
            .filter(|field| field.required && self.value(&field.name).trim().is_empty())
            .map(|field| field.display_label().to_string())
            .collect()
    }
}
