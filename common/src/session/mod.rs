//! The generator page as one state value.
//!
//! [`GeneratorSession`] ties the catalog, the selection, the form engine and
//! the generation workflow together and keeps the single error banner and
//! the transient flash message the page shows. Every method is a discrete
//! transition; the frontend calls exactly one per message.

use crate::catalog::{CatalogOutcome, TemplateCatalog};
use crate::error::AppError;
use crate::export::{self, DownloadSink};
use crate::form::FormEngine;
use crate::model::{GeneratedArtifact, TemplateSchema};
use crate::workflow::{Completion, GenerationWorkflow, PendingGeneration, Ticket};

pub const COPIED_MESSAGE: &str = "Copied to clipboard";
pub const FORM_CLEARED_MESSAGE: &str = "Form cleared";

/// A transient confirmation. `id` lets a timer clear only its own message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct GeneratorSession {
    user_id: String,
    catalog: TemplateCatalog,
    selected: Option<String>,
    form: FormEngine,
    workflow: GenerationWorkflow,
    error: Option<AppError>,
    flash: Option<Flash>,
    flash_seq: u64,
}

impl GeneratorSession {
    /// A session for `user_id` whose catalog is loading.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_template(&self) -> Option<&TemplateSchema> {
        self.selected.as_deref().and_then(|id| self.catalog.find(id))
    }

    pub fn form(&self) -> &FormEngine {
        &self.form
    }

    pub fn workflow(&self) -> &GenerationWorkflow {
        &self.workflow
    }

    pub fn artifact(&self) -> Option<&GeneratedArtifact> {
        self.workflow.artifact()
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    /// The error shown in the dismissible page banner (load and export failures).
    pub fn banner_error(&self) -> Option<&AppError> {
        self.error.as_ref().filter(|err| err.is_dismissible())
    }

    /// The error shown inline next to the form (validation and generation failures).
    pub fn form_error(&self) -> Option<&AppError> {
        self.error.as_ref().filter(|err| !err.is_dismissible())
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    pub fn pii_count(&self) -> usize {
        self.form.pii_count()
    }

    /// Whether the generate button is enabled.
    pub fn can_submit(&self) -> bool {
        self.selected_template().is_some() && !self.user_id.is_empty() && !self.workflow.is_submitting()
    }

    /// Applies the result of the catalog fetch.
    ///
    /// The first template is selected only when the user has not picked one.
    pub fn apply_catalog(&mut self, outcome: CatalogOutcome) {
        if let Some(err) = self.catalog.apply(outcome) {
            self.error = Some(err);
            return;
        }
        if self.selected.is_none() {
            if let Some(first) = self.catalog.first().map(|template| template.id.clone()) {
                self.select_template(&first);
            }
        }
    }

    /// Makes `id` the selected template and rebuilds the form for it.
    ///
    /// The previous form and artifact are dropped before the new defaults are
    /// applied. Selecting the current template again changes nothing.
    pub fn select_template(&mut self, id: &str) -> bool {
        if self.selected.as_deref() == Some(id) {
            return false;
        }
        let Some(schema) = self.catalog.find(id) else {
            tracing::warn!("cannot select unknown template {}", id);
            return false;
        };

        self.workflow.invalidate();
        self.form.clear();
        self.form.load(schema);
        self.selected = Some(id.to_string());
        tracing::debug!("selected template {}", id);
        true
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.form.set_field(name, value)
    }

    /// Empties every field and drops the artifact. No-op without a selection.
    pub fn reset_form(&mut self) -> Option<u64> {
        self.selected.as_ref()?;
        self.form.reset();
        self.workflow.clear_artifact();
        Some(self.show_flash(FORM_CLEARED_MESSAGE))
    }

    /// Starts a generation and returns the request to send.
    ///
    /// Without a selected template or identity this is a no-op. Blank
    /// required fields surface a validation error instead of a request.
    pub fn submit(&mut self) -> Option<PendingGeneration> {
        let schema = self.selected_template()?;
        if self.user_id.is_empty() || self.workflow.is_submitting() {
            return None;
        }

        let missing = self.form.missing_required(schema);
        if !missing.is_empty() {
            self.error = Some(AppError::Validation { missing });
            return None;
        }

        let template_id = schema.id.clone();
        let pending = self
            .workflow
            .begin(Some(&template_id), &self.user_id, self.form.snapshot())?;
        self.error = None;
        tracing::info!("submitting generation {} for template {}", pending.ticket, template_id);
        Some(pending)
    }

    /// Records the outcome of the generation call started with `ticket`.
    pub fn finish_generation(&mut self, ticket: Ticket, result: Result<GeneratedArtifact, AppError>) {
        match self.workflow.complete(ticket, result) {
            Completion::Failed(err) => self.error = Some(err),
            Completion::Succeeded | Completion::Stale => {}
        }
    }

    /// Offers the artifact for download. Failures land in the error banner.
    pub fn download<S: DownloadSink>(&mut self, sink: &S, extension: &str) -> Option<String> {
        let result = export::download(sink, self.workflow.artifact()?, extension);
        match result {
            Ok(filename) => Some(filename),
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    pub fn copy_succeeded(&mut self) -> u64 {
        self.show_flash(COPIED_MESSAGE)
    }

    pub fn copy_failed(&mut self) {
        self.error = Some(AppError::copy_failed());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn show_flash(&mut self, message: &str) -> u64 {
        self.flash_seq += 1;
        self.flash = Some(Flash {
            id: self.flash_seq,
            message: message.to_string(),
        });
        self.flash_seq
    }

    /// Clears the flash if it is still the one identified by `id`.
    pub fn clear_flash(&mut self, id: u64) -> bool {
        if self.flash.as_ref().is_some_and(|flash| flash.id == id) {
            self.flash = None;
            true
        } else {
            false
        }
    }
}
