//! Template catalog loader state.
//!
//! The frontend issues one cancellable `GET /templates` when the generator
//! mounts and reports the result as a [`CatalogOutcome`]. Selecting a default
//! template is left to the session, which owns the selection.

use crate::error::AppError;
use crate::model::TemplateSchema;

/// Shown in place of the catalog when the service has no templates.
pub const EMPTY_CATALOG_NOTICE: &str =
    "No templates available. Run the backend seeding script to add starter templates.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    Loading,
    Loaded,
    Failed,
    /// The fetch was aborted before it completed. Not an error.
    Cancelled,
}

/// Result of one catalog fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogOutcome {
    Loaded(Vec<TemplateSchema>),
    Failed(AppError),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    phase: CatalogPhase,
    templates: Vec<TemplateSchema>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCatalog {
    /// A catalog whose first fetch is in flight.
    pub fn new() -> Self {
        Self {
            phase: CatalogPhase::Loading,
            templates: Vec::new(),
        }
    }

    pub fn phase(&self) -> CatalogPhase {
        self.phase
    }

    pub fn templates(&self) -> &[TemplateSchema] {
        &self.templates
    }

    pub fn is_loading(&self) -> bool {
        self.phase == CatalogPhase::Loading
    }

    /// True once a fetch succeeded with no templates at all.
    pub fn is_empty_notice(&self) -> bool {
        self.phase == CatalogPhase::Loaded && self.templates.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&TemplateSchema> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn first(&self) -> Option<&TemplateSchema> {
        self.templates.first()
    }

    /// Applies a fetch result and returns the error to surface, if any.
    ///
    /// A failed fetch keeps whatever was loaded before so browsing can go on.
    pub fn apply(&mut self, outcome: CatalogOutcome) -> Option<AppError> {
        match outcome {
            CatalogOutcome::Loaded(templates) => {
                for template in &templates {
                    let duplicates = template.duplicate_field_names();
                    if !duplicates.is_empty() {
                        tracing::warn!(
                            "template {} declares duplicate fields: {}",
                            template.id,
                            duplicates.join(", ")
                        );
                    }
                }
                tracing::info!("loaded {} templates", templates.len());
                self.templates = templates;
                self.phase = CatalogPhase::Loaded;
                None
            }
            CatalogOutcome::Failed(err) => {
                tracing::error!("template catalog failed to load: {}", err);
                self.phase = CatalogPhase::Failed;
                Some(err)
            }
            CatalogOutcome::Cancelled => {
                tracing::debug!("template catalog fetch cancelled");
                self.phase = CatalogPhase::Cancelled;
                None
            }
        }
    }
}
