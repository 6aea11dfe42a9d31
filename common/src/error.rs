use thiserror::Error;

/// Message shown when the catalog cannot be fetched or decoded.
pub const LOAD_FAILED: &str = "Unable to load templates. Please check the API.";

/// Fallback message when the generation service fails without a `detail`.
pub const GENERATION_FAILED: &str = "Document generation failed.";

/// Message used when a success response cannot be decoded into an artifact.
pub const UNREADABLE_ARTIFACT: &str = "The document service returned an unreadable response.";

/// Message shown when the clipboard rejects a write.
pub const COPY_FAILED: &str = "Unable to copy text.";

/// Every user-visible failure of the client.
///
/// None of these are fatal: the session stores the value and the view
/// renders its message in the banner. Cancelling the catalog fetch is not
/// represented here at all, see [`crate::catalog::CatalogOutcome::Cancelled`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The template catalog could not be loaded.
    #[error("{0}")]
    Load(String),

    /// Required fields were left empty when the user submitted.
    #[error("Please fill in the required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<String> },

    /// The generation call failed at the transport level or with an error status.
    #[error("{0}")]
    Generation(String),

    /// Copying or downloading the artifact failed.
    #[error("{0}")]
    Export(String),
}

impl AppError {
    pub fn load_failed() -> Self {
        AppError::Load(LOAD_FAILED.to_string())
    }

    pub fn copy_failed() -> Self {
        AppError::Export(COPY_FAILED.to_string())
    }

    /// True for failures the user can dismiss without retrying anything.
    pub fn is_dismissible(&self) -> bool {
        matches!(self, AppError::Load(_) | AppError::Export(_))
    }
}

/// Failure reported by a [`crate::export::DownloadSink`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("could not create the download resource: {0}")]
    Create(String),
    #[error("could not start the download: {0}")]
    Save(String),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_missing_labels() {
        let err = AppError::Validation {
            missing: vec!["Party".to_string(), "Date".to_string()],
        };
        assert_eq!(err.to_string(), "Please fill in the required fields: Party, Date");
    }

    #[test]
    fn export_errors_become_export_app_errors() {
        let err: AppError = ExportError::Save("blocked".to_string()).into();
        assert_eq!(
            err,
            AppError::Export("could not start the download: blocked".to_string())
        );
        assert!(err.is_dismissible());
        assert!(!AppError::Generation("x".into()).is_dismissible());
    }
}
