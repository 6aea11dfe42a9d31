use docgen_common::catalog::CatalogOutcome;
use docgen_common::model::GeneratedArtifact;
use docgen_common::workflow::Ticket;
use docgen_common::AppError;

pub enum Msg {
    CatalogFinished(CatalogOutcome),
    SelectTemplate(String),
    SetField(String, String),
    ResetForm,
    Generate,
    GenerationFinished(Ticket, Result<GeneratedArtifact, AppError>),
    CopyText,
    CopyFinished(Result<(), AppError>),
    Download(String),
    ClearFlash(u64),
    DismissError,
}
