//! Generation workflow state machine.
//!
//! ```text
//! idle ──submit──▶ submitting ──▶ succeeded
//!                             └─▶ failed
//! ```
//!
//! Each submission gets a [`Ticket`]. Invalidating the workflow (the user
//! picked another template) forgets the in-flight ticket, and a completion
//! carrying a stale ticket is dropped. The generation call itself is never
//! cancelled.

use crate::error::AppError;
use crate::model::GeneratedArtifact;
use crate::requests::{FormInputs, GenerationRequest, OutputFormat};

/// Identifies one submission.
pub type Ticket = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What happened to a completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed(AppError),
    /// The workflow was invalidated while the call was in flight.
    Stale,
}

/// A request ready to be sent, with the ticket its completion must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    pub ticket: Ticket,
    pub request: GenerationRequest,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationWorkflow {
    status: GenerationStatus,
    artifact: Option<GeneratedArtifact>,
    in_flight: Option<Ticket>,
    next_ticket: Ticket,
}

impl GenerationWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == GenerationStatus::Submitting
    }

    /// The most recent successful artifact, if it is still current.
    pub fn artifact(&self) -> Option<&GeneratedArtifact> {
        self.artifact.as_ref()
    }

    /// Starts a submission.
    ///
    /// Returns `None`, changing nothing, when no template is selected, the
    /// identity is empty or a submission is already in flight.
    pub fn begin(
        &mut self,
        template_id: Option<&str>,
        user_id: &str,
        inputs: FormInputs,
    ) -> Option<PendingGeneration> {
        let template_id = template_id?;
        if user_id.is_empty() || self.is_submitting() {
            return None;
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.in_flight = Some(ticket);
        self.artifact = None;
        self.status = GenerationStatus::Submitting;

        Some(PendingGeneration {
            ticket,
            request: GenerationRequest {
                template_id: template_id.to_string(),
                user_id: user_id.to_string(),
                inputs,
                output_format: OutputFormat::Text,
            },
        })
    }

    /// Records the result of the submission identified by `ticket`.
    ///
    /// A result whose ticket is not the in-flight one is discarded.
    pub fn complete(&mut self, ticket: Ticket, result: Result<GeneratedArtifact, AppError>) -> Completion {
        if self.in_flight != Some(ticket) {
            tracing::debug!("discarding stale generation result {}", ticket);
            return Completion::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(artifact) => {
                tracing::info!("document {} generated", artifact.document_id);
                self.artifact = Some(artifact);
                self.status = GenerationStatus::Succeeded;
                Completion::Succeeded
            }
            Err(err) => {
                self.status = GenerationStatus::Failed;
                Completion::Failed(err)
            }
        }
    }

    /// Drops the held artifact but lets an in-flight submission finish.
    pub fn clear_artifact(&mut self) {
        self.artifact = None;
        if self.status == GenerationStatus::Succeeded {
            self.status = GenerationStatus::Idle;
        }
    }

    /// Forgets the held artifact and any in-flight submission.
    pub fn invalidate(&mut self) {
        self.artifact = None;
        self.in_flight = None;
        self.status = GenerationStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(id: &str) -> GeneratedArtifact {
        serde_json::from_value(serde_json::json!({ "document_id": id, "generated_text": "body" })).unwrap()
    }

    fn inputs() -> FormInputs {
        FormInputs::from([("party".to_string(), "Acme Corp".to_string())])
    }

    #[test]
    fn begin_requires_template_and_identity() {
        let mut workflow = GenerationWorkflow::new();

        assert_eq!(workflow.begin(None, "u1", inputs()), None);
        assert_eq!(workflow.begin(Some("t1"), "", inputs()), None);
        assert_eq!(workflow.status(), GenerationStatus::Idle);
        assert!(workflow.artifact().is_none());
    }

    #[test]
    fn begin_builds_text_request_and_enters_submitting() {
        let mut workflow = GenerationWorkflow::new();
        let pending = workflow.begin(Some("t1"), "u1", inputs()).unwrap();

        assert_eq!(pending.request.template_id, "t1");
        assert_eq!(pending.request.user_id, "u1");
        assert_eq!(pending.request.inputs, inputs());
        assert_eq!(pending.request.output_format, OutputFormat::Text);
        assert!(workflow.is_submitting());

        // no second submission while one is in flight
        assert_eq!(workflow.begin(Some("t1"), "u1", inputs()), None);
    }

    #[test]
    fn success_holds_the_artifact() {
        let mut workflow = GenerationWorkflow::new();
        let pending = workflow.begin(Some("t1"), "u1", inputs()).unwrap();

        assert_eq!(workflow.complete(pending.ticket, Ok(artifact("d1"))), Completion::Succeeded);
        assert_eq!(workflow.status(), GenerationStatus::Succeeded);
        assert_eq!(workflow.artifact().map(|a| a.document_id.as_str()), Some("d1"));
    }

    #[test]
    fn new_submission_clears_previous_artifact() {
        let mut workflow = GenerationWorkflow::new();
        let first = workflow.begin(Some("t1"), "u1", inputs()).unwrap();
        workflow.complete(first.ticket, Ok(artifact("d1")));

        let second = workflow.begin(Some("t1"), "u1", inputs()).unwrap();
        assert!(workflow.artifact().is_none());
        assert_ne!(first.ticket, second.ticket);

        let err = AppError::Generation("boom".to_string());
        assert_eq!(workflow.complete(second.ticket, Err(err.clone())), Completion::Failed(err));
        assert_eq!(workflow.status(), GenerationStatus::Failed);
        assert!(workflow.artifact().is_none());
    }

    #[test]
    fn stale_completion_after_invalidate_is_dropped() {
        let mut workflow = GenerationWorkflow::new();
        let pending = workflow.begin(Some("t1"), "u1", inputs()).unwrap();

        workflow.invalidate();

        assert_eq!(workflow.complete(pending.ticket, Ok(artifact("late"))), Completion::Stale);
        assert!(workflow.artifact().is_none());
        assert_eq!(workflow.status(), GenerationStatus::Idle);
    }
}
