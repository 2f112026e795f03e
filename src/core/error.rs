//! Error types for form submission and form lifecycle

use super::forms::{FormEvent, FormPhase};

/// Submission error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Simulated API error")]
    Simulated,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Submission rejected with status {status}")]
    Rejected { status: u16 },

    #[error("Failed to encode form data: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for SubmissionError {
    fn from(err: serde_json::Error) -> Self {
        SubmissionError::Serialize(err.to_string())
    }
}

/// Form lifecycle error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Cannot apply {event:?} while the form is {phase}")]
    IllegalTransition { phase: FormPhase, event: FormEvent },

    #[error("A submission is already in progress")]
    AlreadySubmitting,
}
