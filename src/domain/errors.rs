//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// The text-generation capability failed or timed out.
    #[error("Plan generation unavailable: {0}")]
    GenerationUnavailable(String),

    #[error("Document export failed: {0}")]
    Export(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("No plan generated yet")]
    NoPlan,

    #[error("Input error: {0}")]
    Input(String),
}
