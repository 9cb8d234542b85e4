//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ExerciseDemo};
use std::path::{Path, PathBuf};

/// Hosted text-generation capability used by the assisted-rewrite strategy.
///
/// Constructed once at startup and shared; implementations hold no per-call state.
#[async_trait::async_trait]
pub trait TextGenerationPort: Send + Sync {
    /// Generate a single completion for `prompt`, capped at `max_tokens` output tokens.
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, DomainError>;
}

/// Converts plan text into a downloadable document buffer.
pub trait DocumentExporterPort: Send + Sync {
    /// Render `text` as-is. Never validates or rewrites the content.
    fn export(&self, text: &str) -> Result<Vec<u8>, DomainError>;

    /// MIME type of the produced buffer (e.g. "application/pdf").
    fn mime_type(&self) -> &'static str;

    /// Fixed download filename.
    fn file_name(&self) -> &'static str;
}

/// Where exported documents are delivered ("download").
#[async_trait::async_trait]
pub trait DocumentSinkPort: Send + Sync {
    /// Store `bytes` under `file_name`, replacing any previous file. Returns the final path.
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, DomainError>;
}

/// Exercise demonstration images.
#[async_trait::async_trait]
pub trait ExerciseAssetPort: Send + Sync {
    /// One entry per canonical exercise. Missing files become placeholders, never errors.
    async fn demos(&self) -> Vec<ExerciseDemo>;

    /// Directory the assets are resolved against.
    fn base_dir(&self) -> &Path;
}
