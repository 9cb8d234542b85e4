//! Implements DocumentSinkPort by writing into an output directory.
//!
//! Each export overwrites the previous file of the same name.

use crate::domain::DomainError;
use crate::ports::DocumentSinkPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Output-directory document sink.
pub struct FsDocumentSink {
    output_dir: PathBuf,
}

impl FsDocumentSink {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl DocumentSinkPort for FsDocumentSink {
    /// Write-replace: temp file, sync_all, then rename over the target, so a crash
    /// mid-write never leaves a truncated document behind.
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| DomainError::Output(format!("create output dir: {}", e)))?;

        let path = self.output_dir.join(file_name);
        let temp_path = self.output_dir.join(format!("{}.tmp", file_name));
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Output(format!("create temp file: {}", e)))?;
        f.write_all(bytes)
            .await
            .map_err(|e| DomainError::Output(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Output(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| DomainError::Output(format!("rename failed: {}", e)))?;

        let abs_path = path.canonicalize().unwrap_or_else(|_| path.clone());
        info!(path = %abs_path.display(), bytes = bytes.len(), "document saved");
        Ok(path)
    }
}
