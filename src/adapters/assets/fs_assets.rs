//! Implements ExerciseAssetPort from an image directory on disk.
//!
//! A missing file degrades to a placeholder entry; lookups never fail.

use crate::domain::{DemoAsset, ExerciseDemo};
use crate::ports::ExerciseAssetPort;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Canonical exercises and their image file names, in display order.
pub const EXERCISE_IMAGES: [(&str, &str); 4] = [
    ("Push-ups", "pushup.jpg"),
    ("Squats", "Squats.jpg"),
    ("Plank", "Plank.jpg"),
    ("Dumbbell Curls", "DumbbellCurls.jpg"),
];

/// Exercise images resolved against a base directory.
pub struct FsExerciseAssets {
    base_dir: PathBuf,
}

impl FsExerciseAssets {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn placeholder_text(name: &str) -> String {
        format!("{} demo image not available", name)
    }
}

#[async_trait::async_trait]
impl ExerciseAssetPort for FsExerciseAssets {
    async fn demos(&self) -> Vec<ExerciseDemo> {
        let mut out = Vec::with_capacity(EXERCISE_IMAGES.len());
        for (name, file) in EXERCISE_IMAGES {
            let path = self.base_dir.join(file);
            let asset = if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                debug!(exercise = name, path = %path.display(), "demo image found");
                DemoAsset::Image(path)
            } else {
                warn!(exercise = name, path = %path.display(), "demo image missing, using placeholder");
                DemoAsset::Placeholder(Self::placeholder_text(name))
            };
            out.push(ExerciseDemo {
                name: name.to_string(),
                asset,
            });
        }
        out
    }

    fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
