//! Static asset adapters. Implement ExerciseAssetPort.

pub mod fs_assets;

pub use fs_assets::{EXERCISE_IMAGES, FsExerciseAssets};
