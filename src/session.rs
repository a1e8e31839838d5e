// src/session.rs
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};

use crate::error::{ReconResult, ReconError};

/// One orchestration run: a target plus the timestamped directory its
/// results land in. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct ResultSession {
    pub target: String,
    pub created_at: DateTime<Utc>,
    pub root: PathBuf,
}

impl ResultSession {
    /// Create the session directory tree under `results_dir`. Succeeds
    /// idempotently if the directory already exists.
    pub fn create(results_dir: &Path, target: &str, created_at: DateTime<Utc>) -> ReconResult<Self> {
        let root = results_dir.join(dir_name(target, created_at));
        std::fs::create_dir_all(&root).map_err(|e| ReconError::FileError {
            path: root.clone(),
            message: format!("Failed to create results directory: {}", e),
        })?;

        Ok(Self {
            target: target.to_string(),
            created_at,
            root,
        })
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    pub fn fuzzing_dir(&self) -> PathBuf {
        self.root.join("fuzzing")
    }
}

/// Derive the session directory name: target with path separators
/// sanitized, suffixed with the UTC creation time at second precision.
pub fn dir_name(target: &str, created_at: DateTime<Utc>) -> String {
    format!(
        "{}_{}",
        target.replace('/', "_"),
        created_at.format("%Y%m%dT%H%M%SZ")
    )
}
