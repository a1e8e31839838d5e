// src/report.rs
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ReconResult, ReconError};

/// What happened to one pipeline step.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    SkippedMissingTool,
    SkippedMissingPrerequisite,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub step: String,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StepOutcome {
    pub fn completed(step: &str) -> Self {
        Self {
            step: step.to_string(),
            status: StepStatus::Completed,
            detail: None,
        }
    }

    pub fn skipped_missing_tool(step: &str, detail: impl Into<String>) -> Self {
        Self {
            step: step.to_string(),
            status: StepStatus::SkippedMissingTool,
            detail: Some(detail.into()),
        }
    }

    pub fn skipped_missing_prerequisite(step: &str, detail: impl Into<String>) -> Self {
        Self {
            step: step.to_string(),
            status: StepStatus::SkippedMissingPrerequisite,
            detail: Some(detail.into()),
        }
    }
}

/// Machine-readable record of one run, persisted next to the tool captures.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub target: String,
    pub started_at: DateTime<Utc>,
    pub results_dir: PathBuf,
    pub subdomain_count: usize,
    pub steps: Vec<StepOutcome>,
}

impl RunReport {
    pub async fn write_to(&self, path: &Path) -> ReconResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ReconError::UnexpectedError(format!("Failed to serialize run report: {}", e)))?;

        tokio::fs::write(path, json).await
            .map_err(|e| ReconError::FileError {
                path: path.to_path_buf(),
                message: format!("Failed to write run report: {}", e),
            })
    }
}
