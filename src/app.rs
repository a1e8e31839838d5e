// src/app.rs
use std::io::BufRead;
use std::path::PathBuf;
use chrono::Utc;
use tracing::info;

use crate::config::Config;
use crate::error::{ReconResult, ReconError};
use crate::gate;
use crate::pipeline;
use crate::report::RunReport;
use crate::session::ResultSession;
use crate::tools::ToolRegistry;

/// The application: configuration plus the immutable tool registry built
/// from it, wired to the single orchestration entry point.
pub struct App {
    config: Config,
    registry: ToolRegistry,
}

impl App {
    pub fn new(config: Config) -> Self {
        let registry = ToolRegistry::from_config(&config);
        Self { config, registry }
    }

    /// Run the full pipeline against a target, gating on an acknowledgment
    /// read from standard input. Returns the session directory.
    pub async fn run(&self, target: &str) -> ReconResult<PathBuf> {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        self.run_with_input(target, &mut input).await
    }

    /// Same as [`App::run`], with the acknowledgment read from any reader.
    pub async fn run_with_input<R: BufRead>(
        &self,
        target: &str,
        input: &mut R,
    ) -> ReconResult<PathBuf> {
        let target = target.trim();
        if target.is_empty() {
            return Err(ReconError::InvalidInput("target domain is empty".to_string()));
        }

        println!("=== reconkit: sequential recon orchestration ===");
        if !gate::confirm_authorization(input)? {
            println!("Permission not confirmed. Exiting.");
            return Err(ReconError::PermissionDenied(
                "authorization token not confirmed".to_string(),
            ));
        }

        let started_at = Utc::now();
        let session = ResultSession::create(&self.config.global.results_dir, target, started_at)?;
        info!("results directory: {}", session.root.display());

        let pipeline_report = pipeline::run(&self.config, &self.registry, &session).await?;

        let report = RunReport {
            target: target.to_string(),
            started_at,
            results_dir: session.root.clone(),
            subdomain_count: pipeline_report.subdomain_count,
            steps: pipeline_report.steps,
        };
        report.write_to(&session.path("report.json")).await?;

        println!();
        println!("=== DONE ===");
        println!("Results folder: {}", session.root.display());
        println!("Review outputs before taking any action. Use findings only with permission.");

        Ok(session.root)
    }
}
