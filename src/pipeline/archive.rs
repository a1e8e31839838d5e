// src/pipeline/archive.rs
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::warn;

use crate::error::{ReconResult, ReconError};
use crate::report::StepOutcome;
use crate::session::ResultSession;
use crate::tools::{Tool, ToolRegistry};
use crate::utils::shell;

/// URL archaeology: one archiver invocation per line of the merged
/// subdomain file, output appended into a single shared file as it is
/// produced. Strictly sequential, one child at a time.
pub async fn run(
    registry: &ToolRegistry,
    session: &ResultSession,
    steps: &mut Vec<StepOutcome>,
) -> ReconResult<()> {
    let name = Tool::Waybackurls.name();

    if !registry.available(Tool::Waybackurls) {
        steps.push(StepOutcome::skipped_missing_tool(
            name,
            format!("{} not found on PATH", name),
        ));
        return Ok(());
    }

    let merged_path = session.path("subdomains.txt");
    let merged = tokio::fs::read_to_string(&merged_path).await
        .map_err(|e| ReconError::FileError {
            path: merged_path.clone(),
            message: format!("Failed to read merged subdomains: {}", e),
        })?;

    let urls_path = session.path("archived_urls.txt");
    let file = tokio::fs::File::create(&urls_path).await
        .map_err(|e| ReconError::FileError {
            path: urls_path.clone(),
            message: format!("Failed to create archive file: {}", e),
        })?;
    let mut sink = BufWriter::new(file);

    for line in merged.lines() {
        let domain = line.trim();
        if domain.is_empty() {
            continue;
        }

        if let Err(e) = shell::run_append_stdout(
            registry.command(Tool::Waybackurls),
            &[domain],
            &mut sink,
        ).await {
            warn!("{} failed for {}: {}", name, domain, e);
        }
    }

    sink.flush().await?;

    println!("[+] archived URLs saved to {}", urls_path.display());
    steps.push(StepOutcome::completed(name));

    Ok(())
}
