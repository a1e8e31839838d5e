// src/pipeline/scan.rs
use tracing::warn;

use crate::error::ReconResult;
use crate::report::StepOutcome;
use crate::session::ResultSession;
use crate::tools::{Tool, ToolRegistry};
use crate::utils::shell;

/// Port/service discovery. Non-intrusive: no host discovery ping, version
/// detection only, no scripts. nmap owns the XML output file; the console
/// stream is only logged.
pub async fn run_port_scan(
    registry: &ToolRegistry,
    session: &ResultSession,
    steps: &mut Vec<StepOutcome>,
) -> ReconResult<()> {
    let name = Tool::Nmap.name();

    if !registry.available(Tool::Nmap) {
        steps.push(StepOutcome::skipped_missing_tool(
            name,
            format!("{} not found on PATH", name),
        ));
        return Ok(());
    }

    let output_path = session.path("nmap.xml");
    let output = output_path.to_string_lossy().into_owned();
    let args = ["-Pn", "-sV", "-oX", output.as_str(), session.target.as_str()];

    match shell::run_capture(registry.command(Tool::Nmap), &args, false).await {
        Ok(_) => {
            println!("[+] nmap scan saved to {}", output_path.display());
            steps.push(StepOutcome::completed(name));
        }
        Err(e) => {
            warn!("{} could not be run: {}", name, e);
            steps.push(StepOutcome::skipped_missing_tool(name, e.to_string()));
        }
    }

    Ok(())
}

/// Template-based vulnerability scan against the full merged subdomain
/// list. nuclei owns its output file.
pub async fn run_vuln_scan(
    registry: &ToolRegistry,
    session: &ResultSession,
    steps: &mut Vec<StepOutcome>,
) -> ReconResult<()> {
    let name = Tool::Nuclei.name();

    if !registry.available(Tool::Nuclei) {
        steps.push(StepOutcome::skipped_missing_tool(
            name,
            format!("{} not found on PATH", name),
        ));
        return Ok(());
    }

    let merged_path = session.path("subdomains.txt");
    if !merged_path.exists() {
        steps.push(StepOutcome::skipped_missing_prerequisite(
            name,
            "merged subdomain file does not exist",
        ));
        return Ok(());
    }

    let output_path = session.path("nuclei.txt");
    let merged = merged_path.to_string_lossy().into_owned();
    let output = output_path.to_string_lossy().into_owned();
    let args = ["-l", merged.as_str(), "-o", output.as_str()];

    match shell::run_capture(registry.command(Tool::Nuclei), &args, false).await {
        Ok(_) => {
            println!("[+] nuclei scan saved to {}", output_path.display());
            steps.push(StepOutcome::completed(name));
        }
        Err(e) => {
            warn!("{} could not be run: {}", name, e);
            steps.push(StepOutcome::skipped_missing_tool(name, e.to_string()));
        }
    }

    Ok(())
}
