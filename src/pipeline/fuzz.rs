// src/pipeline/fuzz.rs
use tracing::warn;

use crate::config::Config;
use crate::error::{ReconResult, ReconError};
use crate::report::StepOutcome;
use crate::session::ResultSession;
use crate::tools::{Tool, ToolRegistry};
use crate::utils::shell;

const STEP: &str = "fuzzing";

/// Directory fuzzing. The primary fuzzer needs a wordlist on disk and is
/// pointed at the first `host_limit` merged subdomains; without it the
/// fallback fuzzer runs against the bare target. The `fuzzing/` directory
/// exists either way.
pub async fn run(
    config: &Config,
    registry: &ToolRegistry,
    session: &ResultSession,
    steps: &mut Vec<StepOutcome>,
) -> ReconResult<()> {
    let fuzz_dir = session.fuzzing_dir();
    tokio::fs::create_dir_all(&fuzz_dir).await
        .map_err(|e| ReconError::FileError {
            path: fuzz_dir.clone(),
            message: format!("Failed to create fuzzing directory: {}", e),
        })?;

    let wordlist = &config.global.wordlist;
    let ffuf_present = registry.available(Tool::Ffuf);

    if ffuf_present && wordlist.exists() {
        let hosts = fuzz_hosts(session, config.fuzzing.host_limit).await?;
        if hosts.is_empty() {
            steps.push(StepOutcome::skipped_missing_prerequisite(
                STEP,
                "merged subdomain list is empty",
            ));
            return Ok(());
        }

        let match_codes = config.fuzzing.match_codes.iter()
            .map(|code| code.to_string())
            .collect::<Vec<_>>()
            .join(",");

        for host in hosts {
            let url = format!("https://{}/FUZZ", host);
            let output_path = fuzz_dir.join(format!("ffuf_{}.txt", host.replace('/', "_")));
            let args = vec![
                "-u".to_string(),
                url,
                "-w".to_string(),
                wordlist.to_string_lossy().into_owned(),
                "-mc".to_string(),
                match_codes.clone(),
                "-t".to_string(),
                config.fuzzing.threads.to_string(),
            ];

            match shell::run_capture_to_file(registry.command(Tool::Ffuf), &args, &output_path, false).await {
                Ok(_) => println!("[+] ffuf results saved to {}", output_path.display()),
                Err(e) => warn!("ffuf failed for {}: {}", host, e),
            }
        }

        steps.push(StepOutcome::completed(STEP));
        return Ok(());
    }

    if registry.available(Tool::Dirsearch) {
        let output_path = fuzz_dir.join("dirsearch.txt");
        let args = vec![
            "-u".to_string(),
            format!("https://{}", session.target),
            "-e".to_string(),
            config.fuzzing.extensions.join(","),
            "-w".to_string(),
            wordlist.to_string_lossy().into_owned(),
        ];

        match shell::run_capture_to_file(registry.command(Tool::Dirsearch), &args, &output_path, true).await {
            Ok(_) => {
                println!("[+] dirsearch results saved to {}", output_path.display());
                steps.push(StepOutcome::completed(STEP));
            }
            Err(e) => {
                warn!("dirsearch could not be run: {}", e);
                steps.push(StepOutcome::skipped_missing_tool(STEP, e.to_string()));
            }
        }
        return Ok(());
    }

    if ffuf_present {
        // ffuf is present but unusable, and no fallback exists
        steps.push(StepOutcome::skipped_missing_prerequisite(
            STEP,
            format!("wordlist not found at {}", wordlist.display()),
        ));
    } else {
        steps.push(StepOutcome::skipped_missing_tool(STEP, "no fuzzing tool on PATH"));
    }

    Ok(())
}

/// The first `limit` hosts of the merged subdomain file, in file order.
async fn fuzz_hosts(session: &ResultSession, limit: usize) -> ReconResult<Vec<String>> {
    let merged_path = session.path("subdomains.txt");
    let merged = tokio::fs::read_to_string(&merged_path).await
        .map_err(|e| ReconError::FileError {
            path: merged_path,
            message: format!("Failed to read merged subdomains: {}", e),
        })?;

    Ok(merged
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(limit)
        .map(str::to_string)
        .collect())
}
