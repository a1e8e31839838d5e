// src/utils/shell.rs
use std::ffi::OsStr;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tracing::{debug, trace, warn};

use crate::error::{ReconResult, ReconError};

/// The combined standard output/error text of a finished subprocess,
/// line-split in arrival order.
#[derive(Debug)]
pub struct CapturedOutput {
    pub lines: Vec<String>,
    pub status: ExitStatus,
}

impl CapturedOutput {
    /// The capture as newline-delimited text, suitable for writing verbatim
    /// to a per-tool file.
    pub fn text(&self) -> String {
        if self.lines.is_empty() {
            String::new()
        } else {
            let mut text = self.lines.join("\n");
            text.push('\n');
            text
        }
    }
}

fn display_command<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run a command to completion, draining stdout and stderr line-by-line into
/// one interleaved capture. Each line is optionally echoed to the console as
/// it arrives. The child is always reaped; a non-zero exit status is logged
/// but does not fail the call, so the capture is available regardless.
pub async fn run_capture<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    echo: bool,
) -> ReconResult<CapturedOutput> {
    let rendered = display_command(program, args);
    println!("[+] running: {}", rendered);
    debug!("Executing command: {}", rendered);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| ReconError::ExternalToolError {
            tool: program.display().to_string(),
            message: format!("Failed to spawn: {}", e),
        })?;

    let stdout = child.stdout.take()
        .ok_or_else(|| ReconError::UnexpectedError("child stdout was not piped".to_string()))?;
    let stderr = child.stderr.take()
        .ok_or_else(|| ReconError::UnexpectedError("child stderr was not piped".to_string()))?;

    let mut out_lines = BufReader::new(stdout).lines();
    let mut err_lines = BufReader::new(stderr).lines();

    let mut lines = Vec::new();
    let mut out_open = true;
    let mut err_open = true;

    while out_open || err_open {
        tokio::select! {
            line = out_lines.next_line(), if out_open => match line? {
                Some(line) => {
                    if echo {
                        println!("{}", line);
                    }
                    lines.push(line);
                }
                None => out_open = false,
            },
            line = err_lines.next_line(), if err_open => match line? {
                Some(line) => {
                    if echo {
                        println!("{}", line);
                    }
                    lines.push(line);
                }
                None => err_open = false,
            },
        }
    }

    let status = child.wait().await?;

    if !status.success() {
        warn!("Command failed ({}): {}", status, rendered);
    } else {
        trace!("Command succeeded: {}", rendered);
    }

    Ok(CapturedOutput { lines, status })
}

/// Run a command and persist its combined capture to a file. The file is
/// written whatever the exit status was, so a crashed tool leaves the same
/// trace as one that produced no output.
pub async fn run_capture_to_file<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    output_path: &Path,
    echo: bool,
) -> ReconResult<CapturedOutput> {
    let captured = run_capture(program, args, echo).await?;

    tokio::fs::write(output_path, captured.text()).await
        .map_err(|e| ReconError::FileError {
            path: output_path.to_path_buf(),
            message: format!("Failed to write command output: {}", e),
        })?;

    Ok(captured)
}

/// Run a command and append its stdout lines to an already-open sink as they
/// are produced. Stderr is discarded. Used by the per-subdomain archiver
/// loop, which funnels many invocations into one shared file.
pub async fn run_append_stdout<S, W>(
    program: &Path,
    args: &[S],
    sink: &mut W,
) -> ReconResult<ExitStatus>
where
    S: AsRef<OsStr>,
    W: AsyncWrite + Unpin,
{
    let rendered = display_command(program, args);
    debug!("Executing command: {}", rendered);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| ReconError::ExternalToolError {
            tool: program.display().to_string(),
            message: format!("Failed to spawn: {}", e),
        })?;

    let stdout = child.stdout.take()
        .ok_or_else(|| ReconError::UnexpectedError("child stdout was not piped".to_string()))?;
    let mut lines = BufReader::new(stdout).lines();

    while let Some(line) = lines.next_line().await? {
        sink.write_all(line.as_bytes()).await?;
        sink.write_all(b"\n").await?;
    }

    let status = child.wait().await?;
    if !status.success() {
        warn!("Command failed ({}): {}", status, rendered);
    }

    Ok(status)
}
