// src/pipeline/enumerate.rs
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{ReconResult, ReconError};
use crate::report::StepOutcome;
use crate::session::ResultSession;
use crate::tools::{Tool, ToolRegistry};
use crate::utils::shell;

/// Deduplicated subdomains merged across the passive enumerators. Entries
/// are trimmed and never empty; iteration order is lexicographic.
#[derive(Debug, Default)]
pub struct SubdomainSet {
    entries: BTreeSet<String>,
}

impl SubdomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold captured lines into the set. Blank lines are dropped; with
    /// `require_dot`, lines without a `.` are dropped too (amass mixes
    /// informational output into stdout).
    pub fn extend_from_lines<'a>(
        &mut self,
        lines: impl IntoIterator<Item = &'a str>,
        require_dot: bool,
    ) {
        for line in lines {
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            if require_dot && !entry.contains('.') {
                continue;
            }
            self.entries.insert(entry.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Serialize as sorted, newline-delimited text.
    pub async fn write_to(&self, path: &Path) -> ReconResult<()> {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(entry);
            text.push('\n');
        }

        tokio::fs::write(path, text).await
            .map_err(|e| ReconError::FileError {
                path: path.to_path_buf(),
                message: format!("Failed to write merged subdomains: {}", e),
            })
    }
}

struct Enumerator {
    tool: Tool,
    output_file: &'static str,
    require_dot: bool,
}

const ENUMERATORS: [Enumerator; 3] = [
    Enumerator { tool: Tool::Amass, output_file: "amass.txt", require_dot: true },
    Enumerator { tool: Tool::Subfinder, output_file: "subfinder.txt", require_dot: false },
    Enumerator { tool: Tool::Assetfinder, output_file: "assetfinder.txt", require_dot: false },
];

fn enumerator_args<'a>(tool: Tool, target: &'a str) -> Vec<&'a str> {
    match tool {
        Tool::Amass => vec!["enum", "-passive", "-d", target],
        Tool::Subfinder => vec!["-d", target, "-silent"],
        _ => vec![target],
    }
}

/// Passive subdomain enumeration and merge. Each available enumerator runs
/// in turn with its capture persisted to a per-tool file; the merged set is
/// then written sorted and deduplicated to `subdomains.txt`.
pub async fn run(
    registry: &ToolRegistry,
    session: &ResultSession,
    steps: &mut Vec<StepOutcome>,
) -> ReconResult<SubdomainSet> {
    let mut subdomains = SubdomainSet::new();

    for enumerator in &ENUMERATORS {
        let name = enumerator.tool.name();

        if !registry.available(enumerator.tool) {
            steps.push(StepOutcome::skipped_missing_tool(
                name,
                format!("{} not found on PATH", name),
            ));
            continue;
        }

        let args = enumerator_args(enumerator.tool, &session.target);
        let output_path = session.path(enumerator.output_file);

        match shell::run_capture_to_file(registry.command(enumerator.tool), &args, &output_path, false).await {
            Ok(captured) => {
                subdomains.extend_from_lines(
                    captured.lines.iter().map(String::as_str),
                    enumerator.require_dot,
                );
                info!("{} capture saved to {}", name, output_path.display());
                steps.push(StepOutcome::completed(name));
            }
            Err(e) => {
                warn!("{} could not be run: {}", name, e);
                steps.push(StepOutcome::skipped_missing_tool(name, e.to_string()));
            }
        }
    }

    let merged_path = session.path("subdomains.txt");
    subdomains.write_to(&merged_path).await?;
    println!(
        "[+] passive subdomain enumeration complete: {} entries saved to {}",
        subdomains.len(),
        merged_path.display()
    );
    steps.push(StepOutcome::completed("merge"));

    Ok(subdomains)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_deduplicates_and_sorts() {
        let mut set = SubdomainSet::new();
        set.extend_from_lines(["b.example.com", "a.example.com", "a.example.com"], false);
        set.extend_from_lines(["  a.example.com  ", ""], false);

        let entries: Vec<&str> = set.iter().collect();
        assert_eq!(entries, ["a.example.com", "b.example.com"]);
    }

    #[test]
    fn dot_filter_applies_only_when_requested() {
        let mut set = SubdomainSet::new();
        set.extend_from_lines(["a.example.com", "progress output", ""], true);
        set.extend_from_lines(["localhost"], false);

        let entries: Vec<&str> = set.iter().collect();
        assert_eq!(entries, ["a.example.com", "localhost"]);
    }

    #[tokio::test]
    async fn merged_file_is_sorted_with_no_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subdomains.txt");

        let mut set = SubdomainSet::new();
        // Per-tool inputs arrive unordered and overlapping
        set.extend_from_lines(["a.example.com"], true);
        set.extend_from_lines(["a.example.com", "b.example.com"], false);
        set.write_to(&path).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "a.example.com\nb.example.com\n");
    }

    #[tokio::test]
    async fn empty_set_writes_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subdomains.txt");
        SubdomainSet::new().write_to(&path).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
