use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub global: GlobalConfig,
    pub fuzzing: FuzzingConfig,
    pub tools: HashMap<String, ToolConfig>,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Root directory that result sessions are created under
    pub results_dir: PathBuf,
    /// Wordlist handed to the directory fuzzers
    pub wordlist: PathBuf,
}

/// Bounds for the directory fuzzing step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzingConfig {
    /// HTTP status codes the primary fuzzer is told to match
    pub match_codes: Vec<u16>,
    /// Thread count passed to the primary fuzzer (bounds its internal
    /// concurrency, not ours)
    pub threads: usize,
    /// How many merged subdomains the primary fuzzer is pointed at
    pub host_limit: usize,
    /// File extensions probed by the fallback fuzzer
    pub extensions: Vec<String>,
}

/// Per-tool binary override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig {
                results_dir: PathBuf::from("results"),
                wordlist: PathBuf::from(
                    "/usr/share/wordlists/seclists/Discovery/Web-Content/common.txt",
                ),
            },
            fuzzing: FuzzingConfig {
                match_codes: vec![200, 301, 302, 403],
                threads: 20,
                host_limit: 1,
                extensions: ["php", "html", "js", "txt", "json"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            tools: HashMap::new(),
        }
    }
}
