// src/tools.rs
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;

/// The external collaborators the pipeline knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Amass,
    Subfinder,
    Assetfinder,
    Waybackurls,
    Ffuf,
    Dirsearch,
    Nmap,
    Nuclei,
}

impl Tool {
    pub const ALL: [Tool; 8] = [
        Tool::Amass,
        Tool::Subfinder,
        Tool::Assetfinder,
        Tool::Waybackurls,
        Tool::Ffuf,
        Tool::Dirsearch,
        Tool::Nmap,
        Tool::Nuclei,
    ];

    /// Logical name, used for config override keys and log lines
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Amass => "amass",
            Tool::Subfinder => "subfinder",
            Tool::Assetfinder => "assetfinder",
            Tool::Waybackurls => "waybackurls",
            Tool::Ffuf => "ffuf",
            Tool::Dirsearch => "dirsearch",
            Tool::Nmap => "nmap",
            Tool::Nuclei => "nuclei",
        }
    }
}

/// Immutable mapping from logical tool name to invocable command, built once
/// at startup from the configured overrides.
pub struct ToolRegistry {
    commands: HashMap<Tool, PathBuf>,
}

impl ToolRegistry {
    pub fn from_config(config: &Config) -> Self {
        let mut commands = HashMap::new();
        for tool in Tool::ALL {
            let command = match config.tools.get(tool.name()) {
                Some(override_cfg) => override_cfg.path.clone(),
                None => PathBuf::from(tool.name()),
            };
            commands.insert(tool, command);
        }
        Self { commands }
    }

    /// The command the tool is invoked as: either a configured path or the
    /// bare command name resolved by the OS at spawn time.
    pub fn command(&self, tool: Tool) -> &Path {
        &self.commands[&tool]
    }

    /// Capability query: can this tool be invoked at all? Overridden paths
    /// are checked directly; bare names are probed against the search path.
    pub fn available(&self, tool: Tool) -> bool {
        let command = self.command(tool);
        let found = if command.components().count() > 1 {
            is_executable(command)
        } else {
            find_in_path(command).is_some()
        };
        if !found {
            debug!("tool {} not found, dependent step will be skipped", tool.name());
        }
        found
    }
}

fn find_in_path(command: &Path) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(command))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolConfig;

    #[cfg(unix)]
    fn write_stub(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn default_commands_are_bare_names() {
        let registry = ToolRegistry::from_config(&Config::default());
        assert_eq!(registry.command(Tool::Subfinder), Path::new("subfinder"));
        assert_eq!(registry.command(Tool::Nmap), Path::new("nmap"));
    }

    #[cfg(unix)]
    #[test]
    fn override_path_takes_precedence_and_is_probed_directly() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path(), "amass");

        let mut config = Config::default();
        config.tools.insert("amass".to_string(), ToolConfig { path: stub.clone() });

        let registry = ToolRegistry::from_config(&config);
        assert_eq!(registry.command(Tool::Amass), stub.as_path());
        assert!(registry.available(Tool::Amass));
    }

    #[test]
    fn nonexistent_override_is_unavailable() {
        let mut config = Config::default();
        config.tools.insert(
            "nuclei".to_string(),
            ToolConfig { path: PathBuf::from("/nonexistent/bin/nuclei") },
        );

        let registry = ToolRegistry::from_config(&config);
        assert!(!registry.available(Tool::Nuclei));
    }
}
