use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentsError {
    #[error("Unknown agent: {0}. Run 'mern-agents list' to see available agents.")]
    UnknownAgent(String),

    #[error("No package.json found in {0}. Run this command from your project root.")]
    MissingProjectMarker(PathBuf),

    #[error("Project detection failed: {0}")]
    ProjectDetection(String),

    #[error("Missing arguments: {0}")]
    MissingArguments(String),

    #[error("Installer script not found: {0}")]
    InstallerNotFound(PathBuf),

    #[error("Command exited with status {0}")]
    CommandExitCode(i32),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("{failed} agent(s) failed to install, {unknown} unknown")]
    InstallFailed { failed: usize, unknown: usize },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AgentsError>;
