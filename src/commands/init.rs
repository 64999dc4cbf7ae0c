//! Delegation to the framework installer script.
//!
//! The script is opaque: it runs under `bash` with inherited stdio and its
//! exit status becomes ours.

use crate::config::Config;
use crate::error::{AgentsError, Result};
use std::path::Path;
use std::process::Command;

pub fn execute(config: &Config, args: &[String]) -> Result<()> {
    let script = config.installer_script().ok_or_else(|| {
        AgentsError::CommandFailed("Unable to determine installer script location".to_string())
    })?;

    println!();
    println!("🚀 Starting MERN Agents Framework installer...");
    println!();

    run_installer(&script, args)
}

/// Run `bash <script> <args...>`, mapping a non-zero exit to `CommandExitCode`
pub fn run_installer(script: &Path, args: &[String]) -> Result<()> {
    if !script.is_file() {
        return Err(AgentsError::InstallerNotFound(script.to_path_buf()));
    }

    let bash = which::which("bash").map_err(|_| {
        AgentsError::CommandFailed("bash is required to run the installer".to_string())
    })?;

    tracing::debug!(script = %script.display(), ?args, "running installer");

    let status = Command::new(bash)
        .arg(script)
        .args(args)
        .status()
        .map_err(|e| AgentsError::CommandFailed(format!("Failed to run installer: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        // Killed by a signal: no code, report a plain failure
        Err(AgentsError::CommandExitCode(status.code().unwrap_or(1)))
    }
}
