use crate::error::{AgentsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base location agent documents are fetched from. Not configurable.
pub const AGENTS_BASE_URL: &str =
    "https://raw.githubusercontent.com/mern-agents/create-mern-agents/main";

/// Config file name, looked up in $HOME and in the project root
pub const CONFIG_FILE_NAME: &str = ".mern-agents.toml";

/// Default installer script, relative to the executable's directory
const DEFAULT_INSTALLER_RELATIVE: &str = "../share/mern-agents/init-agents.sh";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub installer: InstallerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FetchConfig {
    /// Unset means "inherit from the layer below"; resolved by `fetch_timeout`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InstallerConfig {
    /// Path to the framework installer script
    #[serde(default)]
    pub script: Option<String>,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. Environment variables
    /// 2. Project config (.mern-agents.toml in project root)
    /// 3. Global config (~/.mern-agents.toml)
    /// 4. Built-in defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = home_dir() {
            let global_config = home.join(CONFIG_FILE_NAME);
            if global_config.is_file() {
                config = config.merge(Self::from_file(&global_config)?);
            }
        }

        let project_config = project_root.join(CONFIG_FILE_NAME);
        if project_config.is_file() {
            config = config.merge(Self::from_file(&project_config)?);
        }

        config = config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if other.fetch.timeout_secs.is_some() {
            self.fetch.timeout_secs = other.fetch.timeout_secs;
        }
        if other.installer.script.is_some() {
            self.installer.script = other.installer.script;
        }
        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        if let Ok(timeout) = std::env::var("MERN_AGENTS_FETCH_TIMEOUT") {
            if let Ok(timeout) = timeout.parse::<u64>() {
                self.fetch.timeout_secs = Some(timeout);
            }
        }

        if let Ok(script) = std::env::var("MERN_AGENTS_INSTALLER") {
            if !script.is_empty() {
                self.installer.script = Some(script);
            }
        }

        self
    }

    fn validate(&self) -> Result<()> {
        if self.fetch.timeout_secs == Some(0) {
            return Err(AgentsError::InvalidConfig(
                "fetch.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Resolve the installer script path.
    ///
    /// A configured path wins; otherwise the script is looked up next to the
    /// installed executable.
    pub fn installer_script(&self) -> Option<PathBuf> {
        if let Some(ref script) = self.installer.script {
            return Some(PathBuf::from(script));
        }
        let exe = std::env::current_exe().ok()?;
        let exe_dir = exe.parent()?;
        Some(exe_dir.join(DEFAULT_INSTALLER_RELATIVE))
    }
}

/// Get the home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.fetch.timeout_secs, None);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert!(config.installer.script.is_none());
    }

    #[test]
    fn test_merge_config() {
        let mut base = Config::default();
        base.installer.script = Some("/opt/base.sh".to_string());

        let mut override_cfg = Config::default();
        override_cfg.fetch.timeout_secs = Some(5);

        let merged = base.merge(override_cfg);
        assert_eq!(merged.fetch_timeout(), Duration::from_secs(5));
        assert_eq!(merged.installer.script.as_deref(), Some("/opt/base.sh"));
    }

    #[test]
    fn test_parse_partial_file() {
        let config: Config = toml::from_str("[installer]\nscript = \"/tmp/init.sh\"\n").unwrap();
        assert_eq!(config.fetch.timeout_secs, None);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(config.installer.script.as_deref(), Some("/tmp/init.sh"));
    }

    #[test]
    #[serial]
    fn test_project_config_and_env_precedence() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        std::fs::write(
            home.path().join(CONFIG_FILE_NAME),
            "[fetch]\ntimeout_secs = 10\n",
        )
        .unwrap();
        std::fs::write(
            project.path().join(CONFIG_FILE_NAME),
            "[fetch]\ntimeout_secs = 12\n",
        )
        .unwrap();

        let old_home = std::env::var("HOME").ok();
        std::env::set_var("HOME", home.path());
        std::env::remove_var("MERN_AGENTS_FETCH_TIMEOUT");

        let config = Config::load(project.path()).unwrap();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(12));

        std::env::set_var("MERN_AGENTS_FETCH_TIMEOUT", "7");
        let config = Config::load(project.path()).unwrap();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(7));

        std::env::remove_var("MERN_AGENTS_FETCH_TIMEOUT");
        match old_home {
            Some(h) => std::env::set_var("HOME", h),
            None => std::env::remove_var("HOME"),
        }
    }

    #[test]
    #[serial]
    fn test_project_value_equal_to_default_overrides_global() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        std::fs::write(
            home.path().join(CONFIG_FILE_NAME),
            "[fetch]\ntimeout_secs = 10\n",
        )
        .unwrap();
        std::fs::write(
            project.path().join(CONFIG_FILE_NAME),
            "[fetch]\ntimeout_secs = 30\n",
        )
        .unwrap();

        let old_home = std::env::var("HOME").ok();
        std::env::set_var("HOME", home.path());
        std::env::remove_var("MERN_AGENTS_FETCH_TIMEOUT");

        let config = Config::load(project.path()).unwrap();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));

        // A project file without the key keeps the global value
        std::fs::write(project.path().join(CONFIG_FILE_NAME), "[fetch]\n").unwrap();
        let config = Config::load(project.path()).unwrap();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));

        match old_home {
            Some(h) => std::env::set_var("HOME", h),
            None => std::env::remove_var("HOME"),
        }
    }

    #[test]
    #[serial]
    fn test_zero_timeout_rejected() {
        let project = TempDir::new().unwrap();
        std::fs::write(
            project.path().join(CONFIG_FILE_NAME),
            "[fetch]\ntimeout_secs = 0\n",
        )
        .unwrap();
        std::env::remove_var("MERN_AGENTS_FETCH_TIMEOUT");

        let result = Config::load(project.path());
        assert!(matches!(result, Err(AgentsError::InvalidConfig(_))));
    }

    #[test]
    #[serial]
    fn test_invalid_toml_is_parse_error() {
        let project = TempDir::new().unwrap();
        std::fs::write(project.path().join(CONFIG_FILE_NAME), "[fetch\n").unwrap();

        let result = Config::load(project.path());
        assert!(matches!(result, Err(AgentsError::ConfigParse(_))));
    }

    #[test]
    fn test_configured_installer_script_wins() {
        let mut config = Config::default();
        config.installer.script = Some("/opt/init-agents.sh".to_string());
        assert_eq!(
            config.installer_script(),
            Some(PathBuf::from("/opt/init-agents.sh"))
        );
    }
}
