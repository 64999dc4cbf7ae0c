use crate::error::{AgentsError, Result};
use std::path::{Path, PathBuf};

/// File whose presence marks a directory as a project root
pub const PROJECT_MARKER: &str = "package.json";

/// Primary install directory, relative to the project root
pub const PRIMARY_AGENTS_DIR: &str = ".github/agents";

/// Compatibility mirror directory, relative to the project root
pub const COMPAT_AGENTS_DIR: &str = ".github/copilot/agents";

#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Detect the current project from the working directory
    pub fn detect() -> Result<Self> {
        let root = std::env::current_dir().map_err(|e| {
            AgentsError::ProjectDetection(format!("Failed to get current directory: {}", e))
        })?;
        Ok(Self::at(root))
    }

    /// Use an explicit directory as the project root
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn has_marker(&self) -> bool {
        self.root.join(PROJECT_MARKER).is_file()
    }

    /// Fail unless the project marker exists in the root
    pub fn require_marker(&self) -> Result<()> {
        if self.has_marker() {
            Ok(())
        } else {
            Err(AgentsError::MissingProjectMarker(self.root.clone()))
        }
    }

    pub fn primary_dir(&self) -> PathBuf {
        self.root.join(PRIMARY_AGENTS_DIR)
    }

    pub fn compat_dir(&self) -> PathBuf {
        self.root.join(COMPAT_AGENTS_DIR)
    }

    pub fn primary_path(&self, id: &str) -> PathBuf {
        self.primary_dir().join(document_name(id))
    }

    pub fn compat_path(&self, id: &str) -> PathBuf {
        self.compat_dir().join(document_name(id))
    }

    /// Both install targets for an agent, primary first
    pub fn install_targets(&self, id: &str) -> [PathBuf; 2] {
        [self.primary_path(id), self.compat_path(id)]
    }
}

/// File name of an agent document: `<id>.md`
pub fn document_name(id: &str) -> String {
    format!("{}.md", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_install_paths() {
        let project = Project::at("/home/user/shop");
        assert_eq!(
            project.primary_path("qa-lead"),
            PathBuf::from("/home/user/shop/.github/agents/qa-lead.md")
        );
        assert_eq!(
            project.compat_path("qa-lead"),
            PathBuf::from("/home/user/shop/.github/copilot/agents/qa-lead.md")
        );
        assert_eq!(project.install_targets("qa-lead")[0], project.primary_path("qa-lead"));
    }

    #[test]
    fn test_require_marker() {
        let dir = TempDir::new().unwrap();
        let project = Project::at(dir.path());
        assert!(matches!(
            project.require_marker(),
            Err(AgentsError::MissingProjectMarker(_))
        ));

        std::fs::write(dir.path().join(PROJECT_MARKER), "{}").unwrap();
        assert!(project.require_marker().is_ok());
    }

    #[test]
    fn test_marker_must_be_a_file() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(PROJECT_MARKER)).unwrap();
        assert!(!Project::at(dir.path()).has_marker());
    }
}
