//! Installation state, derived from the filesystem on every query.
//!
//! The primary directory is authoritative: an agent counts as installed only
//! when `<root>/.github/agents/<id>.md` exists. The compatibility directory is
//! a mirror and is never consulted here.

use crate::project::Project;
use std::collections::BTreeSet;
use std::fs;

pub struct InstallState<'a> {
    project: &'a Project,
}

impl<'a> InstallState<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    pub fn is_installed(&self, id: &str) -> bool {
        self.project.primary_path(id).is_file()
    }

    /// IDs of all `*.md` documents in the primary directory.
    ///
    /// A missing or unreadable directory yields an empty set.
    pub fn list_installed(&self) -> BTreeSet<String> {
        let entries = match fs::read_dir(self.project.primary_dir()) {
            Ok(entries) => entries,
            Err(_) => return BTreeSet::new(),
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let name = entry.file_name();
                let name = name.to_str()?;
                name.strip_suffix(".md")
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
            })
            .collect()
    }

    /// Read the locally installed document, if any
    pub fn read_installed(&self, id: &str) -> Option<String> {
        fs::read_to_string(self.project.primary_path(id)).ok()
    }
}
