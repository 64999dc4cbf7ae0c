//! Per-agent install decisions.
//!
//! Requested agents are resolved strictly in order, one at a time, including
//! any confirmation prompt. A failure for one agent never stops the batch.

use super::fetcher::Fetcher;
use super::prompt::Confirm;
use super::state::InstallState;
use super::writer::write_agent;
use crate::catalog::{normalize_id, Catalog};
use crate::project::Project;

/// Result of resolving one requested agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    Overwritten,
    /// Already installed and not replaced
    Skipped,
    Failed(String),
    /// Not in the catalog
    Unknown,
}

/// Counts per outcome kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub installed: usize,
    pub overwritten: usize,
    pub skipped: usize,
    pub failed: usize,
    pub unknown: usize,
}

impl Summary {
    /// Unknown agents count as failures
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.unknown == 0
    }

    pub fn total(&self) -> usize {
        self.installed + self.overwritten + self.skipped + self.failed + self.unknown
    }
}

/// Outcomes in request order
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub entries: Vec<(String, Outcome)>,
}

impl Report {
    pub fn outcome(&self, id: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, outcome)| outcome)
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for (_, outcome) in &self.entries {
            match outcome {
                Outcome::Installed => summary.installed += 1,
                Outcome::Overwritten => summary.overwritten += 1,
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Failed(_) => summary.failed += 1,
                Outcome::Unknown => summary.unknown += 1,
            }
        }
        summary
    }
}

pub struct Reconciler<'a, F, C> {
    catalog: &'a Catalog,
    project: &'a Project,
    fetcher: F,
    confirm: C,
    interactive: bool,
}

impl<'a, F: Fetcher, C: Confirm> Reconciler<'a, F, C> {
    /// `interactive` false means installed agents are skipped without asking.
    pub fn new(
        catalog: &'a Catalog,
        project: &'a Project,
        fetcher: F,
        confirm: C,
        interactive: bool,
    ) -> Self {
        Self {
            catalog,
            project,
            fetcher,
            confirm,
            interactive,
        }
    }

    pub fn reconcile<S: AsRef<str>>(&mut self, requested: &[S]) -> Report {
        self.reconcile_with(requested, |_, _| {})
    }

    /// Like `reconcile`, calling `on_outcome` as soon as each agent is resolved
    pub fn reconcile_with<S, H>(&mut self, requested: &[S], mut on_outcome: H) -> Report
    where
        S: AsRef<str>,
        H: FnMut(&str, &Outcome),
    {
        let mut report = Report::default();
        for raw in requested {
            let id = normalize_id(raw.as_ref());
            let outcome = self.resolve(id);
            tracing::debug!(agent = id, ?outcome, "resolved agent");
            on_outcome(id, &outcome);
            report.entries.push((id.to_string(), outcome));
        }
        report
    }

    fn resolve(&mut self, id: &str) -> Outcome {
        if !self.catalog.contains(id) {
            return Outcome::Unknown;
        }

        let replacing = InstallState::new(self.project).is_installed(id);
        if replacing {
            if !self.interactive {
                return Outcome::Skipped;
            }
            let prompt = format!("{} is already installed. Overwrite?", id);
            if !self.confirm.confirm(&prompt) {
                return Outcome::Skipped;
            }
        }

        let content = match self.fetcher.fetch(id) {
            Ok(content) => content,
            Err(e) => return Outcome::Failed(format!("download failed: {}", e)),
        };

        if let Err(e) = write_agent(self.project, id, &content) {
            return Outcome::Failed(e.to_string());
        }

        if replacing {
            Outcome::Overwritten
        } else {
            Outcome::Installed
        }
    }
}
