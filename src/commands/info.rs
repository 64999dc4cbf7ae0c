//! Single-agent detail view.
//!
//! Reads only the local filesystem. An agent that is not installed gets an
//! install hint rather than a remote preview.

use crate::catalog::{normalize_id, AgentDescriptor, Catalog};
use crate::error::{AgentsError, Result};
use crate::install::InstallState;
use crate::project::{Project, PRIMARY_AGENTS_DIR};
use std::fmt::Write;

const EXCERPT_MAX_CHARS: usize = 240;

pub fn execute(project: &Project, catalog: &Catalog, agent: Option<&str>) -> Result<()> {
    let raw = agent.ok_or_else(|| {
        AgentsError::MissingArguments("usage: mern-agents info <agent>".to_string())
    })?;

    let id = normalize_id(raw);
    let descriptor = catalog
        .get(id)
        .ok_or_else(|| AgentsError::UnknownAgent(id.to_string()))?;

    let state = InstallState::new(project);
    let installed = state.is_installed(id);
    let preview = if installed {
        state.read_installed(id).as_deref().and_then(excerpt)
    } else {
        None
    };

    print!("{}", render(descriptor, installed, preview.as_deref()));
    Ok(())
}

pub fn render(agent: &AgentDescriptor, installed: bool, excerpt: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", agent.icon, agent.id);
    let _ = writeln!(out, "  Category: {}", agent.category);
    let _ = writeln!(out, "  Description: {}", agent.description);
    if let Some(ref role) = agent.role {
        let _ = writeln!(out, "  Role: {}", role);
    }

    if installed {
        let _ = writeln!(
            out,
            "  Status: installed ({}/{}.md)",
            PRIMARY_AGENTS_DIR, agent.id
        );
        if let Some(excerpt) = excerpt {
            let _ = writeln!(out, "\n  {}", excerpt);
        }
    } else {
        let _ = writeln!(out, "  Status: not installed");
        let _ = writeln!(out, "\nRun 'mern-agents add {}' to install it.", agent.id);
    }
    out
}

/// First paragraph of a markdown document that is not a heading.
///
/// YAML front matter is skipped. Lines of the paragraph are joined with
/// spaces and the result is truncated to a readable length.
pub fn excerpt(content: &str) -> Option<String> {
    let mut lines = content.lines().map(str::trim).peekable();

    if lines.peek() == Some(&"---") {
        lines.next();
        for line in lines.by_ref() {
            if line == "---" {
                break;
            }
        }
    }

    let paragraph: Vec<&str> = lines
        .skip_while(|line| line.is_empty() || line.starts_with('#'))
        .take_while(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if paragraph.is_empty() {
        return None;
    }

    let text = paragraph.join(" ");
    if text.chars().count() <= EXCERPT_MAX_CHARS {
        Some(text)
    } else {
        let cut: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
        Some(format!("{}…", cut.trim_end()))
    }
}
