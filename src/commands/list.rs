use crate::catalog::Catalog;
use crate::error::Result;
use crate::install::InstallState;
use crate::project::Project;
use std::collections::BTreeSet;
use std::fmt::Write;

pub fn execute(project: &Project, catalog: &Catalog, only_installed: bool) -> Result<()> {
    let installed = InstallState::new(project).list_installed();
    print!("{}", render(catalog, &installed, only_installed));
    Ok(())
}

/// Render the catalog grouped by category, marking installed agents.
///
/// Installed documents that are not in the catalog are listed separately.
pub fn render(catalog: &Catalog, installed: &BTreeSet<String>, only_installed: bool) -> String {
    let mut out = String::new();
    let installed_known = catalog.iter().filter(|a| installed.contains(&a.id)).count();

    if only_installed && installed_known == 0 {
        out.push_str("No agents installed. Run 'mern-agents add <agent>' to add one.\n");
    } else {
        out.push_str("MERN agents:\n");
        for (category, members) in catalog.grouped() {
            let members: Vec<_> = members
                .into_iter()
                .filter(|a| !only_installed || installed.contains(&a.id))
                .collect();
            if members.is_empty() {
                continue;
            }

            let _ = writeln!(out, "\n{}", category);
            for agent in members {
                let mark = if installed.contains(&agent.id) { "✓" } else { "○" };
                let _ = writeln!(
                    out,
                    "  {} {} {:<24} {}",
                    mark, agent.icon, agent.id, agent.description
                );
            }
        }
    }

    let unlisted: Vec<_> = installed.iter().filter(|id| !catalog.contains(id)).collect();
    if !unlisted.is_empty() {
        out.push_str("\nNot in catalog:\n");
        for id in unlisted {
            let _ = writeln!(out, "  ✓ {}", id);
        }
    }

    let _ = writeln!(out, "\nInstalled: {} of {}", installed_known, catalog.len());
    out
}
