use crate::catalog::Catalog;
use crate::cli::AddCmd;
use crate::config::Config;
use crate::error::{AgentsError, Result};
use crate::install::{
    AlwaysConfirm, Confirm, Fetcher, HttpFetcher, LineConfirm, Outcome, Reconciler, Report,
    Summary,
};
use crate::project::{Project, COMPAT_AGENTS_DIR, PRIMARY_AGENTS_DIR};
use std::io::{self, IsTerminal};

pub fn execute(project: &Project, config: &Config, catalog: &Catalog, cmd: &AddCmd) -> Result<()> {
    if cmd.agents.is_empty() {
        print_usage(catalog);
        return Err(AgentsError::MissingArguments(
            "specify at least one agent".to_string(),
        ));
    }

    let fetcher = HttpFetcher::new(config.fetch_timeout());
    let report = if cmd.force {
        install(catalog, project, &cmd.agents, fetcher, AlwaysConfirm, true)?
    } else {
        let interactive = !cmd.non_interactive && io::stdin().is_terminal();
        install(
            catalog,
            project,
            &cmd.agents,
            fetcher,
            LineConfirm::stdio(),
            interactive,
        )?
    };

    finish(&report)
}

/// Check the project marker, then resolve every requested agent in order,
/// printing one line per agent as it completes.
pub fn install<F: Fetcher, C: Confirm>(
    catalog: &Catalog,
    project: &Project,
    agents: &[String],
    fetcher: F,
    confirm: C,
    interactive: bool,
) -> Result<Report> {
    project.require_marker()?;

    println!();
    println!("🤖 Adding agents to the project...");
    println!();

    let mut reconciler = Reconciler::new(catalog, project, fetcher, confirm, interactive);
    Ok(reconciler.reconcile_with(agents, print_outcome))
}

fn print_outcome(id: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Installed => println!("✓ {} installed", id),
        Outcome::Overwritten => println!("✓ {} updated", id),
        Outcome::Skipped => println!("⊘ {} already installed, skipped", id),
        Outcome::Failed(reason) => eprintln!("✗ {}: {}", id, reason),
        Outcome::Unknown => eprintln!(
            "✗ '{}' is not a known agent. Run 'mern-agents list' to see available agents.",
            id
        ),
    }
}

fn finish(report: &Report) -> Result<()> {
    let summary = report.summary();
    println!();
    println!("{}", format_summary(&summary));

    if summary.installed + summary.overwritten > 0 {
        println!(
            "Agents are in {}/ (mirrored to {}/)",
            PRIMARY_AGENTS_DIR, COMPAT_AGENTS_DIR
        );
    }

    if summary.is_success() {
        Ok(())
    } else {
        Err(AgentsError::InstallFailed {
            failed: summary.failed,
            unknown: summary.unknown,
        })
    }
}

pub fn format_summary(summary: &Summary) -> String {
    format!(
        "Summary: {} installed, {} updated, {} skipped, {} failed, {} unknown",
        summary.installed, summary.overwritten, summary.skipped, summary.failed, summary.unknown
    )
}

fn print_usage(catalog: &Catalog) {
    eprintln!("Usage: mern-agents add <agent> [agent...]");
    eprintln!("Example: mern-agents add security-guardian");
    eprintln!("Example: mern-agents add devops-engineer release-manager");
    eprintln!();
    eprintln!("Available agents:");
    for id in catalog.ids() {
        eprintln!("  - {}", id);
    }
    eprintln!();
}
