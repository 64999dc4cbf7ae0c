#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use mern_agents::catalog::Catalog;
use mern_agents::cli::{router, Cli, Commands};
use mern_agents::config::Config;
use mern_agents::error::AgentsError;
use mern_agents::project::Project;
use mern_agents::{commands, logging};

fn main() -> Result<()> {
    // Bare and flag-only invocations go to the installer
    let routed_args = router::route_args(std::env::args_os());
    let cli = Cli::try_parse_from(routed_args).unwrap_or_else(|e| {
        // Help and version exit 0; usage errors, including unknown subcommands, exit 1
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        std::process::exit(code);
    });

    logging::init(cli.verbose);

    let catalog = Catalog::load()?;

    match &cli.command {
        Some(Commands::Add(cmd)) => {
            let project = Project::detect()?;
            let config = Config::load(project.root())?;
            commands::add::execute(&project, &config, &catalog, cmd)?;
        }
        Some(Commands::List { installed }) => {
            let project = Project::detect()?;
            commands::list::execute(&project, &catalog, *installed)?;
        }
        Some(Commands::Info { agent }) => {
            let project = Project::detect()?;
            commands::info::execute(&project, &catalog, agent.as_deref())?;
        }
        Some(Commands::Init(cmd)) => {
            let project = Project::detect()?;
            let config = Config::load(project.root())?;
            match commands::init::execute(&config, &cmd.args) {
                Err(AgentsError::CommandExitCode(code)) => {
                    eprintln!("\nInstaller exited with status {}", code);
                    std::process::exit(code);
                }
                other => other?,
            }
        }
        None => {
            // Router should always insert a subcommand; this is a safety net
            eprintln!("Internal error: no command after routing. Run 'mern-agents --help' for usage.");
            std::process::exit(1);
        }
    }

    Ok(())
}
