use clap::{Parser, Subcommand};

pub mod router;

#[derive(Parser, Debug)]
#[command(name = "mern-agents")]
#[command(about = "Install MERN agent definitions into your project", long_about = None)]
#[command(version)]
#[command(after_help = "\
INVOCATION PATTERNS:
  Without a subcommand, arguments go to the framework installer. These are equivalent:

  mern-agents [options]              Shorthand for 'mern-agents init'
  mern-agents init [options]         Explicit installer command

EXAMPLES:
  mern-agents add security-guardian
  mern-agents add devops-engineer release-manager
  mern-agents list --installed
  mern-agents info orchestrator

For details about a specific command, use:
  mern-agents <command> --help")]
pub struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add one or more agents to the current project
    #[command(long_about = "Add one or more agents to the current project.\n\n\
        Each agent is downloaded and written to .github/agents/<id>.md and\n\
        mirrored to .github/copilot/agents/<id>.md. Agents that are already\n\
        installed are only replaced after confirmation on a terminal.")]
    Add(AddCmd),

    /// List available agents and show which are installed
    List {
        /// Show only installed agents
        #[arg(long)]
        installed: bool,
    },

    /// Show details about an agent
    Info {
        /// Agent identifier (e.g. orchestrator)
        agent: Option<String>,
    },

    /// Run the full framework installer
    Init(InitCmd),
}

#[derive(Parser, Debug)]
pub struct AddCmd {
    /// Agent identifiers; a trailing .md is ignored
    pub agents: Vec<String>,

    /// Overwrite installed agents without asking
    #[arg(short = 'f', long, conflicts_with = "non_interactive")]
    pub force: bool,

    /// Never prompt; installed agents are skipped
    #[arg(long)]
    pub non_interactive: bool,
}

#[derive(Parser, Debug)]
pub struct InitCmd {
    /// Arguments passed through to the installer script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
