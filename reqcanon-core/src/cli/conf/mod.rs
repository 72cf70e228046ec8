mod check;
mod dump;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to a TOML config file (defaults only when omitted)
        path: Option<PathBuf>,

        /// Print errors without colors or hints
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print resolved configuration
    Dump {
        path: Option<PathBuf>,

        /// Output as JSON (default)
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path.as_deref(), plain),
        ConfigCmd::Dump { path, yaml, .. } => dump(path.as_deref(), yaml),
    }
}
