use clap::{Parser, Subcommand};
use reqcanon_core::cli;
use reqcanon_core::logging::{LogMode, default_log_mode, init_logging_with_mode};

#[derive(Parser, Debug)]
#[command(
    name = "reqcanon",
    version,
    about = "reqcanon: HTTP request payload normalizer"
)]
struct Cli {
    /// Human-readable logs on stderr
    #[arg(long, global = true, conflicts_with = "raw_logs")]
    pretty_logs: bool,

    /// JSON logs on stderr
    #[arg(long, global = true)]
    raw_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a raw request payload and print the stored record
    Normalize(cli::request::NormalizeArgs),

    /// Print the API view of a request
    Context(cli::request::ContextArgs),

    /// Print the reassembled request URL
    Url(cli::request::InputArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let mode = if cli.raw_logs {
        LogMode::Raw
    } else if cli.pretty_logs {
        LogMode::Pretty
    } else {
        default_log_mode()
    };
    init_logging_with_mode(mode);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "reqcanon starting");

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Normalize(args) => cli::request::normalize(args),
        Command::Context(args) => cli::request::context(args),
        Command::Url(args) => cli::request::url(args),
        Command::Config { cmd } => cli::conf::run(cmd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_input_surfaces_as_error_with_path() {
        // Arrange
        let cli = Cli::try_parse_from(["reqcanon", "url", "/nonexistent/request.json"])
            .expect("arguments should parse");

        // Act
        let err = run(cli.command).expect_err("missing file must fail");

        // Assert
        assert!(format!("{err:#}").contains("failed to read /nonexistent/request.json"));
    }
}
