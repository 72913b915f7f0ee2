//! Hearth - local serve sessions for hosting projects
//!
//! Usage:
//!   hearth serve                      # Serve hosting and functions from hearth.toml
//!   hearth serve --only firestore     # Start emulators only, no project needed
//!   hearth serve --except functions   # Serve everything but functions

mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hearth_core::commands::ServeCommand;
use hearth_core::options::{
    DEFAULT_DATABASE_PORT, DEFAULT_FIRESTORE_PORT, DEFAULT_HOST, DEFAULT_PORT, ServeOptions,
};
use hearth_core::target;

use crate::output::{OutputFormat, PlanPrinter, TerminalNotifier};

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Local serve sessions for hosting projects", long_about = None)]
struct Cli {
    /// Project id to use, overriding project.id in hearth.toml
    #[arg(short = 'P', long, global = true)]
    project: Option<String>,

    /// Path to hearth.toml (skips searching parent directories)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a local server for your static assets
    Serve(ServeArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// The port on which to listen
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// The host on which to listen
    #[arg(short = 'o', long, default_value = DEFAULT_HOST)]
    host: String,

    /// The hostname the Firestore emulator should bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    firestore_host: String,

    /// The port the Firestore emulator should bind to
    #[arg(long, default_value_t = DEFAULT_FIRESTORE_PORT)]
    firestore_port: u16,

    /// The hostname the Realtime Database emulator should bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    database_host: String,

    /// The port the Realtime Database emulator should bind to
    #[arg(long, default_value_t = DEFAULT_DATABASE_PORT)]
    database_port: u16,

    #[arg(long, value_name = "TARGETS", help = only_help())]
    only: Option<String>,

    #[arg(long, value_name = "TARGETS", help = except_help())]
    except: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,
}

fn only_help() -> String {
    format!(
        "Only serve specified targets (valid targets are: {})",
        target::only_target_names().join(", ")
    )
}

fn except_help() -> String {
    format!(
        "Serve all except specified targets (valid targets are: {})",
        target::except_target_names().join(", ")
    )
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => run_serve(args, cli.project, cli.config),
    }
}

fn run_serve(args: ServeArgs, project: Option<String>, config: Option<PathBuf>) -> Result<()> {
    let options = ServeOptions {
        port: args.port,
        host: args.host,
        firestore_host: args.firestore_host,
        firestore_port: args.firestore_port,
        database_host: args.database_host,
        database_port: args.database_port,
        only: args.only,
        except: args.except,
        cwd: Some(std::env::current_dir()?),
        project,
        config_path: config,
    };

    let cmd = ServeCommand::with_defaults();
    let backend = PlanPrinter::new(args.format);
    let notifier = TerminalNotifier::new(args.format);
    cmd.execute(&options, &backend, &notifier)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_use_documented_defaults() {
        let cli = Cli::try_parse_from(["hearth", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.port, 5000);
        assert_eq!(args.host, "localhost");
        assert_eq!(args.firestore_host, "localhost");
        assert_eq!(args.firestore_port, 8080);
        assert_eq!(args.database_host, "localhost");
        assert_eq!(args.database_port, 9000);
        assert!(args.only.is_none());
        assert!(args.except.is_none());
    }

    #[test]
    fn serve_accepts_short_flags_and_target_lists() {
        let cli = Cli::try_parse_from([
            "hearth",
            "serve",
            "-p",
            "8000",
            "-o",
            "0.0.0.0",
            "--only",
            "firestore:rules,hosting",
            "-P",
            "my-app",
        ])
        .unwrap();
        assert_eq!(cli.project.as_deref(), Some("my-app"));
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.port, 8000);
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.only.as_deref(), Some("firestore:rules,hosting"));
    }

    #[test]
    fn target_help_lists_known_targets() {
        assert_eq!(
            only_help(),
            "Only serve specified targets (valid targets are: functions, hosting, database, firestore)"
        );
        assert_eq!(
            except_help(),
            "Serve all except specified targets (valid targets are: functions, hosting)"
        );
    }
}
