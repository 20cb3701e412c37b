//! # scc CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scc_cli::access::{run_access, AccessArgs};
use scc_cli::chart::{run_chart, ChartArgs};
use scc_cli::criteria::{run_criteria, CriteriaArgs};
use scc_cli::overrides::{run_override, OverrideArgs};
use scc_cli::rank::{run_rank, RankArgs};
use scc_cli::seal::{run_seal, SealArgs};
use scc_cli::theme::{run_theme, ThemeArgs};
use scc_cli::CliContext;

/// Sovereign Cloud Compass
///
/// Ranks cloud providers along a control/performance weighting, classifies
/// them into SEAL sovereignty levels, and renders the compass and criteria
/// pages. Overrides, theme and access mode are kept in a local data
/// directory.
#[derive(Parser, Debug)]
#[command(name = "scc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of local_storage.json and session_storage.json.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank providers for a slider position.
    Rank(RankArgs),

    /// Print the SEAL level of a control score.
    Seal(SealArgs),

    /// Render the compass page to an HTML file.
    Chart(ChartArgs),

    /// Print the score tables or render the criteria page.
    Criteria(CriteriaArgs),

    /// Manage score overrides.
    #[command(name = "override")]
    Override(OverrideArgs),

    /// Show or change the stored theme.
    Theme(ThemeArgs),

    /// Unlock, switch to public mode, log out, or show the access mode.
    Access(AccessArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("scc CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let ctx = match CliContext::resolve(cli.config.as_deref(), cli.data_dir.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Rank(args) => run_rank(&args, &ctx),
        Commands::Seal(args) => run_seal(&args),
        Commands::Chart(args) => run_chart(&args, &ctx),
        Commands::Criteria(args) => run_criteria(&args, &ctx),
        Commands::Override(args) => run_override(&args, &ctx),
        Commands::Theme(args) => run_theme(&args, &ctx),
        Commands::Access(args) => run_access(&args, &ctx),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
