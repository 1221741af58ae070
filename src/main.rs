//! dist-sanitize - meson dist script for autotools projects.
//!
//! Meson runs this with MESON_DIST_ROOT pointing at the staged tree:
//! - strips VCS metadata, CI config and fixtures
//! - runs `autoreconf -i` so the tarball ships a generated `configure`
//! - removes `autom4te.cache`

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use dist_sanitize::commands;
use dist_sanitize::{Config, Mode, SanitizeError};

#[derive(Parser)]
#[command(name = "dist-sanitize")]
#[command(about = "Prepare a staged meson dist tree for release")]
#[command(
    after_help = "MESON:\n  meson.add_dist_script(find_program('dist-sanitize'))\n\nENVIRONMENT:\n  MESON_DIST_ROOT     Staged tree (set by meson)\n  DIST_SANITIZE_MODE  strict (default) or lenient\n  AUTORECONF          Bootstrap program (default: autoreconf)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override DIST_SANITIZE_MODE
    #[arg(long, global = true, value_enum)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize the distribution tree (default when no command is given)
    Run,

    /// Check the tree and bootstrap tool without changing anything
    Preflight {
        /// Fail if any checks fail (exit code 1)
        #[arg(long)]
        strict: bool,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// Show the actions a run would take, in order
    Plan,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            let code = err
                .downcast_ref::<SanitizeError>()
                .map(SanitizeError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    let config = Config::from_env(cli.mode)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::cmd_run(&config)?,

        Commands::Preflight { strict } => commands::cmd_preflight(&config, strict)?,

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Plan => commands::show::ShowTarget::Plan,
            };
            commands::cmd_show(show_target, &config)?;
        }
    }

    Ok(())
}
