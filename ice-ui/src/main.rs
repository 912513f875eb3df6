use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use ice_core::{Page, PlanEvent};
use ice_ui::clipboard::SystemClipboard;
use ice_ui::shell::{self, parse_assignment};
use ice_ui::{AppConfig, Planner, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Ice-time cost planner.
///
/// Splits ice rental, coaching and jersey costs across a team, with a
/// percentage plus fixed fee on top. The plan is saved locally and can be
/// shared as a link.
#[derive(Debug, Parser)]
#[command(name = "IcePlanner", version)]
struct Cli {
    /// Config file (default: <config dir>/ice-planner/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Planner link to open; its query parameters take precedence over the
    /// saved plan.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Storage backend (`file` or `memory`).
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Directory for the `file` backend.
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a page.
    Show {
        /// Page to open first.
        #[arg(long)]
        page: Option<Page>,
    },
    /// Change fields, then print the current page and the new link.
    Set {
        /// Assignments like `players=15` or `team=Lions`.
        #[arg(required = true, value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },
    /// Print the shareable link.
    Link {
        /// Also copy it to the clipboard.
        #[arg(long)]
        copy: bool,
    },
    /// Forget the saved plan.
    Reset,
    /// Interactive session.
    Shell,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    logging::apply_settings(&config.logging.settings())?;

    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }
    if let Some(dir) = cli.storage_dir {
        config.storage.location = dir.display().to_string();
    }
    let storage = config.storage_config();
    let link = cli.url.unwrap_or_else(|| config.link.base_url.clone());

    debug!(backend = %storage.backend, %link, "opening planner");
    let mut planner = Planner::open(&storage, &link, Box::new(SystemClipboard))?;

    match cli.command.unwrap_or(Command::Show { page: None }) {
        Command::Show { page } => {
            if let Some(page) = page {
                planner.handle(PlanEvent::Navigate(page));
            }
            println!("{}", planner.render());
        }
        Command::Set { assignments } => {
            for assignment in &assignments {
                let (name, value) = parse_assignment(assignment)
                    .with_context(|| format!("expected FIELD=VALUE, got '{assignment}'"))?;
                planner.set(name, value)?;
            }
            println!("{}", planner.render());
            println!("{}", planner.link());
        }
        Command::Link { copy } => {
            if copy {
                planner.handle(PlanEvent::CopyLink);
            }
            println!("{}", planner.link());
        }
        Command::Reset => {
            planner.reset();
            info!("saved plan cleared");
        }
        Command::Shell => {
            let stdin = io::stdin();
            if !stdin.is_terminal() {
                debug!("reading shell commands from a pipe");
            }
            shell::run_shell(&mut planner, stdin.lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}
