mod commands;
mod error;
mod repl;
mod view;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{ConsolePhoneSelector, Session};
use crate::error::{exit_code_for, report_error};
use crate::view::ConsoleView;
use rolo_config as config;
use rolo_core::rules::validate_within_days;
use rolo_store::{paths, FileStore};

#[derive(Debug, Parser)]
#[command(name = "rolo", version, about = "rolo address book")]
struct Cli {
    /// Address book file (defaults to the per-user data directory)
    #[arg(long)]
    book_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        book_path,
        config: config_path,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let upcoming_days = validate_within_days(app_config.upcoming_days)?;
    let book_path = paths::resolve_book_path(book_path.or(app_config.book_path))
        .with_context(|| "resolve address book path")?;
    if verbose {
        debug!(path = %book_path.display(), "address book path resolved");
    }

    let store = FileStore::new(book_path);
    let mut book = store
        .load()
        .with_context(|| format!("load address book {}", store.path().display()))?;
    debug!(contacts = book.len(), "address book loaded");

    let mut session = Session {
        book: &mut book,
        upcoming_days,
    };
    let mut view = ConsoleView;
    let mut selector = ConsolePhoneSelector;
    repl::run(&mut session, &mut view, &mut selector)?;

    store
        .save(&book)
        .with_context(|| format!("save address book {}", store.path().display()))?;
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
