//! gbt - terminal browser for local git branches

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use gbt::config::Config;
use gbt::git::{self, CliGateway, DEFAULT_LOG_LIMIT};
use gbt::{App, paths, tui};
use tracing::{info, warn};

/// Browse, check out and delete local git branches
#[derive(Debug, Parser)]
#[command(name = "gbt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository to open (defaults to the current directory)
    #[arg(short = 'C', long = "repo", value_name = "PATH")]
    repo: Option<PathBuf>,

    /// Number of upstream commits shown for the selected branch
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        default_value_t = DEFAULT_LOG_LIMIT,
        value_parser = parse_log_limit
    )]
    log_limit: usize,

    /// Quit after a successful checkout
    #[arg(long)]
    exit_on_checkout: bool,
}

fn parse_log_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Map the `DEBUG` variable to a level: 0=off, 1=warn, 2=info, 3+=debug
fn log_level(debug: Option<&str>) -> Option<tracing::Level> {
    match debug.and_then(|v| v.trim().parse::<u8>().ok()).unwrap_or(0) {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        _ => Some(tracing::Level::DEBUG),
    }
}

fn init_logging() {
    // Clear the log file on startup
    if let Err(e) = std::fs::write(paths::log_path(), "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Tail with: tail -f $TMPDIR/gbt.log
    let debug = std::env::var("DEBUG").ok();
    if let Some(level) = log_level(debug.as_deref()) {
        let file_appender =
            tracing_appender::rolling::never(paths::log_dir(), paths::LOG_FILE_NAME);
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let start = match cli.repo {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    // Outside a repository the UI still starts and reports it in the status line
    let root = git::repository_root(&start).unwrap_or_else(|e| {
        warn!("{e:#}");
        start.clone()
    });
    info!(root = %root.display(), "Starting");

    let config = Config {
        log_limit: cli.log_limit,
        exit_on_checkout: cli.exit_on_checkout,
        ..Config::default()
    };
    let app = App::new(config, git::repo_display_name(&root));
    let gateway = Arc::new(CliGateway::new(root));

    tui::run(app, gateway)
}
