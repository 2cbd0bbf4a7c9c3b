//! Price Dashboard - Main Entry Point
//!
//! Interactive terminal front end: reads commands from stdin, forwards them
//! to the dashboard task and prints notable snapshot changes.

use anyhow::Context;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use price_dashboard::Dashboard;
use price_dashboard::domain::config::{AppConfig, LogConfig};
use price_dashboard::services::{CatalogSource, HttpCatalogSource, InMemorySource};
use price_dashboard::utils::config_store;
use price_dashboard::views::{HELP, PromptAction, describe_transition, parse_line, render_screen};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("loading configuration")?;
    let _log_guard = init_tracing(&config.log).context("initializing logging")?;

    tracing::info!("Starting price dashboard...");

    let source: Arc<dyn CatalogSource> = if config.source.offline {
        Arc::new(InMemorySource::fixtures())
    } else {
        Arc::new(HttpCatalogSource::new(&config.source)?)
    };
    let handle = Dashboard::spawn(source, &config.report);

    // Observer: print notable changes as snapshots are published
    let mut updates = handle.subscribe();
    let report_config = config.report.clone();
    tokio::spawn(async move {
        let mut prev = updates.borrow_and_update().clone();
        while updates.changed().await.is_ok() {
            let next = updates.borrow_and_update().clone();
            if let Some(note) = describe_transition(&prev, &next, &report_config) {
                print!("\n{note}");
                prompt();
            }
            prev = next;
        }
    });

    println!("Price dashboard. Type `help` for commands.");
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(PromptAction::Command(command)) => handle.send(command)?,
            Ok(PromptAction::Show(screen)) => {
                print!("{}", render_screen(screen, &handle.snapshot(), &config.report));
            }
            Ok(PromptAction::Help) => print!("{HELP}"),
            Ok(PromptAction::Quit) => break,
            Ok(PromptAction::Nothing) => {}
            Err(message) => println!("{message}"),
        }
        prompt();
    }

    handle.shutdown()?;
    tracing::info!("Price dashboard exited");
    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Config from the path given as first argument, or the default location
fn load_config() -> price_dashboard::Result<AppConfig> {
    match std::env::args().nth(1) {
        Some(path) => config_store::load_config_from(Path::new(&path)),
        None => config_store::load_config(),
    }
}

/// Log to a daily-rolling file so output does not interleave with the prompt
fn init_tracing(log: &LogConfig) -> anyhow::Result<WorkerGuard> {
    let dir = config_store::data_dir()?;
    let appender = tracing_appender::rolling::daily(dir, &log.file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
