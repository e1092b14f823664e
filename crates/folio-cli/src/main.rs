//! folio: portfolio hero section with a typewriter text cycler, in the terminal

mod cli;
mod trace;
mod tui;

use std::fs::File;
use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::{HeroProfile, TokioScheduler};
use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::cli::Cli;
use crate::tui::App;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;
    tracing::info!("Starting folio");

    let mut profile = HeroProfile::load_or_default(cli.config.as_deref())
        .context("failed to load hero profile")?;
    cli.apply_overrides(&mut profile);

    if cli.print_config {
        print!("{}", profile.to_toml()?);
        return Ok(());
    }

    if let Some(steps) = cli.trace {
        let mut stdout = io::stdout().lock();
        return trace::write_trace(&profile.typewriter, steps, &mut stdout);
    }

    let scheduler = Arc::new(TokioScheduler::new(tokio::runtime::Handle::current()));
    let mut app = App::new(profile, Arc::clone(&scheduler));
    let result = app.run().await;
    scheduler.shutdown();

    tracing::info!("Goodbye!");
    result
}

/// Log to a file; stdout belongs to the TUI
fn init_logging(cli: &Cli) -> Result<()> {
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .init();

    Ok(())
}
