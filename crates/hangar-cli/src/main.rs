//! Hangar CLI Application
//!
//! Command-line maintenance plan builder. Each invocation loads the saved
//! planning session, applies one command and saves it again.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use hangar_core::{Catalog, Fleet, SessionStore};
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        session_file,
        catalog_file,
        fleet_file,
        no_color,
        command,
    } = Args::parse();

    let catalog = match catalog_file {
        Some(path) => Catalog::from_path(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let fleet = match fleet_file {
        Some(path) => Fleet::from_path(&path)
            .with_context(|| format!("Failed to load fleet from {}", path.display()))?,
        None => Fleet::builtin(),
    };
    let store = SessionStore::new(session_file).context("Failed to locate planning session")?;

    info!(
        "Hangar started with {} catalog items and {} aircraft",
        catalog.items().len(),
        fleet.aircraft().len()
    );

    let cli = Cli::new(store, catalog, fleet, TerminalRenderer::new(!no_color));
    match command {
        Some(Commands::Fleet { command }) => cli.handle_fleet_command(command),
        Some(Commands::Catalog { command }) => cli.handle_catalog_command(command),
        Some(Commands::Session { command }) => cli.handle_session_command(command),
        Some(Commands::Task { command }) => cli.handle_task_command(command),
        Some(Commands::Buffer { command }) => cli.handle_buffer_command(command),
        Some(Commands::Reflow) => cli.reflow(),
        Some(Commands::Layout(args)) => cli.show_layout(&args.into()),
        None => cli.show_session(),
    }
}
