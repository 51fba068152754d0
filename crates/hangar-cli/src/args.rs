use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    BufferCommands, CatalogCommands, FleetCommands, LayoutArgs, SessionCommands, TaskCommands,
};

/// Maintenance plan builder for aircraft between missions
///
/// Hangar lays out maintenance tasks on a timeline that starts when an
/// aircraft becomes available and should end before its next mission. Tasks
/// come from a catalog of fault isolation, repair and mod kit work; buffers of
/// idle time can be inserted between them. The plan is saved between
/// invocations so each command applies one edit.
#[derive(Parser)]
#[command(version, about, name = "hangar")]
pub struct Args {
    /// Path to the saved planning session. Defaults to
    /// $XDG_DATA_HOME/hangar/session.json
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// JSON file replacing the built-in task catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// JSON file replacing the built-in fleet
    #[arg(long, global = true)]
    pub fleet_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Hangar CLI
///
/// - `fleet` and `catalog`: browse the read-only inputs
/// - `session`: start, show or discard the current plan
/// - `task` and `buffer`: edit the timeline
/// - `reflow` and `layout`: close gaps and project the plan onto pixels
#[derive(Subcommand)]
pub enum Commands {
    /// Browse aircraft
    #[command(alias = "f")]
    Fleet {
        #[command(subcommand)]
        command: FleetCommands,
    },
    /// Browse the task catalog
    #[command(alias = "c")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Manage the planning session
    #[command(alias = "s")]
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Manage tasks on the timeline
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage buffers between tasks
    #[command(alias = "b")]
    Buffer {
        #[command(subcommand)]
        command: BufferCommands,
    },
    /// Close gaps left by removed tasks
    #[command(alias = "r")]
    Reflow,
    /// Show task and buffer positions on a planning surface
    #[command(alias = "l")]
    Layout(LayoutArgs),
}
