//! Command-line interface definitions and handlers.
//!
//! Argument structs here carry the clap derives and convert into the
//! framework-free parameter structs of [`hangar_core::params`]:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → PlanningSession
//! ```
//!
//! [`Cli`] then runs one command against the saved session. Every mutating
//! command follows the same cycle: load the session, apply one operation,
//! save it, render the outcome. Operations that change nothing (unknown
//! task, missing buffer) print a notice and still succeed.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use hangar_core::{
    params::*, Anchor, Catalog, CatalogItems, CreateResult, DeleteResult, Fleet, FleetList,
    OperationStatus, PlanningSession, SessionBuilder, SessionStore, TaskCategory,
};
use log::info;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

#[derive(Subcommand)]
pub enum FleetCommands {
    /// List aircraft available for planning
    #[command(aliases = ["l", "ls"])]
    List,
}

/// List catalog items
#[derive(Args)]
pub struct ListCatalogArgs {
    /// Only show items of this category
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryArg>,
}

impl From<ListCatalogArgs> for ListCatalog {
    fn from(val: ListCatalogArgs) -> Self {
        ListCatalog {
            category: val.category.map(Into::into),
        }
    }
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List catalog items
    #[command(aliases = ["l", "ls"])]
    List(ListCatalogArgs),
}

/// Start a planning session
///
/// Replaces any saved session with an empty plan for the given aircraft.
#[derive(Args)]
pub struct StartSessionArgs {
    /// ID of the aircraft to plan for
    #[arg(help = "Aircraft ID as shown by `hangar fleet list`")]
    pub aircraft_id: String,
    /// Step by which buffers grow and shrink
    #[arg(long, help = "Buffer increment in minutes (default 30)")]
    pub buffer_minutes: Option<u32>,
}

impl From<StartSessionArgs> for StartSession {
    fn from(val: StartSessionArgs) -> Self {
        StartSession {
            aircraft_id: val.aircraft_id,
            buffer_minutes: val.buffer_minutes,
        }
    }
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Start a new plan for an aircraft
    #[command(alias = "s")]
    Start(StartSessionArgs),
    /// Show the current plan
    #[command(alias = "sh")]
    Show,
    /// Discard the current plan
    #[command(alias = "c")]
    Clear,
}

/// Append a task from the catalog
#[derive(Args)]
pub struct AddTaskArgs {
    /// Catalog item to instantiate
    #[arg(help = "Catalog item ID as shown by `hangar catalog list`")]
    pub catalog_id: String,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            catalog_id: val.catalog_id,
        }
    }
}

/// Move a task to a new position
///
/// Every task is re-placed afterwards, so buffers travel with the task they
/// follow.
#[derive(Args)]
pub struct MoveTaskArgs {
    /// ID of the task to move
    pub task_id: u64,
    /// Destination position
    #[arg(help = "Destination position in the plan (0 is first)")]
    pub to_index: usize,
}

impl From<MoveTaskArgs> for MoveTask {
    fn from(val: MoveTaskArgs) -> Self {
        MoveTask {
            task_id: val.task_id,
            to_index: val.to_index,
        }
    }
}

/// Remove a task
///
/// The task's buffer goes with it. Later tasks keep their times unless
/// `--reflow` is given.
#[derive(Args)]
pub struct RemoveTaskArgs {
    /// ID of the task to remove
    pub task_id: u64,
    /// Close the gap left behind
    #[arg(long, help = "Re-flow the remaining tasks to close the gap")]
    pub reflow: bool,
}

impl From<RemoveTaskArgs> for RemoveTask {
    fn from(val: RemoveTaskArgs) -> Self {
        RemoveTask {
            task_id: val.task_id,
            reflow: val.reflow,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Append a task from the catalog
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Move a task to a new position
    #[command(alias = "m")]
    Move(MoveTaskArgs),
    /// Remove a task
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveTaskArgs),
}

/// Grow or shrink a buffer by one increment
#[derive(Args)]
pub struct BufferArgs {
    /// Where the buffer sits
    #[arg(help = "Task ID the buffer follows, or 'start' on an empty plan")]
    pub anchor: Anchor,
}

impl From<BufferArgs> for EditBuffer {
    fn from(val: BufferArgs) -> Self {
        EditBuffer { anchor: val.anchor }
    }
}

#[derive(Subcommand)]
pub enum BufferCommands {
    /// Add one increment of idle time
    #[command(alias = "a")]
    Add(BufferArgs),
    /// Remove one increment of idle time
    #[command(aliases = ["r", "rm"])]
    Remove(BufferArgs),
}

/// Project the plan onto a planning surface
#[derive(Args)]
pub struct LayoutArgs {
    /// Vertical scale of the surface
    #[arg(long, default_value_t = 60.0, help = "Pixels per hour of plan time")]
    pub pixels_per_hour: f64,
}

impl From<LayoutArgs> for ShowLayout {
    fn from(val: LayoutArgs) -> Self {
        ShowLayout {
            pixels_per_hour: val.pixels_per_hour,
        }
    }
}

/// Command-line representation of task categories
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum CategoryArg {
    /// Troubleshooting of a reported fault
    FaultIsolation,
    /// Corrective repair
    Repair,
    /// Modification kit installation
    ModKit,
}

impl From<CategoryArg> for TaskCategory {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::FaultIsolation => TaskCategory::FaultIsolation,
            CategoryArg::Repair => TaskCategory::Repair,
            CategoryArg::ModKit => TaskCategory::ModKit,
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs commands against the saved planning session.
pub struct Cli {
    store: SessionStore,
    catalog: Catalog,
    fleet: Fleet,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(
        store: SessionStore,
        catalog: Catalog,
        fleet: Fleet,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            store,
            catalog,
            fleet,
            renderer,
        }
    }

    pub fn handle_fleet_command(&self, command: FleetCommands) -> Result<()> {
        match command {
            FleetCommands::List => {
                let aircraft = FleetList(self.fleet.aircraft().to_vec());
                self.renderer.render(&aircraft.to_string())
            }
        }
    }

    pub fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        match command {
            CatalogCommands::List(args) => self.list_catalog(&args.into()),
        }
    }

    pub fn handle_session_command(&self, command: SessionCommands) -> Result<()> {
        match command {
            SessionCommands::Start(args) => self.start_session(&args.into()),
            SessionCommands::Show => self.show_session(),
            SessionCommands::Clear => self.clear_session(),
        }
    }

    pub fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => self.add_task(&args.into()),
            TaskCommands::Move(args) => self.move_task(&args.into()),
            TaskCommands::Remove(args) => self.remove_task(&args.into()),
        }
    }

    pub fn handle_buffer_command(&self, command: BufferCommands) -> Result<()> {
        match command {
            BufferCommands::Add(args) => self.edit_buffer(&args.into(), true),
            BufferCommands::Remove(args) => self.edit_buffer(&args.into(), false),
        }
    }

    fn list_catalog(&self, params: &ListCatalog) -> Result<()> {
        let items = match params.category {
            Some(category) => self.catalog.by_category(category),
            None => self.catalog.items().to_vec(),
        };
        self.renderer.render(&CatalogItems(items).to_string())
    }

    fn start_session(&self, params: &StartSession) -> Result<()> {
        let session = SessionBuilder::from_params(&self.fleet, params)
            .and_then(SessionBuilder::build)
            .with_context(|| format!("Failed to start a session for '{}'", params.aircraft_id))?;
        self.save(&session)?;
        self.renderer.render(&session.to_string())
    }

    pub fn show_session(&self) -> Result<()> {
        let session = self.load()?;
        self.renderer.render(&session.to_string())
    }

    fn clear_session(&self) -> Result<()> {
        let status = if self
            .store
            .clear()
            .context("Failed to clear planning session")?
        {
            OperationStatus::success("Planning session cleared".to_string())
        } else {
            OperationStatus::unchanged("No planning session to clear".to_string())
        };
        self.renderer.render(&status.to_string())
    }

    fn add_task(&self, params: &AddTask) -> Result<()> {
        let mut session = self.load()?;
        let task = session
            .add_task(&self.catalog, params)
            .with_context(|| format!("Failed to add task '{}'", params.catalog_id))?;
        self.save(&session)?;
        self.renderer
            .render(&CreateResult::new(task).to_string())
    }

    fn move_task(&self, params: &MoveTask) -> Result<()> {
        let mut session = self.load()?;
        if !session.move_task(params) {
            return self.unchanged(format!(
                "Task {} cannot move to position {}",
                params.task_id, params.to_index
            ));
        }
        self.save(&session)?;
        self.renderer.render(&session.to_string())
    }

    fn remove_task(&self, params: &RemoveTask) -> Result<()> {
        let mut session = self.load()?;
        let Some(task) = session.remove_task(params) else {
            return self.unchanged(format!("Task {} not found", params.task_id));
        };
        self.save(&session)?;
        self.renderer
            .render(&DeleteResult::new(task, params.reflow).to_string())
    }

    fn edit_buffer(&self, params: &EditBuffer, grow: bool) -> Result<()> {
        let mut session = self.load()?;
        let change = if grow {
            session.extend_buffer(params)
        } else {
            session.shrink_buffer(params)
        };
        let Some(change) = change else {
            return self.unchanged(match (grow, params.anchor) {
                (true, Anchor::Start) => {
                    "A start buffer can only be added to an empty plan".to_string()
                }
                (true, Anchor::After(task_id)) if session.timeline().task(task_id).is_some() => {
                    format!("Buffer after task {task_id} cannot grow further")
                }
                (true, anchor) => format!("No {anchor} in this plan"),
                (false, anchor) => format!("No buffer at {anchor}"),
            });
        };
        self.save(&session)?;
        self.renderer.render(&change.to_string())
    }

    pub fn reflow(&self) -> Result<()> {
        let mut session = self.load()?;
        if !session.summary().needs_reflow {
            return self.unchanged("Plan has no gaps".to_string());
        }
        session.reflow();
        self.save(&session)?;
        self.renderer.render(&session.to_string())
    }

    pub fn show_layout(&self, params: &ShowLayout) -> Result<()> {
        let session = self.load()?;
        let layout = session
            .layout(params)
            .context("Failed to project plan layout")?;
        self.renderer.render(&layout.to_string())
    }

    fn load(&self) -> Result<PlanningSession> {
        self.store
            .require()
            .context("Failed to load planning session")
    }

    fn save(&self, session: &PlanningSession) -> Result<()> {
        self.store
            .save(session)
            .context("Failed to save planning session")?;
        info!("Saved plan to {}", self.store.path().display());
        Ok(())
    }

    fn unchanged(&self, message: String) -> Result<()> {
        self.renderer
            .render(&OperationStatus::unchanged(message).to_string())
    }
}
