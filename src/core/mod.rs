pub mod action;
pub mod command;
pub mod context;
pub mod module;
pub mod nav;
pub mod query;
pub mod selection;
pub mod state;

pub use action::{Action, ExportFormat, NotifyLevel};
pub use command::{command_hint, parse_command, Command};
pub use context::Context;
pub use module::Module;
pub use nav::{NavState, Theme, ViewId};
pub use query::{QueryState, QueryView, SortDirection, SortKey, PAGE_SIZE};
pub use selection::{CheckState, Selection};
pub use state::DashboardState;
