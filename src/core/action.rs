//! Actions that modules and commands return to the app

use crate::core::nav::{Theme, ViewId};
use crate::core::query::SortKey;
use crate::domain::OrderId;

/// Discrete user intents. State-changing variants are applied by
/// [`DashboardState::reduce`](crate::core::DashboardState::reduce); the rest
/// are side effects handled by the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch the main view
    Navigate(ViewId),

    /// Replace the search term
    SetSearch(String),

    /// Sort by a column, flipping direction on repeat
    Sort(SortKey),

    GoToPage(usize),
    NextPage,
    PrevPage,

    /// Flip the checkbox of one row
    ToggleOrder(OrderId),

    /// Force the checkbox of one row
    SetOrder(OrderId, bool),

    /// Header checkbox: select or deselect every visible row
    SetAllVisible(bool),

    ClearSelection,

    ToggleSidebar,
    CloseSidebar,
    ToggleDrawer,
    ToggleTheme,
    SetTheme(Theme),

    /// Write the export set to disk
    Export(ExportFormat),

    /// Copy selected ids to the system clipboard
    CopySelection,

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    ToggleHelp,

    /// Request quit
    Quit,
}

impl Action {
    /// Whether the action only touches [`DashboardState`](crate::core::DashboardState)
    pub fn is_state_change(&self) -> bool {
        !matches!(
            self,
            Action::None
                | Action::Export(_)
                | Action::CopySelection
                | Action::Notify(..)
                | Action::ToggleHelp
                | Action::Quit
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
