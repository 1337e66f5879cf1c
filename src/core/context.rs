//! Shared context passed to modules

use crate::core::nav::ViewId;
use crate::core::selection::CheckState;
use crate::domain::OrderId;

/// Snapshot of derived state modules read when handling input
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Active view
    pub view: ViewId,

    /// Ids on the current page, in display order
    pub visible_ids: Vec<OrderId>,

    /// Header checkbox state for the current page
    pub page_check: CheckState,

    pub page: usize,
    pub total_pages: usize,
    pub selected_count: usize,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_id(&self, index: usize) -> Option<&OrderId> {
        self.visible_ids.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.visible_ids.len()
    }
}
