//! Selection tracker
//!
//! Selected order ids survive page changes and query changes. Bulk
//! operations only ever touch the ids handed in, which are the rows visible
//! on the active page.

use std::collections::BTreeSet;

use crate::domain::OrderId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Indeterminate,
    Checked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<OrderId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &BTreeSet<OrderId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&mut self, id: &OrderId) {
        if !self.ids.remove(id) {
            self.ids.insert(id.clone());
        }
    }

    pub fn set(&mut self, id: &OrderId, checked: bool) {
        if checked {
            self.ids.insert(id.clone());
        } else {
            self.ids.remove(id);
        }
    }

    /// Union with `visible`
    pub fn select_all(&mut self, visible: &[OrderId]) {
        self.ids.extend(visible.iter().cloned());
    }

    /// Difference with `visible`
    pub fn deselect_all(&mut self, visible: &[OrderId]) {
        for id in visible {
            self.ids.remove(id);
        }
    }

    pub fn set_all(&mut self, visible: &[OrderId], checked: bool) {
        if checked {
            self.select_all(visible);
        } else {
            self.deselect_all(visible);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn page_state(&self, visible: &[OrderId]) -> CheckState {
        let selected = visible.iter().filter(|id| self.ids.contains(id)).count();
        match selected {
            0 => CheckState::Unchecked,
            n if n == visible.len() => CheckState::Checked,
            _ => CheckState::Indeterminate,
        }
    }

    /// False for an empty page
    pub fn is_all_selected(&self, visible: &[OrderId]) -> bool {
        self.page_state(visible) == CheckState::Checked
    }

    pub fn is_indeterminate(&self, visible: &[OrderId]) -> bool {
        self.page_state(visible) == CheckState::Indeterminate
    }
}
