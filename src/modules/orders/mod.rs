//! Order list module: row cursor, checkboxes, sort chord

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, CheckState, Context, Module, NotifyLevel, SortKey};

#[derive(Debug, Default)]
pub struct OrderList {
    cursor: usize,
    pending_sort: bool,
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pending_sort(&self) -> bool {
        self.pending_sort
    }

    pub fn set_cursor(&mut self, index: usize, rows: usize) {
        self.cursor = index.min(rows.saturating_sub(1));
    }

    /// Keep the cursor on a visible row after the page shrinks
    pub fn clamp(&mut self, rows: usize) {
        self.set_cursor(self.cursor, rows);
    }

    /// Cursor returns to the top whenever the page changes
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.pending_sort = false;
    }

    fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_down(&mut self, rows: usize) {
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    fn sort_chord(&mut self, key: KeyEvent) -> Action {
        self.pending_sort = false;
        match key.code {
            KeyCode::Char(ch) => match SortKey::from_shortcut(ch) {
                Some(sort) => Action::Sort(sort),
                None => Action::Notify(format!("No column bound to '{ch}'"), NotifyLevel::Warn),
            },
            _ => Action::None,
        }
    }
}

impl Module for OrderList {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        if self.pending_sort {
            return self.sort_chord(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down(ctx.row_count());
                Action::None
            }
            KeyCode::Char(' ') => match ctx.row_id(self.cursor) {
                Some(id) => Action::ToggleOrder(id.clone()),
                None => Action::None,
            },
            KeyCode::Char('a') => Action::SetAllVisible(ctx.page_check != CheckState::Checked),
            KeyCode::Char('s') => {
                self.pending_sort = true;
                Action::Notify(
                    "Sort: i)d u)ser p)roject a)ddress d)ate s(t)atus".to_string(),
                    NotifyLevel::Info,
                )
            }
            KeyCode::Char('[') | KeyCode::Left => Action::PrevPage,
            KeyCode::Char(']') | KeyCode::Right => Action::NextPage,
            _ => Action::None,
        }
    }
}
