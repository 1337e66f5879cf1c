//! Module trait for view components

use crossterm::event::KeyEvent;

use super::{Action, Context};

/// Trait for views that handle their own keys
pub trait Module {
    /// Handle keyboard input not claimed by the shell.
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;
}
