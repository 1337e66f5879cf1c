//! Terminal events to actions: shell keys first, then the active view

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, InputMode};
use crate::core::{Action, CheckState, ExportFormat, ViewId};
use crate::ui::layout::{rect_contains, PageTarget};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Search => handle_search_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // A pending sort chord owns the next key
    if app.orders.pending_sort() && app.current_view() == ViewId::OrderList {
        app.dispatch_key(key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.apply_action(Action::Quit),
        KeyCode::Char('?') => app.apply_action(Action::ToggleHelp),
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char(':') => app.enter_command(),
        KeyCode::Char('b') => app.apply_action(Action::ToggleSidebar),
        KeyCode::Char('n') => app.apply_action(Action::ToggleDrawer),
        KeyCode::Char('t') => app.apply_action(Action::ToggleTheme),
        KeyCode::Char('e') => app.apply_action(Action::Export(ExportFormat::Csv)),
        KeyCode::Char('E') => app.apply_action(Action::Export(ExportFormat::Json)),
        KeyCode::Char('y') => app.apply_action(Action::CopySelection),
        KeyCode::Esc => app.escape(),
        KeyCode::Char(ch) => match ViewId::ALL.iter().find(|view| view.shortcut() == ch) {
            Some(view) => app.apply_action(Action::Navigate(*view)),
            None => app.dispatch_key(key),
        },
        _ => app.dispatch_key(key),
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.accept_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.push_search_char(ch);
        }
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Tab => {
            if let Some(rest) = crate::core::command_hint(&app.command.input) {
                app.command.input.push_str(rest);
            }
        }
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, mouse.column, mouse.row),
        MouseEventKind::ScrollUp if app.current_view() == ViewId::OrderList => {
            app.apply_action(Action::PrevPage)
        }
        MouseEventKind::ScrollDown if app.current_view() == ViewId::OrderList => {
            app.apply_action(Action::NextPage)
        }
        _ => {}
    }
}

/// Resolve a click against the targets recorded by the last draw
pub fn handle_click(app: &mut App, col: u16, row: u16) {
    let action = click_action(app, col, row);
    app.apply_action(action);
}

fn click_action(app: &App, col: u16, row: u16) -> Action {
    let hits = &app.hits;
    let hit = |rect| rect_contains(rect, col, row);

    if app.state.nav.sidebar_open {
        if let Some((_, view)) = hits.sidebar_views.iter().find(|(rect, _)| hit(*rect)) {
            return Action::Navigate(*view);
        }
        match hits.sidebar {
            Some(sidebar) if hit(sidebar) => return Action::None,
            // Clicking the backdrop dismisses the overlay
            _ => {
                if !hits.sidebar_toggle.is_some_and(hit) {
                    return Action::CloseSidebar;
                }
            }
        }
    }

    if hits.sidebar_toggle.is_some_and(hit) {
        return Action::ToggleSidebar;
    }
    if hits.theme_toggle.is_some_and(hit) {
        return Action::ToggleTheme;
    }
    if hits.drawer_toggle.is_some_and(hit) {
        return Action::ToggleDrawer;
    }

    if app.current_view() != ViewId::OrderList {
        return Action::None;
    }

    if hits.header_checkbox.is_some_and(hit) {
        return Action::SetAllVisible(app.ctx.page_check != CheckState::Checked);
    }
    if let Some((_, key)) = hits.sort_headers.iter().find(|(rect, _)| hit(*rect)) {
        return Action::Sort(*key);
    }
    if let Some((_, id)) = hits.rows.iter().find(|(rect, _)| hit(*rect)) {
        return Action::ToggleOrder(id.clone());
    }
    if let Some((_, target)) = hits.page_buttons.iter().find(|(rect, _)| hit(*rect)) {
        return match target {
            PageTarget::Prev => Action::PrevPage,
            PageTarget::Next => Action::NextPage,
            PageTarget::Page(page) => Action::GoToPage(*page),
        };
    }
    Action::None
}
