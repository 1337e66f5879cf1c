use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{
    parse_command, Action, Command, Context, DashboardState, Module, NavState, NotifyLevel,
    ViewId,
};
use crate::domain::OrderId;
use crate::modules::ecommerce::Ecommerce;
use crate::modules::export;
use crate::modules::orders::OrderList;
use crate::store::OrderStore;
use crate::ui::layout::HitMap;

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

pub struct App {
    pub store: OrderStore,
    pub state: DashboardState,
    pub ctx: Context,
    pub orders: OrderList,
    pub ecommerce: Ecommerce,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub export_dir: Option<PathBuf>,
    /// Click targets recorded by the last draw
    pub hits: HitMap,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: OrderStore, nav: NavState) -> Self {
        let mut app = Self {
            store,
            state: DashboardState::new(nav),
            ctx: Context::new(),
            orders: OrderList::new(),
            ecommerce: Ecommerce::new(),
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            help_open: false,
            export_dir: None,
            hits: HitMap::default(),
            should_quit: false,
        };
        app.sync_context();
        app
    }

    pub fn with_export_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.export_dir = dir;
        self
    }

    /// Sync context with derived query state
    pub fn sync_context(&mut self) {
        let view = self.state.view(&self.store);
        let visible = view.visible_ids();
        self.ctx.view = self.state.nav.view;
        self.ctx.page_check = self.state.selection.page_state(&visible);
        self.ctx.page = view.page;
        self.ctx.total_pages = view.total_pages;
        self.ctx.selected_count = self.state.selection.len();
        self.ctx.visible_ids = visible;
        self.orders.clamp(self.ctx.row_count());
    }

    pub fn current_view(&self) -> ViewId {
        self.state.nav.view
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    /// Route a key the shell did not claim to the active view
    pub fn dispatch_key(&mut self, key: crossterm::event::KeyEvent) {
        let action = match self.current_view() {
            ViewId::OrderList => self.orders.handle_key(key, &self.ctx),
            ViewId::Ecommerce => self.ecommerce.handle_key(key, &self.ctx),
        };
        self.apply_action(action);
    }

    pub fn apply_action(&mut self, action: Action) {
        if action.is_state_change() {
            let before = self.state.query.clone();
            let next = self.state.reduce(&action, &self.store);
            if next.nav.view != self.state.nav.view {
                info!(view = next.nav.view.title(), "navigate");
            }
            if next.query.page() != before.page() || next.query.search() != before.search() {
                self.orders.reset();
            }
            debug!(?action, "applied");
            self.state = next;
            self.sync_context();
            return;
        }

        match action {
            Action::Export(format) => {
                let result = export::export_orders(
                    &self.store,
                    &self.state,
                    format,
                    self.export_dir.as_deref(),
                );
                self.apply_action(result);
            }
            Action::CopySelection => self.copy_selection(),
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    pub fn execute_command(&self, cmd: &Command) -> Action {
        match cmd {
            Command::View(view) => Action::Navigate(*view),
            Command::Search(term) => Action::SetSearch(term.clone()),
            Command::Sort(key) => Action::Sort(*key),
            Command::Page(page) => {
                if (1..=self.ctx.total_pages).contains(page) {
                    Action::GoToPage(*page)
                } else {
                    Action::Notify(
                        format!("Page {} out of range (1-{})", page, self.ctx.total_pages),
                        NotifyLevel::Warn,
                    )
                }
            }
            Command::Next => Action::NextPage,
            Command::Prev => Action::PrevPage,
            Command::SelectAll => Action::SetAllVisible(true),
            Command::SelectNone => Action::SetAllVisible(false),
            Command::Select(id) => {
                let id = OrderId::new(id.as_str());
                if self.store.contains(&id) {
                    Action::SetOrder(id, true)
                } else {
                    Action::Notify(format!("Unknown order {}", id), NotifyLevel::Warn)
                }
            }
            Command::Clear => Action::ClearSelection,
            Command::Theme(None) => Action::ToggleTheme,
            Command::Theme(Some(theme)) => Action::SetTheme(*theme),
            Command::Sidebar => Action::ToggleSidebar,
            Command::Drawer => Action::ToggleDrawer,
            Command::Export(format) => Action::Export(*format),
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(input) => {
                Action::Notify(format!("Unknown command: {}", input), NotifyLevel::Warn)
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = parse_command(&input);
        debug!(?cmd, "command");
        let action = self.execute_command(&cmd);
        self.apply_action(action);
        self.command.last = Some(input);
        self.exit_command();
    }

    /// Search edits apply live, seeded with the current term
    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.command.input = self.state.query.search().to_string();
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.command.input.push(ch);
        self.apply_action(Action::SetSearch(self.command.input.clone()));
    }

    pub fn pop_search_char(&mut self) {
        self.command.input.pop();
        self.apply_action(Action::SetSearch(self.command.input.clone()));
    }

    pub fn accept_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn cancel_search(&mut self) {
        self.accept_search();
        self.apply_action(Action::SetSearch(String::new()));
    }

    /// Esc in normal mode closes the topmost overlay, then clears the search
    pub fn escape(&mut self) {
        if self.help_open {
            self.help_open = false;
        } else if self.state.nav.sidebar_open {
            self.apply_action(Action::CloseSidebar);
        } else if self.state.nav.drawer_open {
            self.apply_action(Action::ToggleDrawer);
        } else if !self.state.query.search().is_empty() {
            self.apply_action(Action::SetSearch(String::new()));
        }
    }

    /// Comma separated selected ids in store order
    pub fn selection_text(&self) -> Option<String> {
        if self.state.selection.is_empty() {
            return None;
        }
        let ids: Vec<&str> = self
            .store
            .pick(self.state.selection.ids())
            .map(|order| order.id.as_str())
            .collect();
        Some(ids.join(","))
    }

    fn copy_selection(&mut self) {
        use arboard::Clipboard;

        let Some(text) = self.selection_text() else {
            self.set_status("Nothing selected to copy", StatusLevel::Warn);
            return;
        };

        match Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(text.as_str()).is_ok() {
                    info!(count = self.state.selection.len(), "copied selection");
                    self.set_status(
                        format!("Copied {} ids", self.state.selection.len()),
                        StatusLevel::Info,
                    );
                } else {
                    self.set_status("Failed to copy to clipboard", StatusLevel::Error);
                }
            }
            Err(_) => {
                self.set_status("Clipboard not available", StatusLevel::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CheckState, SortKey};

    fn app() -> App {
        App::new(OrderStore::sample().unwrap(), NavState::default())
    }

    #[test]
    fn test_context_tracks_page() {
        let mut app = app();
        assert_eq!(app.ctx.total_pages, 3);
        assert_eq!(app.ctx.row_count(), 5);
        app.apply_action(Action::SetAllVisible(true));
        assert_eq!(app.ctx.page_check, CheckState::Checked);
        app.apply_action(Action::NextPage);
        assert_eq!(app.ctx.page, 2);
        assert_eq!(app.ctx.page_check, CheckState::Unchecked);
        assert_eq!(app.ctx.selected_count, 5);
    }

    #[test]
    fn test_live_search() {
        let mut app = app();
        app.enter_search();
        for ch in "drew".chars() {
            app.push_search_char(ch);
        }
        assert_eq!(app.ctx.visible_ids, [OrderId::from("#CM9803")]);
        app.pop_search_char();
        assert_eq!(app.state.query.search(), "dre");
        app.cancel_search();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.state.query.search(), "");
    }

    #[test]
    fn test_apply_command() {
        let mut app = app();
        app.enter_command();
        app.command.input = "sort user".to_string();
        app.apply_command();
        assert_eq!(app.state.query.sort(), Some(SortKey::User));
        assert_eq!(app.command.last.as_deref(), Some("sort user"));
        assert_eq!(app.input_mode, InputMode::Normal);

        app.command.input = "bogus".to_string();
        app.apply_command();
        assert_eq!(
            app.status_text(),
            Some(("Unknown command: bogus", StatusLevel::Warn))
        );
    }

    #[test]
    fn test_page_command_out_of_range() {
        let app = app();
        assert_eq!(app.execute_command(&Command::Page(2)), Action::GoToPage(2));
        assert!(matches!(
            app.execute_command(&Command::Page(4)),
            Action::Notify(_, NotifyLevel::Warn)
        ));
    }

    #[test]
    fn test_select_unknown_id_warns() {
        let app = app();
        assert_eq!(
            app.execute_command(&Command::Select("#CM9801".into())),
            Action::SetOrder(OrderId::from("#CM9801"), true)
        );
        assert!(matches!(
            app.execute_command(&Command::Select("#XX".into())),
            Action::Notify(_, NotifyLevel::Warn)
        ));
    }

    #[test]
    fn test_escape_order() {
        let mut app = app();
        app.apply_action(Action::SetSearch("lane".into()));
        app.apply_action(Action::ToggleSidebar);
        app.help_open = true;

        app.escape();
        assert!(!app.help_open);
        app.escape();
        assert!(!app.state.nav.sidebar_open);
        app.escape();
        assert_eq!(app.state.query.search(), "");
    }

    #[test]
    fn test_selection_text_in_store_order() {
        let mut app = app();
        assert!(app.selection_text().is_none());
        app.apply_action(Action::ToggleOrder(OrderId::from("#CM9810")));
        app.apply_action(Action::ToggleOrder(OrderId::from("#CM9801")));
        assert_eq!(app.selection_text().as_deref(), Some("#CM9801,#CM9810"));
    }

    #[test]
    fn test_quit_and_help() {
        let mut app = app();
        app.apply_action(Action::ToggleHelp);
        assert!(app.help_open);
        app.apply_action(Action::Quit);
        assert!(app.should_quit);
    }
}
