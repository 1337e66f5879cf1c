//! Dashboard state and its reducer

use crate::core::action::Action;
use crate::core::nav::NavState;
use crate::core::query::{self, QueryState, QueryView};
use crate::core::selection::Selection;
use crate::store::OrderStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub query: QueryState,
    pub selection: Selection,
    pub nav: NavState,
}

impl DashboardState {
    pub fn new(nav: NavState) -> Self {
        Self {
            nav,
            ..Self::default()
        }
    }

    pub fn view<'a>(&self, store: &'a OrderStore) -> QueryView<'a> {
        query::run(store, &self.query)
    }

    /// Apply one action. Side-effect actions leave the state untouched.
    pub fn reduce(&self, action: &Action, store: &OrderStore) -> DashboardState {
        let mut next = self.clone();
        match action {
            Action::Navigate(view) => next.nav = next.nav.navigate(*view),
            Action::SetSearch(term) => next.query.set_search(term.as_str()),
            Action::Sort(key) => next.query.toggle_sort(*key),
            Action::GoToPage(page) => {
                let total = self.view(store).total_pages;
                next.query.go_to_page(*page, total);
            }
            Action::NextPage => {
                let total = self.view(store).total_pages;
                next.query.next_page(total);
            }
            Action::PrevPage => next.query.prev_page(),
            Action::ToggleOrder(id) => {
                if store.contains(id) {
                    next.selection.toggle(id);
                }
            }
            Action::SetOrder(id, checked) => {
                if store.contains(id) {
                    next.selection.set(id, *checked);
                }
            }
            Action::SetAllVisible(checked) => {
                let visible = self.view(store).visible_ids();
                next.selection.set_all(&visible, *checked);
            }
            Action::ClearSelection => next.selection.clear(),
            Action::ToggleSidebar => next.nav = next.nav.toggle_sidebar(),
            Action::CloseSidebar => next.nav = next.nav.close_sidebar(),
            Action::ToggleDrawer => next.nav = next.nav.toggle_drawer(),
            Action::ToggleTheme => next.nav = next.nav.with_theme(next.nav.theme.toggled()),
            Action::SetTheme(theme) => next.nav = next.nav.with_theme(*theme),
            Action::None
            | Action::Export(_)
            | Action::CopySelection
            | Action::Notify(..)
            | Action::ToggleHelp
            | Action::Quit => {}
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nav::{Theme, ViewId};
    use crate::core::query::SortKey;
    use crate::domain::OrderId;

    #[test]
    fn test_unknown_id_is_ignored() {
        let store = OrderStore::sample().unwrap();
        let state = DashboardState::default();
        let next = state.reduce(&Action::ToggleOrder(OrderId::from("#NOPE")), &store);
        assert_eq!(next, state);
    }

    #[test]
    fn test_side_effects_do_not_change_state() {
        let store = OrderStore::sample().unwrap();
        let state = DashboardState::default().reduce(&Action::NextPage, &store);
        for action in [Action::CopySelection, Action::ToggleHelp, Action::Quit] {
            assert!(!action.is_state_change());
            assert_eq!(state.reduce(&action, &store), state);
        }
    }

    #[test]
    fn test_next_page_clamps_to_total() {
        let store = OrderStore::sample().unwrap();
        let mut state = DashboardState::default();
        for _ in 0..5 {
            state = state.reduce(&Action::NextPage, &store);
        }
        assert_eq!(state.query.page(), 3);
        let state = state.reduce(&Action::GoToPage(7), &store);
        assert_eq!(state.query.page(), 3);
    }

    #[test]
    fn test_sort_and_search_reset_page() {
        let store = OrderStore::sample().unwrap();
        let state = DashboardState::default().reduce(&Action::GoToPage(2), &store);
        assert_eq!(state.query.page(), 2);
        let sorted = state.reduce(&Action::Sort(SortKey::User), &store);
        assert_eq!(sorted.query.page(), 1);
        let searched = state.reduce(&Action::SetSearch("cm98".into()), &store);
        assert_eq!(searched.query.page(), 1);
    }

    #[test]
    fn test_nav_actions() {
        let store = OrderStore::sample().unwrap();
        let state = DashboardState::default()
            .reduce(&Action::ToggleSidebar, &store)
            .reduce(&Action::ToggleTheme, &store)
            .reduce(&Action::Navigate(ViewId::Ecommerce), &store);
        assert_eq!(state.nav.view, ViewId::Ecommerce);
        assert!(!state.nav.sidebar_open);
        assert_eq!(state.nav.theme, Theme::Dark);
        let state = state.reduce(&Action::SetTheme(Theme::Light), &store);
        assert_eq!(state.nav.theme, Theme::Light);
    }
}
