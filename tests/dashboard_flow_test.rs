//! End-to-end flows through App, key routing and a rendered frame

use byewind::app::{App, InputMode};
use byewind::core::{Action, CheckState, NavState, SortKey, Theme, ViewId};
use byewind::domain::OrderId;
use byewind::input;
use byewind::store::OrderStore;
use byewind::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn app() -> App {
    App::new(OrderStore::sample().unwrap(), NavState::default())
}

fn press(app: &mut App, code: KeyCode) {
    input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn visible(app: &App) -> Vec<&str> {
    app.ctx.visible_ids.iter().map(OrderId::as_str).collect()
}

/// Draw one frame and return the screen as text rows
fn render(app: &mut App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");
    let buffer = terminal.backend().buffer().clone();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|line| line.contains(needle))
}

#[test]
fn test_default_first_page() {
    let mut app = app();
    assert_eq!(app.current_view(), ViewId::OrderList);
    assert_eq!(
        visible(&app),
        ["#CM9801", "#CM9802", "#CM9803", "#CM9804", "#CM9805"]
    );
    assert_eq!(app.ctx.total_pages, 3);

    let screen = render(&mut app);
    assert!(screen_contains(&screen, "Showing 1 to 5 of 15 orders"));
    assert!(screen_contains(&screen, "Dashboards / Default"));
    assert_eq!(app.hits.rows.len(), 5);
}

#[test]
fn test_search_natali() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "natali");
    press(&mut app, KeyCode::Enter);

    assert_eq!(visible(&app), ["#CM9801"]);
    assert_eq!(app.ctx.total_pages, 1);
    let screen = render(&mut app);
    assert!(screen_contains(&screen, "Showing 1 to 1 of 1 orders (15 total)"));
}

#[test]
fn test_search_without_results() {
    let mut app = app();
    app.apply_action(Action::SetSearch("nobody".into()));
    assert!(app.ctx.visible_ids.is_empty());

    let screen = render(&mut app);
    assert!(screen_contains(&screen, "No orders found"));
    assert!(!screen_contains(&screen, "Showing"));
    assert!(app.hits.page_buttons.is_empty());
}

#[test]
fn test_search_zzz_hides_pagination() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "zzz");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.ctx.total_pages, 0);
    assert!(app.ctx.visible_ids.is_empty());
    let screen = render(&mut app);
    assert!(screen_contains(&screen, "No orders found"));
    assert!(screen_contains(&screen, "Try adjusting your search terms or filters"));
    assert!(!screen_contains(&screen, "Showing"));
    assert!(!screen_contains(&screen, "Next ›"));
    assert!(app.hits.page_buttons.is_empty());
}

fn all_matches(app: &App) -> Vec<String> {
    app.state
        .view(&app.store)
        .matches
        .iter()
        .map(|order| order.id.to_string())
        .collect()
}

fn click_status_header(app: &mut App) {
    render(app);
    let (rect, _) = app
        .hits
        .sort_headers
        .iter()
        .find(|(_, key)| *key == SortKey::Status)
        .copied()
        .expect("status header");
    input::handle_click(app, rect.x, rect.y);
}

#[test]
fn test_status_header_clicked_twice_reverses() {
    let mut app = app();

    click_status_header(&mut app);
    let ascending = all_matches(&app);
    click_status_header(&mut app);
    let mut descending = all_matches(&app);

    assert_eq!(app.state.query.sort(), Some(SortKey::Status));
    assert_eq!(ascending.len(), 15);
    descending.reverse();
    assert_eq!(descending, ascending);
}

#[test]
fn test_select_all_on_first_and_last_page() {
    let mut app = app();
    app.apply_action(Action::SetAllVisible(true));
    app.apply_action(Action::GoToPage(3));
    assert_eq!(app.ctx.page_check, CheckState::Unchecked);
    app.apply_action(Action::SetAllVisible(true));

    assert_eq!(app.state.selection.len(), 10);
    assert_eq!(app.ctx.page_check, CheckState::Checked);
    for id in ["#CM9801", "#CM9805", "#CM9811", "#CM9815"] {
        assert!(app.state.selection.contains(&OrderId::from(id)), "{id}");
    }
    assert!(!app.state.selection.contains(&OrderId::from("#CM9806")));
}

#[test]
fn test_sort_by_user_twice() {
    let mut app = app();
    app.apply_action(Action::NextPage);
    app.apply_action(Action::Sort(SortKey::User));
    assert_eq!(app.ctx.page, 1);
    assert_eq!(visible(&app)[0], "#CM9805");

    app.apply_action(Action::Sort(SortKey::User));
    assert_eq!(visible(&app)[0], "#CM9815");
}

#[test]
fn test_select_all_then_next_page() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.ctx.page_check, CheckState::Checked);
    assert_eq!(app.ctx.selected_count, 5);

    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.ctx.page, 2);
    assert_eq!(app.ctx.page_check, CheckState::Unchecked);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.ctx.page_check, CheckState::Indeterminate);
    assert_eq!(app.ctx.selected_count, 6);
}

#[test]
fn test_sidebar_navigation_by_click() {
    let mut app = app();
    press(&mut app, KeyCode::Char('b'));
    assert!(app.state.nav.sidebar_open);

    render(&mut app);
    let (rect, _) = app
        .hits
        .sidebar_views
        .iter()
        .find(|(_, view)| *view == ViewId::Ecommerce)
        .copied()
        .expect("eCommerce entry");
    input::handle_click(&mut app, rect.x + 1, rect.y);

    assert_eq!(app.current_view(), ViewId::Ecommerce);
    assert!(!app.state.nav.sidebar_open);
    let screen = render(&mut app);
    assert!(screen_contains(&screen, "Dashboards / eCommerce"));
}

#[test]
fn test_sort_header_click() {
    let mut app = app();
    render(&mut app);
    let (rect, _) = app
        .hits
        .sort_headers
        .iter()
        .find(|(_, key)| *key == SortKey::User)
        .copied()
        .expect("user header");
    input::handle_click(&mut app, rect.x, rect.y);
    assert_eq!(app.state.query.sort(), Some(SortKey::User));
}

#[test]
fn test_commands_drive_state() {
    let mut app = app();
    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "theme dark");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.nav.theme, Theme::Dark);
    assert_eq!(app.input_mode, InputMode::Normal);

    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "select #CM9810");
    press(&mut app, KeyCode::Enter);
    assert!(app.state.selection.contains(&OrderId::from("#CM9810")));

    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "view ecommerce");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_view(), ViewId::Ecommerce);
    // Selection outlives navigation
    assert_eq!(app.ctx.selected_count, 1);
}

#[test]
fn test_overlays_render() {
    let mut app = app();
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('?'));
    let screen = render(&mut app);
    assert!(screen_contains(&screen, "Notifications"));
    assert!(screen_contains(&screen, "Help"));

    press(&mut app, KeyCode::Esc);
    assert!(!app.help_open);
    assert!(app.state.nav.drawer_open);
}
