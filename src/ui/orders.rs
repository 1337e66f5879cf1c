//! Order List view

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::{App, InputMode};
use crate::core::{CheckState, QueryView, SortKey};
use crate::ui::layout::{self, HitMap, PageTarget, COLUMN_SPACING, COLUMN_WIDTHS};
use crate::ui::theme::Palette;

pub fn draw_order_list(f: &mut Frame, area: Rect, app: &App, hits: &mut HitMap, palette: &Palette) {
    let areas = layout::order_areas(area);
    let view = app.state.view(&app.store);

    draw_toolbar(f, areas.toolbar, app, palette);

    if view.is_empty() {
        draw_no_results(f, areas.table, app, palette);
        // Pagination hidden without matches
        return;
    }

    draw_table(f, areas.table, app, hits, &view, palette);
    draw_pagination(f, areas.pagination, app, hits, &view, palette);
}

fn draw_toolbar(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let query = &app.state.query;
    let searching = app.input_mode == InputMode::Search;

    let search = if searching {
        Span::styled(
            format!("/{}_", app.command.input),
            Style::default().fg(palette.accent),
        )
    } else if query.search().is_empty() {
        Span::styled("/ to search", palette.muted())
    } else {
        Span::raw(format!("\"{}\"", query.search()))
    };

    let sort = match query.sort() {
        Some(key) => format!("{} {}", key.title(), query.direction().arrow()),
        None => "none".to_string(),
    };

    let line = Line::from(vec![
        Span::styled("Search ", palette.muted()),
        search,
        Span::raw("   "),
        Span::styled("Sort ", palette.muted()),
        Span::raw(sort),
        Span::raw("   "),
        Span::styled("Selected ", palette.muted()),
        Span::raw(app.state.selection.len().to_string()),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(app.current_view().heading(), palette.title()))
            .border_style(palette.border(searching)),
    );
    f.render_widget(paragraph, area);
}

fn draw_no_results(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let lines = if app.state.query.search().is_empty() {
        vec![Line::from("No orders")]
    } else {
        vec![
            Line::from(Span::styled(
                "No orders found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Try adjusting your search terms or filters",
                palette.muted(),
            )),
        ]
    };
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
    f.render_widget(paragraph, area);
}

fn checkbox(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Indeterminate => "[-]",
        CheckState::Unchecked => "[ ]",
    }
}

fn header_title(app: &App, key: SortKey) -> String {
    let query = &app.state.query;
    if query.sort() == Some(key) {
        format!("{} {}", key.title(), query.direction().arrow())
    } else {
        key.title().to_string()
    }
}

fn draw_table(
    f: &mut Frame,
    area: Rect,
    app: &App,
    hits: &mut HitMap,
    view: &QueryView,
    palette: &Palette,
) {
    let header_cells = std::iter::once(Cell::from(checkbox(app.ctx.page_check))).chain(
        SortKey::ALL
            .iter()
            .map(|key| Cell::from(header_title(app, *key))),
    );
    let header = Row::new(header_cells).style(palette.title());

    let rows: Vec<Row> = view
        .page_rows()
        .iter()
        .map(|order| {
            let checked = if app.state.selection.contains(&order.id) {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            };
            Row::new(vec![
                Cell::from(checkbox(checked)),
                Cell::from(order.id.to_string()),
                Cell::from(order.user.name.clone()),
                Cell::from(order.project.clone()),
                Cell::from(order.address.clone()),
                Cell::from(order.date.raw().to_string()),
                Cell::from(Span::styled(
                    format!("● {}", order.status.label()),
                    palette.status(order.status),
                )),
            ])
        })
        .collect();

    let last = COLUMN_WIDTHS.len() - 1;
    let widths: Vec<Constraint> = COLUMN_WIDTHS
        .iter()
        .enumerate()
        .map(|(idx, width)| {
            if idx == last {
                Constraint::Min(*width)
            } else {
                Constraint::Length(*width)
            }
        })
        .collect();

    let title = format!("Page {}/{}", view.page, view.total_pages);
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, palette.muted()))
                .border_style(palette.border(app.input_mode == InputMode::Normal)),
        )
        .highlight_style(Style::default().bg(palette.cursor_bg));

    let mut state = TableState::default();
    if app.ctx.row_count() > 0 {
        state.select(Some(app.orders.cursor()));
    }
    f.render_stateful_widget(table, area, &mut state);

    record_table_hits(app, hits, layout::rect_inner(area));
}

fn record_table_hits(app: &App, hits: &mut HitMap, inner: Rect) {
    if inner.height == 0 {
        return;
    }
    let header = Rect { height: 1, ..inner };
    let cols = layout::column_rects(header);
    if let Some(first) = cols.first() {
        hits.header_checkbox = Some(*first);
    }
    for (rect, key) in cols.iter().skip(1).zip(SortKey::ALL) {
        hits.sort_headers.push((*rect, key));
    }

    for (idx, id) in app.ctx.visible_ids.iter().enumerate() {
        let y = inner.y + 1 + idx as u16;
        if y >= inner.y + inner.height {
            break;
        }
        hits.rows.push((Rect { y, height: 1, ..inner }, id.clone()));
    }
}

/// "Showing 1 to 5 of 15 orders", with the store size appended while a
/// search narrows the list
pub fn pagination_label(view: &QueryView, searching: bool) -> String {
    let mut label = format!(
        "Showing {} to {} of {} orders",
        view.first_shown(),
        view.last_shown(),
        view.matches.len()
    );
    if searching {
        label.push_str(&format!(" ({} total)", view.total_in_store));
    }
    label
}

/// Prev, one button per page, next; the flag marks clickable buttons
pub fn page_buttons(view: &QueryView) -> Vec<(String, PageTarget, bool)> {
    let mut buttons = vec![("‹ Prev".to_string(), PageTarget::Prev, view.has_prev())];
    for page in 1..=view.total_pages {
        buttons.push((format!(" {page} "), PageTarget::Page(page), page != view.page));
    }
    buttons.push(("Next ›".to_string(), PageTarget::Next, view.has_next()));
    buttons
}

fn draw_pagination(
    f: &mut Frame,
    area: Rect,
    app: &App,
    hits: &mut HitMap,
    view: &QueryView,
    palette: &Palette,
) {
    let searching = !app.state.query.search().is_empty();
    let info = Paragraph::new(Span::styled(pagination_label(view, searching), palette.muted()));
    f.render_widget(info, area);

    let buttons = page_buttons(view);
    let total: u16 = buttons
        .iter()
        .map(|(label, _, _)| label.chars().count() as u16 + 1)
        .sum();
    let mut x = (area.x + area.width).saturating_sub(total);

    for (label, target, enabled) in buttons {
        let width = label.chars().count() as u16;
        let rect = Rect {
            x,
            width,
            ..area
        };
        let style = match target {
            PageTarget::Page(page) if page == view.page => Style::default()
                .fg(palette.bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
            _ if enabled => Style::default().fg(palette.accent),
            _ => palette.muted(),
        };
        f.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        if enabled {
            hits.page_buttons.push((rect, target));
        }
        x = x.saturating_add(width + 1);
    }
}
