use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod ecommerce;
pub mod layout;
pub mod orders;
pub mod theme;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::core::{command_hint, ViewId};
use crate::domain::feed::{ACTIVITIES, CONTACTS, NOTIFICATIONS};
use layout::HitMap;
use theme::Palette;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();
    let palette = Palette::for_theme(app.state.nav.theme);
    let areas = layout::areas(size, app.state.nav.drawer_open);

    let mut hits = std::mem::take(&mut app.hits);
    hits.clear();

    f.render_widget(Block::default().style(palette.base()), size);

    draw_header(f, areas.header, app, &mut hits, &palette);
    match app.current_view() {
        ViewId::OrderList => orders::draw_order_list(f, areas.main, app, &mut hits, &palette),
        ViewId::Ecommerce => ecommerce::draw_ecommerce(f, areas.main, app, &palette),
    }
    if let Some(drawer) = areas.drawer {
        draw_drawer(f, drawer, &palette);
    }
    draw_status_line(f, areas.status_line, app, &palette);
    draw_command_line(f, areas.command_line, app, &palette);

    if app.state.nav.sidebar_open {
        draw_sidebar(f, areas.sidebar, app, &mut hits, &palette);
    }
    if app.help_open {
        draw_help_popup(f, areas.size, app, &palette);
    }

    app.hits = hits;
}

fn draw_header(f: &mut Frame, area: Rect, app: &App, hits: &mut HitMap, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let nav = &app.state.nav;
    let toggle = if nav.sidebar_open { "✕ " } else { "☰ " };
    let left = Line::from(vec![
        Span::styled(toggle, Style::default().fg(palette.accent)),
        Span::styled("Dashboards", palette.muted()),
        Span::styled(" / ", palette.muted()),
        Span::styled(nav.view.title(), Style::default().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(left), inner);
    hits.sidebar_toggle = Some(Rect { width: 2, ..inner });

    let theme_label = format!("◐ {} ", nav.theme.label());
    let drawer_label = if nav.drawer_open { "[Feed]" } else { " Feed " };
    let right = Line::from(vec![
        Span::styled(theme_label.clone(), palette.muted()),
        Span::raw(" "),
        Span::styled(drawer_label, palette.muted()),
    ]);
    let theme_width = theme_label.chars().count() as u16;
    let drawer_width = 6;
    let right_width = theme_width + 1 + drawer_width;
    let right_rect = Rect {
        x: (inner.x + inner.width).saturating_sub(right_width),
        width: right_width.min(inner.width),
        ..inner
    };
    f.render_widget(Paragraph::new(right), right_rect);
    hits.theme_toggle = Some(Rect {
        width: theme_width.min(right_rect.width),
        ..right_rect
    });
    hits.drawer_toggle = Some(Rect {
        x: right_rect.x + theme_width + 1,
        width: drawer_width,
        ..right_rect
    });
}

/// Sidebar rows: heading flag, label, selectable view
const SIDEBAR_ROWS: &[(bool, &str, Option<ViewId>)] = &[
    (true, "Favorites", None),
    (false, "Overview", None),
    (false, "Projects", None),
    (true, "Dashboards", None),
    (false, "Default", Some(ViewId::OrderList)),
    (false, "eCommerce", Some(ViewId::Ecommerce)),
    (false, "Projects", None),
    (false, "Online Courses", None),
    (true, "Pages", None),
    (false, "User Profile", None),
    (false, "Overview", None),
    (false, "Projects", None),
    (false, "Campaigns", None),
    (false, "Documents", None),
    (false, "Followers", None),
    (false, "Account", None),
    (false, "Corporate", None),
    (false, "Blog", None),
    (false, "Social", None),
];

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App, hits: &mut HitMap, palette: &Palette) {
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("ByeWind", palette.title()))
        .border_style(palette.border(true))
        .style(palette.base());
    let inner = block.inner(area);
    f.render_widget(block, area);
    hits.sidebar = Some(area);

    let lines: Vec<Line> = SIDEBAR_ROWS
        .iter()
        .map(|(heading, label, view)| {
            if *heading {
                return Line::from(Span::styled(*label, palette.muted()));
            }
            match view {
                Some(view) if *view == app.current_view() => Line::from(Span::styled(
                    format!("▌ {label}"),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Some(_) => Line::from(format!("  {label}")),
                None => Line::from(Span::styled(format!("  {label}"), palette.muted())),
            }
        })
        .collect();
    f.render_widget(Paragraph::new(Text::from(lines)), inner);

    for (idx, (_, _, view)) in SIDEBAR_ROWS.iter().enumerate() {
        let Some(view) = view else {
            continue;
        };
        let y = inner.y + idx as u16;
        if y >= inner.y + inner.height {
            break;
        }
        hits.sidebar_views.push((Rect { y, height: 1, ..inner }, *view));
    }
}

fn draw_drawer(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut lines = vec![Line::from(Span::styled("Notifications", palette.title()))];
    for item in NOTIFICATIONS {
        lines.push(Line::from(item.text));
        lines.push(Line::from(Span::styled(item.when, palette.muted())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Activities", palette.title())));
    for item in ACTIVITIES {
        lines.push(Line::from(item.text));
        lines.push(Line::from(Span::styled(item.when, palette.muted())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Contacts", palette.title())));
    for name in CONTACTS {
        lines.push(Line::from(format!("• {name}")));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let ctx = &app.ctx;
    let mut spans = vec![
        Span::styled("View ", palette.muted()),
        Span::raw(format!("{}  ", app.state.nav.breadcrumb())),
    ];
    if app.current_view() == ViewId::OrderList {
        spans.push(Span::styled("Page ", palette.muted()));
        spans.push(Span::raw(format!("{}/{}  ", ctx.page, ctx.total_pages)));
    }
    spans.push(Span::styled("Selected ", palette.muted()));
    spans.push(Span::raw(ctx.selected_count.to_string()));
    if !app.state.query.search().is_empty() {
        spans.push(Span::styled("  Search ", palette.muted()));
        spans.push(Span::raw(app.state.query.search().to_string()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            Line::from(vec![
                Span::styled(": ", Style::default().fg(palette.accent)),
                Span::raw(app.command.input.as_str()),
                Span::styled(hint.unwrap_or(""), palette.muted()),
                Span::styled("  Enter=run Esc=cancel", palette.muted()),
            ])
        }
        InputMode::Search => Line::from(vec![
            Span::styled("/ ", Style::default().fg(palette.accent)),
            Span::raw(app.command.input.as_str()),
            Span::styled("  Enter=keep Esc=clear", palette.muted()),
        ]),
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => palette.rising,
                    StatusLevel::Warn => Color::Yellow,
                    StatusLevel::Error => palette.falling,
                };
                Line::from(vec![
                    Span::styled("msg: ", palette.muted()),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints(app, palette)
            }
        }
    };

    f.render_widget(Paragraph::new(content), area);
}

fn action_hints(app: &App, palette: &Palette) -> Line<'static> {
    let hints: &[(&str, &str)] = match app.current_view() {
        ViewId::OrderList => &[
            ("j/k", "row"),
            ("space", "check"),
            ("a", "all"),
            ("[/]", "page"),
            ("s", "sort"),
            ("/", "search"),
            ("e", "export"),
            ("?", "help"),
        ],
        ViewId::Ecommerce => &[
            ("tab", "panel"),
            ("1", "orders"),
            ("b", "sidebar"),
            ("n", "drawer"),
            ("t", "theme"),
            ("?", "help"),
        ],
    };
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(format!("{key} "), Style::default().fg(palette.accent)));
        spans.push(Span::styled(format!("{label}  "), palette.muted()));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1 / 2      Default / eCommerce"),
        Line::from("  b          Toggle sidebar"),
        Line::from("  n          Toggle notifications drawer"),
        Line::from("  t          Toggle light/dark theme"),
        Line::from("  Esc        Close overlay / clear search"),
        Line::from("  Mouse      Click sidebar, headers, boxes, pages"),
        Line::from(""),
        Line::from("Order List"),
        Line::from("  j / k      Move row cursor"),
        Line::from("  [ / ]      Prev/Next page"),
        Line::from("  Space      Check row"),
        Line::from("  a          Check/uncheck page"),
        Line::from("  s + key    Sort: i d u p a t"),
        Line::from("  /          Search id or user"),
        Line::from("  e / E      Export CSV / JSON"),
        Line::from("  y          Copy selected ids"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :search <term>  :sort <col>  :page <n>"),
        Line::from("  :select all|none|<id>  :clear"),
        Line::from("  :view <name>  :theme [light|dark]  :export [csv|json]"),
        Line::from(""),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from(format!("Current view: {}", app.state.nav.breadcrumb())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(Span::styled("Help", palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        )
        .style(palette.base())
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
