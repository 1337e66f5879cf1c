//! eCommerce view: literal sample analytics

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Dataset, GraphType, LineGauge,
    Paragraph, Row, Table,
};
use ratatui::Frame;

use crate::app::App;
use crate::domain::analytics::{
    Kpi, ACTUALS, CURRENT_WEEK, CURRENT_WEEK_TOTAL, KPIS, LOCATIONS, MONTHS, PREVIOUS_WEEK,
    PREVIOUS_WEEK_TOTAL, PROJECTIONS, SALES_CHANNELS, TOP_PRODUCTS,
};
use crate::modules::ecommerce::EcommercePanel;
use crate::ui::theme::Palette;
use crate::ui::widgets::MiniSparkline;

pub fn draw_ecommerce(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Percentage(50),
            Constraint::Min(8),
        ])
        .split(area);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(44),
            Constraint::Percentage(28),
        ])
        .split(rows[2]);

    let active = app.ecommerce.active_panel();
    let block = |panel: EcommercePanel| {
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(panel.title(), palette.title()))
            .border_style(palette.border(panel == active))
    };

    draw_kpis(f, rows[0], block(EcommercePanel::Kpis), palette);
    draw_projections(f, middle[0], block(EcommercePanel::Projections), palette);
    draw_revenue(f, middle[1], block(EcommercePanel::Revenue), palette);
    draw_locations(f, bottom[0], block(EcommercePanel::Locations), palette);
    draw_products(f, bottom[1], block(EcommercePanel::Products), palette);
    draw_sales(f, bottom[2], block(EcommercePanel::Sales), palette);
}

fn kpi_lines(kpi: &Kpi, palette: &Palette) -> Vec<Line<'static>> {
    let (arrow, color) = if kpi.is_rising() {
        ("↗", palette.rising)
    } else {
        ("↘", palette.falling)
    };
    vec![
        Line::from(Span::styled(kpi.title, palette.muted())),
        Line::from(vec![
            Span::styled(kpi.value, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", kpi.change_label(), arrow),
                Style::default().fg(color),
            ),
        ]),
    ]
}

fn draw_kpis(f: &mut Frame, area: Rect, block: Block, palette: &Palette) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (kpi, card) in KPIS.iter().zip(cards.iter()) {
        let paragraph = Paragraph::new(Text::from(kpi_lines(kpi, palette)));
        f.render_widget(paragraph, *card);
    }
}

fn draw_projections(f: &mut Frame, area: Rect, block: Block, palette: &Palette) {
    let mut chart = BarChart::default()
        .block(block)
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);

    for (idx, month) in MONTHS.iter().enumerate() {
        let actual = ACTUALS.data.get(idx).copied().unwrap_or(0);
        let projection = PROJECTIONS.data.get(idx).copied().unwrap_or(0);
        let group = BarGroup::default().label(Line::from(*month)).bars(&[
            Bar::default()
                .value(actual)
                .style(Style::default().fg(palette.accent)),
            Bar::default()
                .value(projection)
                .style(palette.muted()),
        ]);
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

fn points(data: &[u64]) -> Vec<(f64, f64)> {
    data.iter()
        .enumerate()
        .map(|(x, y)| (x as f64, *y as f64))
        .collect()
}

fn draw_revenue(f: &mut Frame, area: Rect, block: Block, palette: &Palette) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let max = CURRENT_WEEK
        .data
        .iter()
        .chain(PREVIOUS_WEEK.data)
        .copied()
        .max()
        .unwrap_or(1);

    let legend = [
        (CURRENT_WEEK.name, CURRENT_WEEK_TOTAL, CURRENT_WEEK.data, palette.accent),
        (PREVIOUS_WEEK.name, PREVIOUS_WEEK_TOTAL, PREVIOUS_WEEK.data, palette.muted),
    ];
    for (row, (name, total, data, color)) in legend.into_iter().enumerate() {
        let y = chunks[0].y + row as u16;
        if y >= chunks[0].y + chunks[0].height {
            break;
        }
        let text = format!("● {name} {total} ");
        let width = (text.chars().count() as u16).min(chunks[0].width);
        let label = Rect {
            y,
            height: 1,
            width,
            ..chunks[0]
        };
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(color))),
            label,
        );
        let spark = Rect {
            x: label.x + width,
            y,
            width: chunks[0].width.saturating_sub(width),
            height: 1,
        };
        f.render_widget(
            MiniSparkline::new(data).max(max).style(Style::default().fg(color)),
            spark,
        );
    }

    let current = points(CURRENT_WEEK.data);
    let previous = points(PREVIOUS_WEEK.data);
    let datasets = vec![
        Dataset::default()
            .name(CURRENT_WEEK.name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.accent))
            .data(&current),
        Dataset::default()
            .name(PREVIOUS_WEEK.name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(palette.muted())
            .data(&previous),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(palette.muted())
                .bounds([0.0, (MONTHS.len() - 1) as f64])
                .labels(MONTHS.iter().map(|m| Span::raw(*m)).collect()),
        )
        .y_axis(
            Axis::default()
                .style(palette.muted())
                .bounds([0.0, max as f64])
                .labels(vec![Span::raw("0"), Span::raw(format!("{max}M"))]),
        );
    f.render_widget(chart, chunks[1]);
}

fn draw_locations(f: &mut Frame, area: Rect, block: Block, palette: &Palette) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let max = LOCATIONS.iter().map(|l| l.revenue_k).max().unwrap_or(1).max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); LOCATIONS.len()])
        .split(inner);

    for (location, row) in LOCATIONS.iter().zip(rows.iter()) {
        let gauge = LineGauge::default()
            .ratio(location.revenue_k as f64 / max as f64)
            .label(format!("{:<14}{:>3}K", location.name, location.revenue_k))
            .line_set(symbols::line::THICK)
            .gauge_style(Style::default().fg(palette.accent));
        f.render_widget(gauge, *row);
    }
}

fn draw_products(f: &mut Frame, area: Rect, block: Block, palette: &Palette) {
    let header = Row::new(["Name", "Price", "Quantity", "Amount"]).style(palette.muted());
    let rows = TOP_PRODUCTS.iter().map(|product| {
        Row::new(vec![
            Cell::from(product.name),
            Cell::from(product.price),
            Cell::from(product.quantity.to_string()),
            Cell::from(product.amount),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block);
    f.render_widget(table, area);
}

fn draw_sales(f: &mut Frame, area: Rect, block: Block, palette: &Palette) {
    let lines: Vec<Line> = SALES_CHANNELS
        .iter()
        .map(|channel| {
            let filled = (channel.share_pct / 10.0).round() as usize;
            Line::from(vec![
                Span::styled(format!("{:<10}", channel.name), palette.muted()),
                Span::raw(format!("{:>8} ", channel.amount)),
                Span::styled("█".repeat(filled), Style::default().fg(palette.accent)),
                Span::raw(format!(" {:.1}%", channel.share_pct)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
