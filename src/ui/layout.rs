use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::{SortKey, ViewId};
use crate::domain::OrderId;

pub const SIDEBAR_WIDTH: u16 = 26;
pub const DRAWER_WIDTH: u16 = 32;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub main: Rect,
    pub drawer: Option<Rect>,
    /// Overlay on the left edge of the body, drawn only when open
    pub sidebar: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect, drawer_open: bool) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let (main, drawer) = if drawer_open {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(DRAWER_WIDTH)])
            .split(vertical[1]);
        (body[0], Some(body[1]))
    } else {
        (vertical[1], None)
    };

    let sidebar = Rect {
        width: SIDEBAR_WIDTH.min(vertical[1].width),
        ..vertical[1]
    };

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        main,
        drawer,
        sidebar,
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

/// Order List regions inside the main area
#[derive(Debug, Clone, Copy)]
pub struct OrderAreas {
    pub toolbar: Rect,
    pub table: Rect,
    pub pagination: Rect,
}

pub fn order_areas(main: Rect) -> OrderAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(main);
    OrderAreas {
        toolbar: chunks[0],
        table: chunks[1],
        pagination: chunks[2],
    }
}

/// Fixed table column widths: checkbox, then one per sort key. The last
/// column takes whatever is left.
pub const COLUMN_WIDTHS: [u16; 7] = [3, 8, 18, 20, 26, 13, 12];
pub const COLUMN_SPACING: u16 = 1;

/// Horizontal slices of `row` matching [`COLUMN_WIDTHS`]
pub fn column_rects(row: Rect) -> Vec<Rect> {
    let mut x = row.x;
    let right = row.x.saturating_add(row.width);
    let mut rects = Vec::with_capacity(COLUMN_WIDTHS.len());
    for (idx, width) in COLUMN_WIDTHS.iter().enumerate() {
        let width = if idx + 1 == COLUMN_WIDTHS.len() {
            right.saturating_sub(x)
        } else {
            (*width).min(right.saturating_sub(x))
        };
        rects.push(Rect {
            x,
            width,
            ..row
        });
        x = x.saturating_add(width).saturating_add(COLUMN_SPACING).min(right);
    }
    rects
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Prev,
    Next,
    Page(usize),
}

/// Click targets recorded while drawing
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub sidebar: Option<Rect>,
    pub sidebar_views: Vec<(Rect, ViewId)>,
    pub sidebar_toggle: Option<Rect>,
    pub drawer_toggle: Option<Rect>,
    pub theme_toggle: Option<Rect>,
    pub sort_headers: Vec<(Rect, SortKey)>,
    pub header_checkbox: Option<Rect>,
    pub rows: Vec<(Rect, OrderId)>,
    pub page_buttons: Vec<(Rect, PageTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas_with_drawer() {
        let size = Rect::new(0, 0, 120, 40);
        let closed = areas(size, false);
        assert!(closed.drawer.is_none());
        assert_eq!(closed.main.width, 120);

        let open = areas(size, true);
        assert_eq!(open.drawer.map(|d| d.width), Some(DRAWER_WIDTH));
        assert_eq!(open.main.width, 120 - DRAWER_WIDTH);
        assert_eq!(open.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(open.header.height, 3);
        assert_eq!(open.command_line.y, 39);
    }

    #[test]
    fn test_column_rects() {
        let row = Rect::new(2, 5, 120, 1);
        let cols = column_rects(row);
        assert_eq!(cols.len(), 7);
        assert_eq!(cols[0], Rect::new(2, 5, 3, 1));
        assert_eq!(cols[1].x, 6);
        assert_eq!(cols[6].x + cols[6].width, 122);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(1, 1, 3, 2);
        assert!(rect_contains(rect, 1, 1));
        assert!(rect_contains(rect, 3, 2));
        assert!(!rect_contains(rect, 4, 1));
        assert!(!rect_contains(rect_inner(Rect::new(0, 0, 2, 2)), 0, 0));
    }
}
