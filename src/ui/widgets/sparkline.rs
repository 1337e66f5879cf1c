//! Single-row sparkline for week-over-week revenue

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Bar glyph for `value` scaled against `max`
fn glyph(value: u64, max: u64) -> char {
    let max = max.max(1);
    let level = ((value as f64 / max as f64) * 7.0).round() as usize;
    BARS[level.min(7)]
}

/// One glyph per point, sharing a scale across series when `max` is set
pub struct MiniSparkline<'a> {
    data: &'a [u64],
    max: Option<u64>,
    style: Style,
}

impl<'a> MiniSparkline<'a> {
    pub fn new(data: &'a [u64]) -> Self {
        Self {
            data,
            max: None,
            style: Style::default(),
        }
    }

    pub fn max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<'a> Widget for MiniSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = sparkline_text_scaled(self.data, area.width as usize, self.max);
        buf.set_string(area.x, area.y, text, self.style);
    }
}

/// Sparkline as text, keeping the most recent `width` points
pub fn sparkline_text(data: &[u64], width: usize) -> String {
    sparkline_text_scaled(data, width, None)
}

fn sparkline_text_scaled(data: &[u64], width: usize, max: Option<u64>) -> String {
    let max = max.unwrap_or_else(|| data.iter().copied().max().unwrap_or(1));
    let start = data.len().saturating_sub(width);
    data[start..].iter().map(|&value| glyph(value, max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_text() {
        let text = sparkline_text(&[0, 7, 14], 8);
        assert_eq!(text, "▁▅█");
    }

    #[test]
    fn test_sparkline_text_truncates_to_latest() {
        let text = sparkline_text(&[1, 2, 3, 4, 5, 6, 7, 8], 3);
        assert_eq!(text.chars().count(), 3);
        assert!(text.ends_with('█'));
        assert!(sparkline_text(&[], 8).is_empty());
    }

    #[test]
    fn test_shared_scale() {
        assert_eq!(sparkline_text_scaled(&[11], 4, Some(22)), "▅");
    }
}
