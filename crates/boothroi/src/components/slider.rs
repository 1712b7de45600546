use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::styles::{FOCUS_COLOR, focused_block};

/// Consistent dark grey color for empty bar portions
const DARK_GREY: Color = Color::Rgb(40, 40, 40);

/// Width reserved for the label column
const LABEL_WIDTH: usize = 28;
/// Width reserved for the value column
const VALUE_WIDTH: usize = 10;

/// One labelled slider row
pub struct SliderRow {
    pub label: &'static str,
    pub value_text: String,
    /// Fill ratio, 0.0 to 1.0
    pub fraction: f64,
    pub focused: bool,
}

/// Fit a label into the label column, marking truncation with an ellipsis
fn fit_label(label: &str) -> String {
    if label.chars().count() <= LABEL_WIDTH {
        return label.to_string();
    }
    let mut fitted: String = label.chars().take(LABEL_WIDTH - 1).collect();
    fitted.push('…');
    fitted
}

/// Number of filled cells for a given ratio
pub fn filled_cells(fraction: f64, bar_width: usize) -> usize {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (bar_width as f64 * fraction).round() as usize
}

impl SliderRow {
    fn line(&self, bar_width: usize, color: Color) -> Line<'static> {
        let filled = filled_cells(self.fraction, bar_width);
        let empty = bar_width.saturating_sub(filled);

        let (marker, label_style) = if self.focused {
            (
                "▶ ",
                Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default())
        };
        let bar_color = if self.focused { FOCUS_COLOR } else { color };

        Line::from(vec![
            Span::styled(
                format!("{marker}{:<LABEL_WIDTH$}", fit_label(self.label)),
                label_style,
            ),
            Span::styled(" ".repeat(filled), Style::default().bg(bar_color)),
            Span::styled(" ".repeat(empty), Style::default().bg(DARK_GREY)),
            Span::styled(format!(" {:>VALUE_WIDTH$}", self.value_text), label_style),
        ])
    }
}

/// A titled group of horizontal sliders
pub struct SliderGroup<'a> {
    rows: &'a [SliderRow],
    title: String,
    color: Color,
    focused: bool,
}

impl<'a> SliderGroup<'a> {
    pub fn new(title: impl Into<String>, rows: &'a [SliderRow]) -> Self {
        Self {
            rows,
            title: title.into(),
            color: Color::Blue,
            focused: false,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = focused_block(&self.title, self.focused);
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // marker(2) + label + space + value
        let bar_width = (inner_area.width as usize).saturating_sub(2 + LABEL_WIDTH + 1 + VALUE_WIDTH);

        for (i, row) in self.rows.iter().enumerate().take(inner_area.height as usize) {
            let row_area = Rect::new(inner_area.x, inner_area.y + i as u16, inner_area.width, 1);
            frame.render_widget(Paragraph::new(row.line(bar_width, self.color)), row_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells() {
        assert_eq!(filled_cells(0.0, 40), 0);
        assert_eq!(filled_cells(0.25, 40), 10);
        assert_eq!(filled_cells(1.0, 40), 40);
        assert_eq!(filled_cells(1.5, 40), 40);
        assert_eq!(filled_cells(f64::NAN, 40), 0);
    }

    #[test]
    fn test_long_labels_are_truncated() {
        assert_eq!(fit_label("Staffing"), "Staffing");
        let fitted = fit_label("Show Services (Electricity, Rigging)");
        assert_eq!(fitted.chars().count(), LABEL_WIDTH);
        assert!(fitted.ends_with('…'));
    }

    #[test]
    fn test_row_line_width() {
        let row = SliderRow {
            label: "Staffing",
            value_text: "$6,000".to_string(),
            fraction: 0.2,
            focused: true,
        };
        let line = row.line(20, Color::Blue);
        assert_eq!(line.width(), 2 + LABEL_WIDTH + 20 + 1 + VALUE_WIDTH);
    }
}
