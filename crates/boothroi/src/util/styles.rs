//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Standard color for warning/caution values
pub const WARNING_COLOR: Color = Color::Yellow;

/// Bar colors for the results chart
pub const INVESTMENT_COLOR: Color = Color::LightRed;
pub const REVENUE_COLOR: Color = Color::LightBlue;
pub const PROFIT_COLOR: Color = Color::LightGreen;

/// Create a block with a title that shows focused state via border color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Create a block with title and bottom help text that shows focused state.
///
/// The help text is only shown when the panel is focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Green for zero and above, red below.
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

pub fn value_style(value: f64) -> Style {
    Style::default().fg(value_color(value))
}

/// Green when the metric meets its benchmark, yellow otherwise.
pub fn comparison_color(is_better: bool) -> Color {
    if is_better {
        POSITIVE_COLOR
    } else {
        WARNING_COLOR
    }
}
