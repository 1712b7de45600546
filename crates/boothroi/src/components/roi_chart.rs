use boothroi_core::model::CalculatedMetrics;
use ratatui::{
    Frame,
    layout::{Direction, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use crate::util::format::format_currency;
use crate::util::styles::{INVESTMENT_COLOR, PROFIT_COLOR, REVENUE_COLOR};

/// Chart values as (label, value). Profit never goes below zero on the
/// chart; the stat list shows the signed figure.
pub fn chart_values(metrics: &CalculatedMetrics) -> [(&'static str, f64); 3] {
    [
        ("Investment", metrics.total_investment),
        ("Revenue", metrics.total_lead_value),
        ("Profit", metrics.net_profit.max(0.0)),
    ]
}

/// Investment / Revenue / Profit bar chart
pub fn render_roi_chart(frame: &mut Frame, area: Rect, metrics: &CalculatedMetrics) {
    let block = Block::default().borders(Borders::ALL).title(" BREAKDOWN ");

    let colors = [INVESTMENT_COLOR, REVENUE_COLOR, PROFIT_COLOR];
    let bars: Vec<Bar> = chart_values(metrics)
        .iter()
        .zip(colors)
        .map(|(&(label, value), color)| {
            let style = Style::default().fg(color);
            Bar::default()
                // Whole dollars; bars only need relative height
                .value(value.max(0.0).round() as u64)
                .label(Line::from(label))
                .text_value(format_currency(value))
                .style(style)
                .value_style(style.reversed())
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(4) / 3).clamp(3, 16);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .direction(Direction::Vertical);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_profit_is_clamped() {
        let metrics = CalculatedMetrics {
            total_investment: 55_000.0,
            new_customers: 0.25,
            total_lead_value: 250.0,
            net_profit: -54_750.0,
            roi: -99.545,
            cost_per_lead: 11_000.0,
        };
        let values = chart_values(&metrics);
        assert_eq!(values[0], ("Investment", 55_000.0));
        assert_eq!(values[1], ("Revenue", 250.0));
        assert_eq!(values[2], ("Profit", 0.0));
    }

    #[test]
    fn test_positive_profit_passes_through() {
        let metrics = CalculatedMetrics {
            total_investment: 55_000.0,
            new_customers: 15.0,
            total_lead_value: 75_000.0,
            net_profit: 20_000.0,
            roi: 36.36,
            cost_per_lead: 366.67,
        };
        assert_eq!(chart_values(&metrics)[2], ("Profit", 20_000.0));
    }
}
