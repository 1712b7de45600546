use boothroi_core::config::{InputField, Unit};
use boothroi_core::model::CalculatedMetrics;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::components::roi_chart::render_roi_chart;
use crate::components::slider::{SliderGroup, SliderRow};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{
    format_count, format_currency, format_currency_cents, format_roi, format_whole,
};
use crate::util::styles::{HEADER_COLOR, value_style};

use super::Screen;

/// Number of investment sliders; the rest are returns
const INVESTMENT_SLIDERS: usize = 7;

/// Steps taken by the shifted adjust keys
const COARSE_STEPS: i32 = 10;

pub struct CalculatorScreen;

/// Slider readout for a field value
pub fn slider_value_text(field: InputField, value: f64) -> String {
    match field.unit() {
        Unit::Currency => format_currency(value),
        Unit::Percent => format!("{}%", format_whole(value)),
        Unit::Count => format_whole(value),
    }
}

impl CalculatorScreen {
    pub fn new() -> Self {
        Self
    }

    fn slider_rows(state: &AppState) -> Vec<SliderRow> {
        InputField::ALL
            .iter()
            .enumerate()
            .map(|(idx, &field)| {
                let value = state.session.input(field);
                SliderRow {
                    label: field.label(),
                    value_text: slider_value_text(field, value),
                    fraction: field.range().fraction(value),
                    focused: idx == state.calculator_state.focused_index,
                }
            })
            .collect()
    }

    fn render_inputs(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INVESTMENT_SLIDERS as u16 + 2),
                Constraint::Length((InputField::ALL.len() - INVESTMENT_SLIDERS) as u16 + 2),
                Constraint::Min(0),
            ])
            .split(area);

        let rows = Self::slider_rows(state);
        let (investment_rows, return_rows) = rows.split_at(INVESTMENT_SLIDERS);
        let focused = state.calculator_state.focused_index;

        SliderGroup::new(" INVESTMENT COSTS ", investment_rows)
            .color(Color::LightRed)
            .focused(focused < INVESTMENT_SLIDERS)
            .render(frame, chunks[0]);
        SliderGroup::new(" PROJECTED RETURNS ", return_rows)
            .color(Color::LightBlue)
            .focused(focused >= INVESTMENT_SLIDERS)
            .render(frame, chunks[1]);
    }

    fn render_roi(&self, frame: &mut Frame, area: Rect, metrics: &CalculatedMetrics) {
        let lines = vec![
            Line::from(Span::styled(
                "Return on Investment",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                format_roi(metrics.roi),
                value_style(metrics.roi).add_modifier(Modifier::BOLD),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" RESULTS "));
        frame.render_widget(paragraph, area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, metrics: &CalculatedMetrics) {
        let stat = |label: &str, value: String, style: Style| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {:<20}", label), Style::default().fg(HEADER_COLOR)),
                Span::styled(value, style),
            ]))
        };

        let items = vec![
            stat(
                "Total Investment",
                format_currency(metrics.total_investment),
                Style::default(),
            ),
            stat(
                "Total Lead Value",
                format_currency(metrics.total_lead_value),
                Style::default(),
            ),
            stat(
                "Net Profit",
                format_currency(metrics.net_profit),
                value_style(metrics.net_profit),
            ),
            stat(
                "New Customers",
                format_count(metrics.new_customers),
                Style::default(),
            ),
            stat(
                "Cost Per Lead",
                format_currency_cents(metrics.cost_per_lead),
                Style::default(),
            ),
        ];

        let list = List::new(items).block(Block::default().borders(Borders::ALL));
        frame.render_widget(list, area);
    }
}

impl Component for CalculatorScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => state.calculator_state.move_down(),
            KeyCode::Char('k') | KeyCode::Up => state.calculator_state.move_up(),
            KeyCode::Char('h') | KeyCode::Left => state.step_focused(-1),
            KeyCode::Char('l') | KeyCode::Right => state.step_focused(1),
            KeyCode::Char('H') => state.step_focused(-COARSE_STEPS),
            KeyCode::Char('L') => state.step_focused(COARSE_STEPS),
            KeyCode::Home => state.set_focused_to_bound(false),
            KeyCode::End => state.set_focused_to_bound(true),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(area);

        self.render_inputs(frame, columns[0], state);

        let metrics = state.session.metrics();
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // ROI
                Constraint::Length(7), // Stats
                Constraint::Min(8),    // Chart
            ])
            .split(columns[1]);

        self.render_roi(frame, right[0], &metrics);
        self.render_stats(frame, right[1], &metrics);
        render_roi_chart(frame, right[2], &metrics);
    }
}

impl Screen for CalculatorScreen {
    fn title(&self) -> &str {
        "Calculator"
    }
}
