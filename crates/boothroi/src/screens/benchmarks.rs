use boothroi_core::model::{BenchmarkComparison, IndustryBenchmark};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{
    Preference, benchmark_delta, format_count, format_currency_cents, format_percent, format_roi,
};
use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, comparison_color, focused_block};

use super::Screen;

pub struct BenchmarksScreen;

/// One comparison row: label, actual, benchmark, met-benchmark flag, delta text
pub struct ComparisonLine {
    pub label: &'static str,
    pub actual: String,
    pub benchmark: String,
    pub is_better: bool,
    pub delta: String,
}

/// Turn a comparison into display rows (ROI, new customers, cost per lead)
pub fn comparison_lines(cmp: &BenchmarkComparison) -> [ComparisonLine; 3] {
    [
        ComparisonLine {
            label: "ROI",
            actual: format_roi(cmp.roi),
            benchmark: format_percent(cmp.roi_benchmark),
            is_better: cmp.roi_is_better(),
            delta: benchmark_delta(cmp.roi, cmp.roi_benchmark, Preference::HigherIsBetter),
        },
        ComparisonLine {
            label: "New Customers",
            actual: format_count(cmp.new_customers),
            benchmark: format_count(cmp.new_customers_benchmark),
            is_better: cmp.new_customers_is_better(),
            delta: benchmark_delta(
                cmp.new_customers,
                cmp.new_customers_benchmark,
                Preference::HigherIsBetter,
            ),
        },
        ComparisonLine {
            label: "Cost Per Lead",
            actual: format_currency_cents(cmp.cost_per_lead),
            benchmark: format_currency_cents(cmp.cost_per_lead_benchmark),
            is_better: cmp.cost_per_lead_is_better(),
            delta: benchmark_delta(
                cmp.cost_per_lead,
                cmp.cost_per_lead_benchmark,
                Preference::LowerIsBetter,
            ),
        },
    ]
}

impl BenchmarksScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_picker(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let selected = state.session.industry();
        let items: Vec<ListItem> = state
            .benchmarks_state
            .industries
            .iter()
            .map(|name| {
                let marker = if Some(name.as_str()) == selected {
                    "● "
                } else {
                    "  "
                };
                let style = if state.session.benchmark_table().contains(name) {
                    Style::default()
                } else {
                    Style::default().fg(HELP_COLOR)
                };
                ListItem::new(Line::from(Span::styled(format!("{marker}{name}"), style)))
            })
            .collect();

        let list = List::new(items)
            .block(focused_block(" INDUSTRY ", true))
            .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(state.benchmarks_state.selected_index));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_reference(&self, frame: &mut Frame, area: Rect, industry: &str, entry: &IndustryBenchmark) {
        let row = |label: &str, value: &str| {
            Line::from(vec![
                Span::styled(format!("  {:<18}", label), Style::default().fg(HEADER_COLOR)),
                Span::raw(value.to_string()),
            ])
        };
        let lines = vec![
            row("Average ROI", &entry.avg_roi),
            row("Conversion Rate", &entry.avg_conversion_rate),
            row("Customer LTV", &entry.avg_ltv),
            row("Cost Per Lead", &entry.avg_cost_per_lead),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} AVERAGES ", industry.to_uppercase()));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_comparison(&self, frame: &mut Frame, area: Rect, cmp: &BenchmarkComparison) {
        let mut lines = Vec::new();
        for row in comparison_lines(cmp) {
            let color = comparison_color(row.is_better);
            let arrow = if row.is_better { "↑" } else { "↓" };
            lines.push(Line::from(Span::styled(
                row.label,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::raw("  You: "),
                Span::styled(format!("{} {arrow}", row.actual), Style::default().fg(color)),
                Span::raw("   Benchmark: "),
                Span::styled(row.benchmark, Style::default().fg(Color::Gray)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", row.delta),
                Style::default().fg(color),
            )));
            lines.push(Line::from(""));
        }

        let block = Block::default().borders(Borders::ALL).title(" COMPARISON ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect, industry: Option<&str>) {
        let message = match industry {
            Some(name) => format!("No benchmark data for {name}."),
            None => "Select an industry to compare against its averages.".to_string(),
        };
        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(message)])
            .style(Style::default().fg(HELP_COLOR))
            .block(Block::default().borders(Borders::ALL).title(" COMPARISON "));
        frame.render_widget(paragraph, area);
    }
}

impl Component for BenchmarksScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => state.benchmarks_state.move_down(),
            KeyCode::Char('k') | KeyCode::Up => state.benchmarks_state.move_up(),
            KeyCode::Enter | KeyCode::Char(' ') => state.select_highlighted_industry(),
            KeyCode::Char('x') | KeyCode::Backspace => {
                state.session.clear_industry();
            }
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(area);

        self.render_picker(frame, columns[0], state);

        let industry = state.session.industry();
        match (industry, state.session.selected_benchmark(), state.session.comparison()) {
            (Some(name), Some(entry), Some(cmp)) => {
                let right = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(6), Constraint::Min(0)])
                    .split(columns[1]);
                self.render_reference(frame, right[0], name, entry);
                self.render_comparison(frame, right[1], &cmp);
            }
            _ => self.render_empty(frame, columns[1], industry),
        }
    }
}

impl Screen for BenchmarksScreen {
    fn title(&self) -> &str {
        "Benchmarks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boothroi_core::Session;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_healthcare_default_lines() {
        let mut session = Session::default();
        session.select_industry("Healthcare");
        let cmp = session.comparison().unwrap();
        let [roi, customers, cpl] = comparison_lines(&cmp);

        assert_eq!(roi.actual, "36.4%");
        assert_eq!(roi.benchmark, "220.0%");
        assert!(!roi.is_better);
        assert!(roi.delta.starts_with("⚠"));

        assert_eq!(customers.actual, "15.0");
        assert_eq!(customers.benchmark, "22.5");
        assert!(!customers.is_better);

        assert_eq!(cpl.actual, "$366.67");
        assert_eq!(cpl.benchmark, "$200.00");
        assert!(!cpl.is_better);
        assert!(cpl.delta.contains("above benchmark"));
    }

    #[test]
    fn test_keys_select_and_clear() {
        let mut state = AppState::default();
        let mut screen = BenchmarksScreen::new();

        screen.handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(state.session.industry(), Some("Technology"));

        screen.handle_key(press(KeyCode::Char('x')), &mut state);
        assert_eq!(state.session.industry(), None);
        assert!(state.session.comparison().is_none());
    }
}
