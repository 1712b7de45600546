use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        // Digits are text while an exhibitor field is being edited
        if state.exhibitor_state.is_editing() {
            return EventResult::NotHandled;
        }

        let tab = match key.code {
            KeyCode::Char(c @ '1'..='3') => TabId::from_index(c as usize - '1' as usize),
            KeyCode::Tab => TabId::from_index((state.active_tab.index() + 1) % TabId::ALL.len()),
            KeyCode::BackTab => TabId::from_index(
                (state.active_tab.index() + TabId::ALL.len() - 1) % TabId::ALL.len(),
            ),
            _ => None,
        };

        match tab {
            Some(tab) => {
                state.switch_tab(tab);
                EventResult::Handled
            }
            None => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = TabId::ALL
            .iter()
            .enumerate()
            .map(|(idx, tab)| {
                let content = format!("[{}] {}", idx + 1, tab.name());

                if *tab == state.active_tab {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title(" Trade Show ROI Calculator "),
            )
            .select(state.active_tab.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
