use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(state: &AppState) -> &'static str {
        match state.active_tab {
            TabId::Calculator => {
                "1-3: tabs | j/k: select | h/l: adjust | H/L: x10 | Home/End: min/max | e: export | q: quit"
            }
            TabId::Benchmarks => {
                "1-3: tabs | j/k: industry | Enter: select | x: clear | e: export | q: quit"
            }
            TabId::Exhibitor if state.exhibitor_state.is_editing() => {
                "Enter: done | Esc: cancel | ←/→: move cursor"
            }
            TabId::Exhibitor => "1-3: tabs | j/k: field | Enter: edit | e: export | q: quit",
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else if let Some(status) = &state.status_message {
            Line::from(Span::styled(status.as_str(), Style::default().fg(Color::Green)))
        } else {
            Line::from(Span::styled(
                Self::get_help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
