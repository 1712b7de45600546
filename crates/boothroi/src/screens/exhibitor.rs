use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::{Component, EventResult};
use crate::state::{AppState, ExhibitorField};
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR, focused_block_with_help};

use super::Screen;

/// Height of one field: bordered input plus the advisory line
const FIELD_HEIGHT: u16 = 4;

pub struct ExhibitorScreen;

/// Render a value with a block cursor at `cursor_pos` (in chars)
fn render_cursor_line(value: &str, cursor_pos: usize) -> Line<'static> {
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let chars: Vec<char> = value.chars().collect();

    let mut spans: Vec<Span> = chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == cursor_pos {
                Span::styled(c.to_string(), cursor_style)
            } else {
                Span::raw(c.to_string())
            }
        })
        .collect();

    if cursor_pos >= chars.len() {
        spans.push(Span::styled(" ", cursor_style));
    }

    Line::from(spans)
}

impl ExhibitorScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: ExhibitorField, state: &AppState) {
        let info = state.session.exhibitor();
        let focused = state.exhibitor_state.focused == field;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let help = if state.exhibitor_state.is_editing() {
            "editing"
        } else {
            "Enter to edit"
        };
        let block = focused_block_with_help(&format!(" {} ", field.label()), focused, help);

        let line = match &state.exhibitor_state.editing {
            Some((input, _)) if focused => render_cursor_line(&input.value, input.cursor_pos),
            _ => Line::from(field.value(info).to_string()),
        };
        frame.render_widget(Paragraph::new(line).block(block), rows[0]);

        if let Some(message) = field.error(info) {
            let advisory = Paragraph::new(Line::from(Span::styled(
                format!(" {message}"),
                Style::default().fg(NEGATIVE_COLOR),
            )));
            frame.render_widget(advisory, rows[1]);
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Enter => state.finish_exhibitor_edit(),
            KeyCode::Esc => state.cancel_exhibitor_edit(),
            KeyCode::Backspace => state.edit_exhibitor(|input| input.backspace()),
            KeyCode::Delete => state.edit_exhibitor(|input| input.delete()),
            KeyCode::Left => state.edit_exhibitor(|input| input.move_cursor_left()),
            KeyCode::Right => state.edit_exhibitor(|input| input.move_cursor_right()),
            KeyCode::Home => state.edit_exhibitor(|input| input.move_cursor_home()),
            KeyCode::End => state.edit_exhibitor(|input| input.move_cursor_end()),
            KeyCode::Char(c) => state.edit_exhibitor(|input| input.insert_char(c)),
            _ => {}
        }
        // Every key belongs to the input while editing
        EventResult::Handled
    }
}

impl Component for ExhibitorScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.exhibitor_state.is_editing() {
            return self.handle_editing_key(key, state);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => state.exhibitor_state.move_down(),
            KeyCode::Char('k') | KeyCode::Up => state.exhibitor_state.move_up(),
            KeyCode::Enter => state.begin_exhibitor_edit(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(ExhibitorField::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let intro = Paragraph::new(Line::from(Span::styled(
            " Contact details for follow-up. Optional; not part of the calculation or export.",
            Style::default().fg(HELP_COLOR),
        )));
        frame.render_widget(intro, chunks[0]);

        for (i, field) in ExhibitorField::ALL.iter().enumerate() {
            self.render_field(frame, chunks[i + 1], *field, state);
        }
    }
}

impl Screen for ExhibitorScreen {
    fn title(&self) -> &str {
        "Exhibitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut ExhibitorScreen, state: &mut AppState, text: &str) {
        for c in text.chars() {
            screen.handle_key(press(KeyCode::Char(c)), state);
        }
    }

    #[test]
    fn test_typing_email_shows_advisory() {
        let mut state = AppState::default();
        let mut screen = ExhibitorScreen::new();

        screen.handle_key(press(KeyCode::Char('j')), &mut state);
        screen.handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.exhibitor_state.focused, ExhibitorField::Email);

        screen.handle_key(press(KeyCode::Enter), &mut state);
        type_text(&mut screen, &mut state, "sam@example");
        assert!(state.session.exhibitor().email_error().is_some());

        type_text(&mut screen, &mut state, ".com");
        screen.handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(state.session.exhibitor().email, "sam@example.com");
        assert!(state.session.exhibitor().email_error().is_none());
    }

    #[test]
    fn test_q_is_text_while_editing() {
        let mut state = AppState::default();
        let mut screen = ExhibitorScreen::new();

        screen.handle_key(press(KeyCode::Enter), &mut state);
        let result = screen.handle_key(press(KeyCode::Char('q')), &mut state);
        assert_eq!(result, EventResult::Handled);
        assert_eq!(state.session.exhibitor().name, "q");
        assert!(!state.exit);
    }

    #[test]
    fn test_escape_restores_value() {
        let mut state = AppState::default();
        state.session.exhibitor_mut().name = "Sam".to_string();
        let mut screen = ExhibitorScreen::new();

        screen.handle_key(press(KeyCode::Enter), &mut state);
        screen.handle_key(press(KeyCode::Backspace), &mut state);
        assert_eq!(state.session.exhibitor().name, "Sa");
        screen.handle_key(press(KeyCode::Esc), &mut state);
        assert_eq!(state.session.exhibitor().name, "Sam");
    }

    #[test]
    fn test_cursor_line_marks_end() {
        let line = render_cursor_line("ab", 2);
        assert_eq!(line.spans.len(), 3);
        let line = render_cursor_line("ab", 0);
        assert_eq!(line.spans.len(), 2);
    }
}
