use std::io;
use std::path::PathBuf;

use boothroi_core::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::screens::{
    benchmarks::BenchmarksScreen, calculator::CalculatorScreen, exhibitor::ExhibitorScreen,
};
use crate::state::{AppState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    calculator_screen: CalculatorScreen,
    benchmarks_screen: BenchmarksScreen,
    exhibitor_screen: ExhibitorScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Session::default(), PathBuf::from("."))
    }
}

impl App {
    /// Create the app around a session; CSV exports land in `export_dir`
    pub fn new(session: Session, export_dir: PathBuf) -> Self {
        Self {
            state: AppState::new(session, export_dir),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            calculator_screen: CalculatorScreen::new(),
            benchmarks_screen: BenchmarksScreen::new(),
            exhibitor_screen: ExhibitorScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!("Calculator started");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Calculator => self.calculator_screen.render(frame, area, &self.state),
            TabId::Benchmarks => self.benchmarks_screen.render(frame, area, &self.state),
            TabId::Exhibitor => self.exhibitor_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.state.exit = true;
            return;
        }

        // An open text field takes every other key
        if self.state.exhibitor_state.is_editing() {
            self.exhibitor_screen.handle_key(key_event, &mut self.state);
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('e') if key_event.modifiers.is_empty() => {
                self.state.export_csv();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                self.state.status_message = None;
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let result = match self.state.active_tab {
            TabId::Calculator => self.calculator_screen.handle_key(key_event, &mut self.state),
            TabId::Benchmarks => self.benchmarks_screen.handle_key(key_event, &mut self.state),
            TabId::Exhibitor => self.exhibitor_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        app.handle_key_event(press(KeyCode::Char('q')));
        assert!(app.state().exit);

        let mut app = App::default();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }

    #[test]
    fn test_editing_swallows_global_keys() {
        let mut app = App::default();
        app.handle_key_event(press(KeyCode::Char('3')));
        app.handle_key_event(press(KeyCode::Enter));
        for c in "qe1".chars() {
            app.handle_key_event(press(KeyCode::Char(c)));
        }
        assert!(!app.state().exit);
        assert_eq!(app.state().active_tab, TabId::Exhibitor);
        assert_eq!(app.state().session.exhibitor().name, "qe1");

        // Ctrl+C still quits
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }

    #[test]
    fn test_export_key_writes_file() {
        let dir = tempdir().unwrap();
        let mut app = App::new(Session::default(), dir.path().to_path_buf());
        app.handle_key_event(press(KeyCode::Char('e')));

        assert!(app.state().status_message.is_some());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

        app.handle_key_event(press(KeyCode::Esc));
        assert!(app.state().status_message.is_none());
    }

    #[test]
    fn test_keys_flow_from_tab_to_screen() {
        let mut app = App::default();
        app.handle_key_event(press(KeyCode::Char('2')));
        app.handle_key_event(press(KeyCode::Char('j')));
        app.handle_key_event(press(KeyCode::Char('j')));
        app.handle_key_event(press(KeyCode::Enter));
        assert_eq!(app.state().session.industry(), Some("Healthcare"));

        app.handle_key_event(press(KeyCode::Char('1')));
        app.handle_key_event(press(KeyCode::Char('L')));
        assert_eq!(app.state().session.investment().booth_design, 35_000.0);
        let cmp = app.state().session.comparison().unwrap();
        assert_eq!(cmp.roi, app.state().session.metrics().roi);
    }
}
