use std::path::PathBuf;

use boothroi_core::Session;

use super::screen_state::{BenchmarksState, CalculatorState, ExhibitorState};
use super::tabs::TabId;
use super::text_input::TextInput;
use crate::data::export::{today, write_export};

pub struct AppState {
    pub session: Session,
    pub active_tab: TabId,

    pub calculator_state: CalculatorState,
    pub benchmarks_state: BenchmarksState,
    pub exhibitor_state: ExhibitorState,

    /// Where `e` writes the CSV
    pub export_dir: PathBuf,

    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Session::default(), PathBuf::from("."))
    }
}

impl AppState {
    pub fn new(session: Session, export_dir: PathBuf) -> Self {
        let benchmarks_state = BenchmarksState::new(session.benchmark_table(), session.industry());
        Self {
            session,
            active_tab: TabId::default(),
            calculator_state: CalculatorState::default(),
            benchmarks_state,
            exhibitor_state: ExhibitorState::default(),
            export_dir,
            error_message: None,
            status_message: None,
            exit: false,
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.status_message = None;
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_status(&mut self, message: String) {
        self.error_message = None;
        self.status_message = Some(message);
    }

    /// Move the focused slider by `steps` slider steps
    pub fn step_focused(&mut self, steps: i32) {
        let field = self.calculator_state.focused_field();
        if self.session.step_input(field, steps) {
            tracing::debug!(field = field.key(), value = self.session.input(field), "input changed");
        }
    }

    /// Jump the focused slider to its minimum or maximum
    pub fn set_focused_to_bound(&mut self, max: bool) {
        let field = self.calculator_state.focused_field();
        let range = field.range();
        self.session
            .set_input(field, if max { range.max } else { range.min });
    }

    /// Select the industry highlighted in the picker
    pub fn select_highlighted_industry(&mut self) {
        if let Some(industry) = self.benchmarks_state.highlighted().map(str::to_string) {
            self.session.select_industry(industry);
        }
    }

    /// Write the CSV export for today into the export directory
    pub fn export_csv(&mut self) {
        match write_export(&self.export_dir, &self.session, today()) {
            Ok(path) => self.set_status(format!("Exported {}", path.display())),
            Err(e) => self.set_error(format!("Export failed: {}", e)),
        }
    }

    // =========================================================================
    // Exhibitor form editing
    // =========================================================================

    pub fn begin_exhibitor_edit(&mut self) {
        let field = self.exhibitor_state.focused;
        let current = field.value(self.session.exhibitor()).to_string();
        self.exhibitor_state.editing =
            Some((TextInput::new(&current), current));
    }

    /// Apply an edit to the in-progress input and mirror it into the session
    pub fn edit_exhibitor(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let field = self.exhibitor_state.focused;
        if let Some((input, _)) = self.exhibitor_state.editing.as_mut() {
            edit(input);
            *field.value_mut(self.session.exhibitor_mut()) = input.value.clone();
        }
    }

    pub fn finish_exhibitor_edit(&mut self) {
        self.exhibitor_state.editing = None;
    }

    /// Restore the value the field had before editing started
    pub fn cancel_exhibitor_edit(&mut self) {
        let field = self.exhibitor_state.focused;
        if let Some((_, original)) = self.exhibitor_state.editing.take() {
            *field.value_mut(self.session.exhibitor_mut()) = original;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ExhibitorField;
    use boothroi_core::config::{InputField, InvestmentField, ReturnField};
    use tempfile::tempdir;

    #[test]
    fn test_step_focused_updates_metrics() {
        let mut state = AppState::default();
        // First slider is booth design, step 1000
        state.step_focused(2);
        assert_eq!(state.session.investment().booth_design, 27_000.0);
        assert_eq!(state.session.metrics().total_investment, 57_000.0);

        state.step_focused(-100);
        assert_eq!(state.session.investment().booth_design, 0.0);
    }

    #[test]
    fn test_bounds() {
        let mut state = AppState::default();
        state.calculator_state.focused_index = 8;
        assert_eq!(
            state.calculator_state.focused_field(),
            InputField::Returns(ReturnField::ConversionRate)
        );
        state.set_focused_to_bound(true);
        assert_eq!(state.session.returns().conversion_rate, 100.0);
        state.set_focused_to_bound(false);
        assert_eq!(state.session.returns().conversion_rate, 0.0);
        assert_eq!(
            state.session.input(InputField::Investment(InvestmentField::BoothDesign)),
            25_000.0
        );
    }

    #[test]
    fn test_select_highlighted_industry() {
        let mut state = AppState::default();
        state.benchmarks_state.move_down(); // Manufacturing, not in the table
        state.select_highlighted_industry();
        assert_eq!(state.session.industry(), Some("Manufacturing"));
        assert!(state.session.comparison().is_none());

        state.benchmarks_state.move_down(); // Healthcare
        state.select_highlighted_industry();
        assert!(state.session.comparison().is_some());
    }

    #[test]
    fn test_exhibitor_edit_and_cancel() {
        let mut state = AppState::default();
        state.exhibitor_state.focused = ExhibitorField::Company;

        state.begin_exhibitor_edit();
        state.edit_exhibitor(|input| input.insert_char('A'));
        state.edit_exhibitor(|input| input.insert_char('c'));
        assert_eq!(state.session.exhibitor().company, "Ac");

        state.cancel_exhibitor_edit();
        assert_eq!(state.session.exhibitor().company, "");
        assert!(!state.exhibitor_state.is_editing());

        state.begin_exhibitor_edit();
        state.edit_exhibitor(|input| input.insert_char('Z'));
        state.finish_exhibitor_edit();
        assert_eq!(state.session.exhibitor().company, "Z");
        assert_eq!(state.session.recompute_count(), 1);
    }

    #[test]
    fn test_export_sets_status() {
        let dir = tempdir().unwrap();
        let mut state = AppState::new(Session::default(), dir.path().to_path_buf());
        state.export_csv();

        assert!(state.error_message.is_none());
        let status = state.status_message.clone().unwrap();
        assert!(status.contains("roi-calculator-"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_export_failure_sets_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        // A regular file where the export directory should be
        let mut state = AppState::new(Session::default(), blocker);
        state.export_csv();

        assert!(state.error_message.unwrap().starts_with("Export failed"));
        assert!(state.status_message.is_none());
    }
}
