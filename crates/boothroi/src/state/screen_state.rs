/// Per-screen state structs.

use boothroi_core::config::{BenchmarkTable, InputField, SELECTABLE_INDUSTRIES};
use boothroi_core::model::ExhibitorInfo;

use super::text_input::TextInput;

/// Slider focus on the calculator screen
#[derive(Debug, Default)]
pub struct CalculatorState {
    pub focused_index: usize,
}

impl CalculatorState {
    pub fn focused_field(&self) -> InputField {
        InputField::ALL[self.focused_index.min(InputField::ALL.len() - 1)]
    }

    pub fn move_up(&mut self) {
        self.focused_index = self.focused_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.focused_index = (self.focused_index + 1).min(InputField::ALL.len() - 1);
    }
}

/// Industry picker on the benchmarks screen
#[derive(Debug)]
pub struct BenchmarksState {
    /// Picker entries: the standard list followed by any extra industries
    /// from the loaded table
    pub industries: Vec<String>,
    pub selected_index: usize,
}

impl BenchmarksState {
    pub fn new(table: &BenchmarkTable, current: Option<&str>) -> Self {
        let mut industries: Vec<String> =
            SELECTABLE_INDUSTRIES.iter().map(|s| s.to_string()).collect();
        for name in table.industries() {
            if !industries.iter().any(|i| i == name) {
                industries.push(name.to_string());
            }
        }

        let selected_index = current
            .and_then(|name| industries.iter().position(|i| i == name))
            .unwrap_or(0);

        Self {
            industries,
            selected_index,
        }
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.industries.get(self.selected_index).map(String::as_str)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.industries.len() {
            self.selected_index += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhibitorField {
    #[default]
    Name,
    Company,
    Email,
    Phone,
}

impl ExhibitorField {
    pub const ALL: [ExhibitorField; 4] = [
        ExhibitorField::Name,
        ExhibitorField::Company,
        ExhibitorField::Email,
        ExhibitorField::Phone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExhibitorField::Name => "Name",
            ExhibitorField::Company => "Company",
            ExhibitorField::Email => "Email",
            ExhibitorField::Phone => "Phone",
        }
    }

    pub fn value<'a>(&self, info: &'a ExhibitorInfo) -> &'a str {
        match self {
            ExhibitorField::Name => &info.name,
            ExhibitorField::Company => &info.company,
            ExhibitorField::Email => &info.email,
            ExhibitorField::Phone => &info.phone,
        }
    }

    pub fn value_mut<'a>(&self, info: &'a mut ExhibitorInfo) -> &'a mut String {
        match self {
            ExhibitorField::Name => &mut info.name,
            ExhibitorField::Company => &mut info.company,
            ExhibitorField::Email => &mut info.email,
            ExhibitorField::Phone => &mut info.phone,
        }
    }

    /// Advisory message for this field; only email and phone are checked
    pub fn error(&self, info: &ExhibitorInfo) -> Option<&'static str> {
        match self {
            ExhibitorField::Email => info.email_error(),
            ExhibitorField::Phone => info.phone_error(),
            ExhibitorField::Name | ExhibitorField::Company => None,
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Exhibitor form focus and in-progress edit
#[derive(Debug, Default)]
pub struct ExhibitorState {
    pub focused: ExhibitorField,
    /// Present while a field is being edited, along with its value before
    /// editing started
    pub editing: Option<(TextInput, String)>,
}

impl ExhibitorState {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn move_up(&mut self) {
        let idx = self.focused.index().saturating_sub(1);
        self.focused = ExhibitorField::ALL[idx];
    }

    pub fn move_down(&mut self) {
        let idx = (self.focused.index() + 1).min(ExhibitorField::ALL.len() - 1);
        self.focused = ExhibitorField::ALL[idx];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_focus_is_bounded() {
        let mut state = CalculatorState::default();
        state.move_up();
        assert_eq!(state.focused_index, 0);
        for _ in 0..20 {
            state.move_down();
        }
        assert_eq!(state.focused_index, InputField::ALL.len() - 1);
        assert_eq!(state.focused_field(), InputField::ALL[9]);
    }

    #[test]
    fn test_picker_includes_extra_table_industries() {
        let table = BenchmarkTable::from_entries([(
            "Aerospace".to_string(),
            boothroi_core::model::IndustryBenchmark::new("240%", "6%", "$40,000", "$900"),
        )])
        .unwrap();
        let state = BenchmarksState::new(&table, Some("Aerospace"));
        assert_eq!(state.industries.len(), SELECTABLE_INDUSTRIES.len() + 1);
        assert_eq!(state.highlighted(), Some("Aerospace"));
    }

    #[test]
    fn test_picker_starts_on_current_industry() {
        let state = BenchmarksState::new(&BenchmarkTable::builtin(), Some("Retail"));
        assert_eq!(state.highlighted(), Some("Retail"));
        assert_eq!(state.industries.len(), SELECTABLE_INDUSTRIES.len());

        let state = BenchmarksState::new(&BenchmarkTable::builtin(), None);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_exhibitor_field_access() {
        let mut info = ExhibitorInfo::default();
        ExhibitorField::Email.value_mut(&mut info).push_str("bad");
        assert_eq!(ExhibitorField::Email.value(&info), "bad");
        assert!(ExhibitorField::Email.error(&info).is_some());
        assert!(ExhibitorField::Name.error(&info).is_none());
    }
}
