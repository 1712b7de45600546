/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Calculator,
    Benchmarks,
    Exhibitor,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Calculator, TabId::Benchmarks, TabId::Exhibitor];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Calculator => "Calculator",
            TabId::Benchmarks => "Benchmarks",
            TabId::Exhibitor => "Exhibitor",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Calculator => 0,
            TabId::Benchmarks => 1,
            TabId::Exhibitor => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
