//! Industry benchmark reference table

use rustc_hash::FxHashMap;

use crate::error::BenchmarkError;
use crate::model::IndustryBenchmark;

/// Industries offered by the selector.
///
/// Longer than the built-in table. Picking an industry without an entry
/// shows no comparison.
pub const SELECTABLE_INDUSTRIES: [&str; 12] = [
    "Technology",
    "Manufacturing",
    "Healthcare",
    "Retail",
    "Finance",
    "Education",
    "Entertainment",
    "Food Services",
    "Automotive",
    "Environmental",
    "Creative",
    "Military",
];

const BUILTIN: [(&str, [&str; 4]); 5] = [
    ("Technology", ["185%", "12%", "$8,500", "$125"]),
    ("Healthcare", ["220%", "15%", "$12,000", "$200"]),
    ("Retail", ["150%", "8%", "$3,500", "$75"]),
    ("Finance", ["195%", "11%", "$15,000", "$250"]),
    ("Education", ["165%", "10%", "$5,500", "$100"]),
];

/// Read-only map from industry name to its published averages
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    entries: FxHashMap<String, IndustryBenchmark>,
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BenchmarkTable {
    /// The reference figures shipped with the calculator
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(industry, [roi, conversion, ltv, cpl])| {
                (
                    (*industry).to_string(),
                    IndustryBenchmark::new(*roi, *conversion, *ltv, *cpl),
                )
            })
            .collect();
        Self { entries }
    }

    /// An empty table; every lookup yields no comparison
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Build a table from externally supplied entries.
    ///
    /// Every field of every entry must parse, otherwise the whole table is
    /// rejected.
    pub fn from_entries<I>(entries: I) -> Result<Self, BenchmarkError>
    where
        I: IntoIterator<Item = (String, IndustryBenchmark)>,
    {
        let mut map = FxHashMap::default();
        for (industry, benchmark) in entries {
            benchmark.parsed(&industry)?;
            map.insert(industry, benchmark);
        }
        Ok(Self { entries: map })
    }

    /// Look up an industry by exact name
    #[must_use]
    pub fn get(&self, industry: &str) -> Option<&IndustryBenchmark> {
        self.entries.get(industry)
    }

    #[must_use]
    pub fn contains(&self, industry: &str) -> bool {
        self.entries.contains_key(industry)
    }

    /// Industry names, sorted
    #[must_use]
    pub fn industries(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_five_industries() {
        let table = BenchmarkTable::builtin();
        assert_eq!(
            table.industries(),
            vec!["Education", "Finance", "Healthcare", "Retail", "Technology"]
        );
        let tech = table.get("Technology").unwrap();
        assert_eq!(tech.avg_roi, "185%");
        assert_eq!(tech.ltv(), 8_500.0);
    }

    #[test]
    fn test_builtin_entries_all_parse() {
        let table = BenchmarkTable::builtin();
        for industry in table.industries() {
            assert!(table.get(industry).unwrap().parsed(industry).is_ok());
        }
    }

    #[test]
    fn test_selectable_industries_exceed_table() {
        let table = BenchmarkTable::builtin();
        let missing: Vec<_> = SELECTABLE_INDUSTRIES
            .iter()
            .filter(|name| !table.contains(name))
            .collect();
        assert_eq!(missing.len(), 7);
        assert!(table.get("Manufacturing").is_none());
    }

    #[test]
    fn test_from_entries_rejects_malformed() {
        let result = BenchmarkTable::from_entries([
            (
                "Retail".to_string(),
                IndustryBenchmark::new("150%", "8%", "$3,500", "$75"),
            ),
            (
                "Space".to_string(),
                IndustryBenchmark::new("lots", "8%", "$3,500", "$75"),
            ),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_entries_accepts_valid() {
        let table = BenchmarkTable::from_entries([(
            "Aerospace".to_string(),
            IndustryBenchmark::new("240%", "6%", "$40,000", "$900"),
        )])
        .unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains("Aerospace"));
        assert!(!table.contains("Technology"));
    }
}
