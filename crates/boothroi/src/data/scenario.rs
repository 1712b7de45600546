//! Scenario file loading
//!
//! A scenario file is YAML with every section optional:
//!
//! ```yaml
//! investment:
//!   boothDesign: 30000
//!   travel: 6500
//! returns:
//!   leadsGenerated: 220
//!   conversionRate: 12
//! industry: Technology
//! exhibitor:
//!   name: Sam Rivera
//!   email: sam@example.com
//! benchmarks:
//!   Aerospace:
//!     avg_roi: "240%"
//!     avg_conversion_rate: "6%"
//!     avg_ltv: "$40,000"
//!     avg_cost_per_lead: "$900"
//! ```
//!
//! Missing fields fall back to the session defaults. A `benchmarks` section
//! replaces the built-in reference table entirely.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use boothroi_core::error::BenchmarkError;
use boothroi_core::model::{ExhibitorInfo, IndustryBenchmark, Investment, Returns};
use boothroi_core::{BenchmarkTable, Session};
use serde::{Deserialize, Serialize};

/// Error types for scenario loading
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, message: String },
    Parse(String),
    Benchmark(BenchmarkError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Failed to read {}: {}", path.display(), message)
            }
            ConfigError::Parse(msg) => write!(f, "Failed to parse scenario file: {}", msg),
            ConfigError::Benchmark(err) => write!(f, "Invalid benchmark table: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Benchmark(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BenchmarkError> for ConfigError {
    fn from(err: BenchmarkError) -> Self {
        ConfigError::Benchmark(err)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment: Option<Investment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<Returns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhibitor: Option<ExhibitorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<BTreeMap<String, IndustryBenchmark>>,
}

impl ScenarioFile {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document is a valid "all defaults" scenario
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let scenario = Self::from_yaml(&content)?;
        tracing::info!(path = %path.display(), "scenario file loaded");
        Ok(scenario)
    }

    /// Build a session from this file. `industry_override` wins over the
    /// file's `industry` section.
    pub fn into_session(self, industry_override: Option<String>) -> Result<Session, ConfigError> {
        let table = match self.benchmarks {
            Some(entries) => {
                let table = BenchmarkTable::from_entries(entries)?;
                tracing::debug!(industries = table.len(), "custom benchmark table loaded");
                table
            }
            None => BenchmarkTable::builtin(),
        };

        let mut session = Session::with_inputs(
            self.investment.unwrap_or_default(),
            self.returns.unwrap_or_default(),
            table,
        );

        if let Some(industry) = industry_override.or(self.industry) {
            session.select_industry(industry);
        }
        if let Some(exhibitor) = self.exhibitor {
            *session.exhibitor_mut() = exhibitor;
        }

        Ok(session)
    }
}

/// Resolve the session from an optional scenario file and industry flag
pub fn load_session(
    config: Option<&Path>,
    industry: Option<String>,
) -> Result<Session, ConfigError> {
    let scenario = match config {
        Some(path) => ScenarioFile::load(path)?,
        None => ScenarioFile::default(),
    };
    scenario.into_session(industry)
}
