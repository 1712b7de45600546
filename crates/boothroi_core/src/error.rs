use std::fmt;

/// Which formatted field of an industry benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkField {
    Roi,
    ConversionRate,
    Ltv,
    CostPerLead,
}

impl fmt::Display for BenchmarkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BenchmarkField::Roi => "average ROI",
            BenchmarkField::ConversionRate => "average conversion rate",
            BenchmarkField::Ltv => "average LTV",
            BenchmarkField::CostPerLead => "average cost per lead",
        };
        f.write_str(name)
    }
}

/// Errors in benchmark reference data
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkError {
    MalformedField {
        industry: String,
        field: BenchmarkField,
        value: String,
    },
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkError::MalformedField {
                industry,
                field,
                value,
            } => write!(f, "malformed {field} for industry {industry}: {value:?}"),
        }
    }
}

impl std::error::Error for BenchmarkError {}

/// Errors resolving an input field by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    UnknownField(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::UnknownField(name) => write!(f, "unknown input field {name:?}"),
        }
    }
}

impl std::error::Error for FieldError {}
