//! One-dimensional sensitivity sweep.
//!
//! Holds every input fixed except one, walks that one across its slider
//! range and records the metrics at each point. Useful for answering "how
//! many leads do we need before the show pays for itself".
//!
//! ```ignore
//! use boothroi_core::analysis::sweep;
//! use boothroi_core::config::{InputField, ReturnField};
//!
//! let result = sweep(&investment, &returns, InputField::Returns(ReturnField::LeadsGenerated), 11);
//! if let Some(point) = result.first_profitable() {
//!     println!("break-even near {} leads", point.value);
//! }
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::calculator::compute_metrics;
use crate::config::{FieldRange, InputField};
use crate::model::{CalculatedMetrics, Investment, Returns};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Value of the swept input at this point
    pub value: f64,
    pub metrics: CalculatedMetrics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub field: InputField,
    /// Ordered by ascending `value`
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    /// Lowest swept value with non-negative net profit
    #[must_use]
    pub fn first_profitable(&self) -> Option<&SweepPoint> {
        self.points.iter().find(|p| p.metrics.net_profit >= 0.0)
    }

    /// Point with the highest ROI (earliest wins ties)
    #[must_use]
    pub fn best_roi(&self) -> Option<&SweepPoint> {
        self.points.iter().fold(None, |best: Option<&SweepPoint>, p| match best {
            Some(b) if b.metrics.roi >= p.metrics.roi => Some(b),
            _ => Some(p),
        })
    }
}

/// `steps` evenly spaced values from `range.min` to `range.max` inclusive
#[must_use]
pub fn sweep_values(range: &FieldRange, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![range.min],
        n => {
            let span = range.max - range.min;
            (0..n)
                .map(|i| range.min + span * (i as f64) / ((n - 1) as f64))
                .collect()
        }
    }
}

/// Evaluate the calculator across one input's range.
///
/// With fewer than two steps the sweep degenerates to a single point at the
/// input's current value.
#[must_use]
pub fn sweep(
    investment: &Investment,
    returns: &Returns,
    field: InputField,
    steps: usize,
) -> SweepResult {
    let values = if steps < 2 {
        vec![current_value(investment, returns, field)]
    } else {
        sweep_values(&field.range(), steps)
    };

    let evaluate = |&value: &f64| {
        let (inv, ret) = apply(investment, returns, field, value);
        SweepPoint {
            value,
            metrics: compute_metrics(&inv, &ret),
        }
    };

    #[cfg(feature = "parallel")]
    let points: Vec<SweepPoint> = values.par_iter().map(evaluate).collect();

    #[cfg(not(feature = "parallel"))]
    let points: Vec<SweepPoint> = values.iter().map(evaluate).collect();

    tracing::debug!(field = field.key(), points = points.len(), "sweep evaluated");

    SweepResult { field, points }
}

fn current_value(investment: &Investment, returns: &Returns, field: InputField) -> f64 {
    match field {
        InputField::Investment(f) => investment.get(f),
        InputField::Returns(f) => returns.get(f),
    }
}

fn apply(
    investment: &Investment,
    returns: &Returns,
    field: InputField,
    value: f64,
) -> (Investment, Returns) {
    match field {
        InputField::Investment(f) => (investment.with(f, value), *returns),
        InputField::Returns(f) => (*investment, returns.with(f, value)),
    }
}
