// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker aggregation ops.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Aggregation operation applied to a series field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    /// Count rows (including non-finite values).
    Count,
    /// Sum values (skips non-finite).
    Sum,
    /// Minimum value (skips non-finite).
    Min,
    /// Maximum value (skips non-finite).
    Max,
    /// Mean value (skips non-finite).
    Mean,
    /// Median value (skips non-finite).
    Median,
    /// Sample variance (skips non-finite; `None` below two values).
    Variance,
    /// Sample standard deviation (skips non-finite; `None` below two values).
    StdDev,
}

/// Reduces `values` with the given op.
///
/// Returns `None` when the op has no defined result (no finite values, or
/// too few for variance/stdev). `Count` is total row count and never fails.
#[must_use]
pub fn aggregate(op: AggregateOp, values: &[f64]) -> Option<f64> {
    if let AggregateOp::Count = op {
        return Some(values.len() as f64);
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }

    match op {
        AggregateOp::Count => Some(finite.len() as f64),
        AggregateOp::Sum => Some(finite.iter().sum()),
        AggregateOp::Min => finite.iter().copied().reduce(f64::min),
        AggregateOp::Max => finite.iter().copied().reduce(f64::max),
        AggregateOp::Mean => Some(mean(&finite)),
        AggregateOp::Median => Some(median(finite)),
        AggregateOp::Variance => variance(&finite),
        AggregateOp::StdDev => variance(&finite).map(|v| v.sqrt()),
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        0.5 * (values[n / 2 - 1] + values[n / 2])
    }
}

fn variance(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some(ss / (n - 1) as f64)
}
