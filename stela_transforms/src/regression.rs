// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Least-squares linear regression over a series.
//!
//! A regression marker renders the fitted line clipped to the observed x
//! extent, so the output is the fitted parameters plus the two endpoints at
//! the minimum and maximum x.

use alloc::vec::Vec;

/// A fitted regression line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegressionLine {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Fitted endpoint at the minimum observed x.
    pub start: (f64, f64),
    /// Fitted endpoint at the maximum observed x.
    pub end: (f64, f64),
}

impl RegressionLine {
    /// The fitted y for a given x.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fits a line through `(x, y)` pairs by ordinary least squares.
///
/// Non-finite pairs are skipped. Returns `None` with fewer than two finite
/// pairs or when all x values coincide (vertical data has no slope).
#[must_use]
pub fn linear_regression(points: &[(f64, f64)]) -> Option<RegressionLine> {
    let finite: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if finite.len() < 2 {
        return None;
    }

    let n = finite.len() as f64;
    let mean_x = finite.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = finite.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in &finite {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let min_x = finite.iter().map(|(x, _)| *x).reduce(f64::min)?;
    let max_x = finite.iter().map(|(x, _)| *x).reduce(f64::max)?;
    let line = RegressionLine {
        slope,
        intercept,
        start: (min_x, slope * min_x + intercept),
        end: (max_x, slope * max_x + intercept),
    };
    Some(line)
}
