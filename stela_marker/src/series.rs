// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borrowed views of the relative series a marker anchors to.

use kurbo::Rect;

use crate::ScaleLinear;

/// A marker's view of one relative chart series.
///
/// The series owns its data and coordinate space; the marker engine only
/// borrows both and never mutates them. Scales are expected to map domain
/// values directly into absolute screen coordinates (region offsets already
/// applied).
#[derive(Clone, Copy, Debug)]
pub struct SeriesContext<'a> {
    /// The series' screen-space region rectangle.
    pub region: Rect,
    /// Domain-to-screen mapping along x.
    pub x_scale: ScaleLinear,
    /// Domain-to-screen mapping along y.
    pub y_scale: ScaleLinear,
    /// View data values along x, in row order.
    pub x_data: &'a [f64],
    /// View data values along y, in row order.
    pub y_data: &'a [f64],
}

impl SeriesContext<'_> {
    /// Minimum finite x value in the view data.
    #[must_use]
    pub fn x_data_min(&self) -> Option<f64> {
        finite_min(self.x_data)
    }

    /// Maximum finite x value in the view data.
    #[must_use]
    pub fn x_data_max(&self) -> Option<f64> {
        finite_max(self.x_data)
    }

    /// Minimum finite y value in the view data.
    #[must_use]
    pub fn y_data_min(&self) -> Option<f64> {
        finite_min(self.y_data)
    }

    /// Maximum finite y value in the view data.
    #[must_use]
    pub fn y_data_max(&self) -> Option<f64> {
        finite_max(self.y_data)
    }
}

/// The participant series of one marker.
///
/// Mirrors how markers relate to series: a start series, an end series, and
/// the primary relative series that supplies the coordinate space. They are
/// frequently all the same series.
#[derive(Clone, Copy, Debug)]
pub struct MarkerSeries<'a> {
    /// Series anchoring the marker's start.
    pub start: SeriesContext<'a>,
    /// Series anchoring the marker's end.
    pub end: SeriesContext<'a>,
    /// Primary relative series (coordinate space and view data).
    pub primary: SeriesContext<'a>,
}

impl<'a> MarkerSeries<'a> {
    /// Uses one series for all three participant roles.
    #[must_use]
    pub fn single(series: SeriesContext<'a>) -> Self {
        Self {
            start: series,
            end: series,
            primary: series,
        }
    }
}

fn finite_min(values: &[f64]) -> Option<f64> {
    values.iter().copied().filter(|v| v.is_finite()).reduce(f64::min)
}

fn finite_max(values: &[f64]) -> Option<f64> {
    values.iter().copied().filter(|v| v.is_finite()).reduce(f64::max)
}
