// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor layout routines.
//!
//! Each routine turns resolved data positions plus derived transform output
//! into screen-space points. All of them fail closed: a position that cannot
//! be resolved, or maps to a non-finite coordinate, produces no geometry
//! instead of NaN points.

use alloc::vec::Vec;

use kurbo::Point;
use stela_core::{point_is_finite, points_are_finite};
use stela_transforms::DerivedData;

use crate::{CoordPoint, DataPos, MarkerSeries, SeriesContext};

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Resolves a non-derived axis position to a domain value.
///
/// Open-ended positions use the data extrema under auto-range (falling back
/// to the scale domain when the series has no finite data), and the scale
/// domain otherwise.
fn resolve_axis_value(
    pos: DataPos,
    ctx: &SeriesContext<'_>,
    axis: Axis,
    auto_range: bool,
) -> Option<f64> {
    let scale = match axis {
        Axis::X => &ctx.x_scale,
        Axis::Y => &ctx.y_scale,
    };
    match pos {
        DataPos::Value(v) => Some(v),
        DataPos::Min => {
            let data = match axis {
                Axis::X => ctx.x_data_min(),
                Axis::Y => ctx.y_data_min(),
            };
            Some(if auto_range {
                data.unwrap_or_else(|| scale.domain_min())
            } else {
                scale.domain_min()
            })
        }
        DataPos::Max => {
            let data = match axis {
                Axis::X => ctx.x_data_max(),
                Axis::Y => ctx.y_data_max(),
            };
            Some(if auto_range {
                data.unwrap_or_else(|| scale.domain_max())
            } else {
                scale.domain_max()
            })
        }
        DataPos::Derived => None,
    }
}

/// Lays out an x-anchored marker: one vertical line per resolved value,
/// spanning the union of the start/end regions' y extent.
///
/// Derived anchors produce one line per derived datum, in datum order.
/// Callers that want a single line take the first result.
#[must_use]
pub fn axis_x_layout(
    pos: DataPos,
    derived: &DerivedData,
    series: &MarkerSeries<'_>,
    auto_range: bool,
) -> Vec<[Point; 2]> {
    let y0 = series.start.region.y0.min(series.end.region.y0);
    let y1 = series.start.region.y1.max(series.end.region.y1);

    axis_values(pos, derived, &series.primary, Axis::X, auto_range)
        .into_iter()
        .map(|v| series.primary.x_scale.map(v))
        .map(|sx| [Point::new(sx, y0), Point::new(sx, y1)])
        .filter(|line| points_are_finite(line))
        .collect()
}

/// Lays out a y-anchored marker: one horizontal line per resolved value,
/// spanning the union of the start/end regions' x extent.
#[must_use]
pub fn axis_y_layout(
    pos: DataPos,
    derived: &DerivedData,
    series: &MarkerSeries<'_>,
    auto_range: bool,
) -> Vec<[Point; 2]> {
    let x0 = series.start.region.x0.min(series.end.region.x0);
    let x1 = series.start.region.x1.max(series.end.region.x1);

    axis_values(pos, derived, &series.primary, Axis::Y, auto_range)
        .into_iter()
        .map(|v| series.primary.y_scale.map(v))
        .map(|sy| [Point::new(x0, sy), Point::new(x1, sy)])
        .filter(|line| points_are_finite(line))
        .collect()
}

fn axis_values(
    pos: DataPos,
    derived: &DerivedData,
    primary: &SeriesContext<'_>,
    axis: Axis,
    auto_range: bool,
) -> Vec<f64> {
    match pos {
        DataPos::Derived => derived
            .iter()
            .filter_map(|d| match axis {
                Axis::X => d.x,
                Axis::Y => d.y,
            })
            .collect(),
        other => resolve_axis_value(other, primary, axis, auto_range)
            .into_iter()
            .collect(),
    }
}

/// Lays out coordinate-anchored points, one per coordinate pair.
///
/// Derived components read the derived datum at the same index (regression
/// endpoints align with their coordinate pairs). If any pair fails to
/// resolve or maps to a non-finite coordinate, the whole sequence is
/// dropped.
#[must_use]
pub fn coordinate_layout(
    points: &[CoordPoint],
    derived: &DerivedData,
    primary: &SeriesContext<'_>,
    auto_range: bool,
) -> Vec<Point> {
    let mut out = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let x = match p.x {
            DataPos::Derived => derived.get(i).and_then(|d| d.x),
            other => resolve_axis_value(other, primary, Axis::X, auto_range),
        };
        let y = match p.y {
            DataPos::Derived => derived.get(i).and_then(|d| d.y),
            other => resolve_axis_value(other, primary, Axis::Y, auto_range),
        };
        let (Some(x), Some(y)) = (x, y) else {
            return Vec::new();
        };
        let mapped = Point::new(primary.x_scale.map(x), primary.y_scale.map(y));
        if !point_is_finite(mapped) {
            return Vec::new();
        }
        out.push(mapped);
    }
    out
}

/// Pass-through layout for already-resolved screen positions.
///
/// A true identity for finite input; non-finite positions fail closed like
/// every other mode.
#[must_use]
pub fn position_layout(positions: &[Point]) -> Vec<Point> {
    if points_are_finite(positions) {
        positions.to_vec()
    } else {
        Vec::new()
    }
}
