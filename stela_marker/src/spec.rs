// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker anchoring: raw spec fields and the resolved anchor union.
//!
//! Declarative marker specs are duck-typed: which fields are present decides
//! how the marker anchors. That resolution happens exactly once, here, at
//! spec-normalization time. The geometry engine itself only ever sees the
//! closed [`MarkerAnchor`] union, so it cannot disagree with the normalizer
//! about which mode is active.

use alloc::vec::Vec;

use kurbo::Point;
use stela_transforms::AggregateOp;

/// A position along one data axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataPos {
    /// A literal domain value.
    Value(f64),
    /// The open-ended minimum: data extrema under auto-range, otherwise the
    /// scale domain's smaller bound.
    Min,
    /// The open-ended maximum counterpart of [`DataPos::Min`].
    Max,
    /// Resolved by the data transform stage; the engine reads the derived
    /// datum for this axis.
    Derived,
}

/// One coordinate pair in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordPoint {
    /// Position along x.
    pub x: DataPos,
    /// Position along y.
    pub y: DataPos,
}

impl CoordPoint {
    /// A coordinate pair of two literal values.
    #[must_use]
    pub fn value(x: f64, y: f64) -> Self {
        Self {
            x: DataPos::Value(x),
            y: DataPos::Value(y),
        }
    }
}

/// Optional sub-resolution applied to coordinate anchoring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoordProcess {
    /// Refine the x coordinate by a secondary aggregation.
    X(AggregateOp),
    /// Refine the y coordinate by a secondary aggregation.
    Y(AggregateOp),
    /// Refine both coordinates by a joint regression.
    Xy,
}

/// The resolved anchoring strategy for one marker.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerAnchor {
    /// Anchor at an x-axis value, spanning the perpendicular extent.
    X(DataPos),
    /// Anchor at a y-axis value, spanning the perpendicular extent.
    Y(DataPos),
    /// Anchor at a sequence of data-space coordinate pairs.
    Coordinate {
        /// The coordinate pairs, in order.
        points: Vec<CoordPoint>,
        /// Joint refinement, if any. Axis refinements (`process.x` /
        /// `process.y`) resolve to [`MarkerAnchor::X`] / [`MarkerAnchor::Y`]
        /// instead and never appear here.
        process: Option<CoordProcess>,
    },
    /// Already-resolved screen coordinates, used verbatim.
    Position(Vec<Point>),
}

impl MarkerAnchor {
    /// Whether computing this anchor reads transform-stage output.
    #[must_use]
    pub fn needs_derived(&self) -> bool {
        match self {
            Self::X(pos) | Self::Y(pos) => *pos == DataPos::Derived,
            Self::Coordinate { points, process } => {
                matches!(process, Some(CoordProcess::Xy))
                    || points
                        .iter()
                        .any(|p| p.x == DataPos::Derived || p.y == DataPos::Derived)
            }
            Self::Position(_) => false,
        }
    }
}

/// Raw anchoring fields as they appear in a declarative marker spec.
///
/// This is the duck-typed surface; [`resolve_anchor`] turns it into the
/// closed union once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerFields {
    /// Literal/derived x-axis value.
    pub x: Option<DataPos>,
    /// Literal/derived y-axis value.
    pub y: Option<DataPos>,
    /// Data-space coordinate pairs.
    pub coordinates: Option<Vec<CoordPoint>>,
    /// Sub-resolution for coordinate anchoring.
    pub process: Option<CoordProcess>,
    /// Already-resolved screen positions.
    pub positions: Option<Vec<Point>>,
}

/// Resolves which anchoring mode a spec selects, first match wins.
///
/// Priority follows the spec surface: x-axis, y-axis, coordinate, explicit
/// positions. `coordinates` with an axis `process` counts as axis anchoring
/// (the coordinate is refined down to a single axis value). Returns `None`
/// when no mode matches; the marker then produces no geometry rather than
/// failing.
#[must_use]
pub fn resolve_anchor(fields: &MarkerFields) -> Option<MarkerAnchor> {
    let has_coords = fields.coordinates.is_some();

    let is_x = fields.x.is_some()
        || (has_coords && matches!(fields.process, Some(CoordProcess::X(_))));
    if is_x {
        return Some(MarkerAnchor::X(fields.x.unwrap_or(DataPos::Derived)));
    }

    let is_y = fields.y.is_some()
        || (has_coords && matches!(fields.process, Some(CoordProcess::Y(_))));
    if is_y {
        return Some(MarkerAnchor::Y(fields.y.unwrap_or(DataPos::Derived)));
    }

    if let Some(points) = &fields.coordinates {
        // Axis processes were consumed by the branches above; only the joint
        // case can still be attached here.
        let process = match fields.process {
            Some(CoordProcess::Xy) => Some(CoordProcess::Xy),
            _ => None,
        };
        return Some(MarkerAnchor::Coordinate {
            points: points.clone(),
            process,
        });
    }

    fields.positions.clone().map(MarkerAnchor::Position)
}
