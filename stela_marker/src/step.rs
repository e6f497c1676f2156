// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step-marker join geometry.
//!
//! A step marker connects two anchor points with an axis-aligned detour
//! instead of a straight segment: the line leaves the start point toward the
//! connect direction, crosses over, and comes back to the end point. The
//! four resulting points either form one polyline or split into three
//! explicit segments when the spec asks for multi-segment rendering.

use kurbo::{Point, Vec2};

/// Which side the crossing segment detours toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectDirection {
    /// Detour above both points (smaller y in screen space).
    Top,
    /// Detour below both points.
    Bottom,
    /// Detour left of both points.
    Left,
    /// Detour right of both points.
    Right,
}

/// Step geometry configuration on a marker spec.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSpec {
    /// Split the polyline into three explicit segments.
    pub multi_segment: bool,
    /// Pins the label onto this segment (0..3) when multi-segment.
    pub main_segment_index: Option<usize>,
    /// Detour side.
    pub connect_direction: ConnectDirection,
    /// Extra distance past the extreme point, in screen units.
    pub expand_distance: f64,
}

impl StepSpec {
    /// A single-polyline step toward `direction` with no expansion.
    #[must_use]
    pub fn new(direction: ConnectDirection) -> Self {
        Self {
            multi_segment: false,
            main_segment_index: None,
            connect_direction: direction,
            expand_distance: 0.0,
        }
    }
}

/// Computes the four-point step path between `start` and `end`.
///
/// The two inserted joints share the detour-side extreme of the endpoints,
/// pushed out by `expand`. The function is a pure mapping of its inputs, so
/// recomputation never drifts.
#[must_use]
pub fn insert_points(
    start: Point,
    end: Point,
    direction: ConnectDirection,
    expand: f64,
) -> [Point; 4] {
    match direction {
        ConnectDirection::Top => {
            let y = start.y.min(end.y) - expand;
            [start, Point::new(start.x, y), Point::new(end.x, y), end]
        }
        ConnectDirection::Bottom => {
            let y = start.y.max(end.y) + expand;
            [start, Point::new(start.x, y), Point::new(end.x, y), end]
        }
        ConnectDirection::Left => {
            let x = start.x.min(end.x) - expand;
            [start, Point::new(x, start.y), Point::new(x, end.y), end]
        }
        ConnectDirection::Right => {
            let x = start.x.max(end.x) + expand;
            [start, Point::new(x, start.y), Point::new(x, end.y), end]
        }
    }
}

/// Splits a four-point step path into its three segments.
#[must_use]
pub fn split_segments(points: [Point; 4]) -> [[Point; 2]; 3] {
    [
        [points[0], points[1]],
        [points[1], points[2]],
        [points[2], points[3]],
    ]
}

/// Label offset for a step marker anchored at the start point.
///
/// The offset lands on the midpoint of the crossing segment, which sits off
/// both joints for every direction and expansion, so the label never collides
/// with a corner of the step path.
#[must_use]
pub fn step_label_offset(
    start: Point,
    end: Point,
    direction: ConnectDirection,
    expand: f64,
) -> Vec2 {
    let [_, j1, j2, _] = insert_points(start, end, direction, expand);
    Point::new(0.5 * (j1.x + j2.x), 0.5 * (j1.y + j2.y)) - start
}

/// Where a step marker's label is anchored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelAnchor {
    /// At the start point, shifted by the given offset.
    Start {
        /// Offset from the start point (see [`step_label_offset`]).
        offset: Vec2,
    },
    /// Centered on a pinned main segment, with no offset.
    SegmentMiddle {
        /// Index of the pinned segment (0..3).
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const START: Point = Point::new(10.0, 40.0);
    const END: Point = Point::new(50.0, 20.0);

    #[test]
    fn top_detour_uses_min_y_minus_expand() {
        let pts = insert_points(START, END, ConnectDirection::Top, 5.0);
        assert_eq!(pts[0], START);
        assert_eq!(pts[1], Point::new(10.0, 15.0));
        assert_eq!(pts[2], Point::new(50.0, 15.0));
        assert_eq!(pts[3], END);
    }

    #[test]
    fn bottom_detour_uses_max_y_plus_expand() {
        let pts = insert_points(START, END, ConnectDirection::Bottom, 0.0);
        assert_eq!(pts[1], Point::new(10.0, 40.0));
        assert_eq!(pts[2], Point::new(50.0, 40.0));
    }

    #[test]
    fn horizontal_detours_mirror_the_vertical_ones() {
        let left = insert_points(START, END, ConnectDirection::Left, 2.0);
        assert_eq!(left[1], Point::new(8.0, 40.0));
        assert_eq!(left[2], Point::new(8.0, 20.0));

        let right = insert_points(START, END, ConnectDirection::Right, 2.0);
        assert_eq!(right[1], Point::new(52.0, 40.0));
        assert_eq!(right[2], Point::new(52.0, 20.0));
    }

    #[test]
    fn recompute_is_exact() {
        let a = insert_points(START, END, ConnectDirection::Top, 3.5);
        let b = insert_points(START, END, ConnectDirection::Top, 3.5);
        assert_eq!(a, b);
    }

    #[test]
    fn segments_chain_through_the_joints() {
        let pts = insert_points(START, END, ConnectDirection::Right, 0.0);
        let segs = split_segments(pts);
        assert_eq!(segs[0][1], segs[1][0]);
        assert_eq!(segs[1][1], segs[2][0]);
        assert_eq!(segs[0][0], START);
        assert_eq!(segs[2][1], END);
    }

    #[test]
    fn label_offset_lands_between_the_joints() {
        let offset = step_label_offset(START, END, ConnectDirection::Top, 5.0);
        let target = START + offset;
        // Midpoint of the crossing segment from `top_detour_uses_min_y_minus_expand`.
        assert_eq!(target, Point::new(30.0, 15.0));
    }
}
