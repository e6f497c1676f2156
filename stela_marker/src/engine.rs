// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The marker geometry engine.
//!
//! [`compute_anchors`] turns a resolved anchor plus live derived data into a
//! concrete screen-space point sequence, optionally refined into step-join
//! geometry. [`MarkerView`] wraps the computation with the derived-data
//! subscription and the retain-last-geometry behavior hosts rely on during
//! partial updates.

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use stela_core::union_rects;
use stela_transforms::{DerivedData, FeedReceiver};

use crate::step::{LabelAnchor, StepSpec, insert_points, split_segments, step_label_offset};
use crate::{MarkerAnchor, MarkerSeries, layout};

/// An ordered sequence of anchor points in screen space.
///
/// Line-type markers produce 2 points, area/point markers N, and step joins
/// 4, hence the inline capacity.
pub type AnchorPoints = SmallVec<[Point; 4]>;

/// Per-marker computation options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarkerOptions {
    /// Resolve open-ended positions against data extrema.
    pub auto_range: bool,
    /// Request the advisory clip rectangle.
    pub clip: bool,
    /// Confine the label to the participant regions (also requests the
    /// advisory clip rectangle).
    pub confine_label: bool,
    /// Step-join refinement for line-type markers.
    pub step: Option<StepSpec>,
}

/// The computed geometry for one marker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerGeometry {
    /// Anchor points, in order. Empty when no geometry could be produced.
    pub points: AnchorPoints,
    /// The three explicit segments of a multi-segment step marker.
    pub segments: Option<[[Point; 2]; 3]>,
    /// Label placement for step markers.
    pub label: Option<LabelAnchor>,
    /// Advisory clip rectangle; the engine never drops or moves points for
    /// being outside it.
    pub clip_rect: Option<Rect>,
}

impl MarkerGeometry {
    /// Geometry with nothing to draw.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The advisory clip rectangle: the union of the participant regions.
#[must_use]
pub fn clip_rect(series: &MarkerSeries<'_>) -> Rect {
    let regions = [series.start.region, series.end.region, series.primary.region];
    // Three rects, never empty.
    union_rects(&regions).unwrap_or(Rect::ZERO)
}

/// Computes marker geometry for a resolved anchor.
///
/// Axis-anchored markers consume only the first layout line even when the
/// derived data holds several (the single-result contract); coordinate and
/// position anchors keep every point. An anchor that cannot resolve to
/// finite geometry yields [`MarkerGeometry::empty`], never an error.
#[must_use]
pub fn compute_anchors(
    anchor: &MarkerAnchor,
    series: &MarkerSeries<'_>,
    derived: &DerivedData,
    options: &MarkerOptions,
) -> MarkerGeometry {
    let mut points: AnchorPoints = match anchor {
        MarkerAnchor::X(pos) => layout::axis_x_layout(*pos, derived, series, options.auto_range)
            .into_iter()
            .next()
            .map(|line| AnchorPoints::from_slice(&line))
            .unwrap_or_default(),
        MarkerAnchor::Y(pos) => layout::axis_y_layout(*pos, derived, series, options.auto_range)
            .into_iter()
            .next()
            .map(|line| AnchorPoints::from_slice(&line))
            .unwrap_or_default(),
        MarkerAnchor::Coordinate {
            points: coords,
            process: _,
        } => layout::coordinate_layout(coords, derived, &series.primary, options.auto_range)
            .into_iter()
            .collect(),
        MarkerAnchor::Position(positions) => {
            layout::position_layout(positions).into_iter().collect()
        }
    };

    if points.is_empty() {
        return MarkerGeometry::empty();
    }

    let clip = (options.clip || options.confine_label).then(|| clip_rect(series));

    let mut segments = None;
    let mut label = None;
    if let Some(step) = options.step
        && points.len() >= 2
    {
        let (start, end) = (points[0], points[1]);
        let joins = insert_points(start, end, step.connect_direction, step.expand_distance);
        points = AnchorPoints::from_slice(&joins);
        if step.multi_segment {
            segments = Some(split_segments(joins));
        }
        label = Some(match (step.multi_segment, step.main_segment_index) {
            (true, Some(index)) => LabelAnchor::SegmentMiddle { index },
            _ => LabelAnchor::Start {
                offset: step_label_offset(start, end, step.connect_direction, step.expand_distance),
            },
        });
    }

    MarkerGeometry {
        points,
        segments,
        label,
        clip_rect: clip,
    }
}

/// Change-driven recompute wrapper around [`compute_anchors`].
///
/// The view owns the receiving end of the transform stage's update channel
/// and drains it inside [`MarkerView::refresh`], within the host's update
/// tick. When a dependency is missing (no series, or derived data that has
/// not arrived yet) the previous geometry is retained rather than cleared,
/// so a partially updated chart does not flicker.
#[derive(Debug)]
pub struct MarkerView {
    anchor: Option<MarkerAnchor>,
    options: MarkerOptions,
    feed: FeedReceiver<DerivedData>,
    derived: Option<DerivedData>,
    geometry: MarkerGeometry,
}

impl MarkerView {
    /// Creates a view for a resolved anchor (or `None` for an unresolvable
    /// spec, which always yields empty geometry).
    #[must_use]
    pub fn new(
        anchor: Option<MarkerAnchor>,
        options: MarkerOptions,
        feed: FeedReceiver<DerivedData>,
    ) -> Self {
        Self {
            anchor,
            options,
            feed,
            derived: None,
            geometry: MarkerGeometry::empty(),
        }
    }

    /// The most recently computed geometry.
    #[must_use]
    pub fn geometry(&self) -> &MarkerGeometry {
        &self.geometry
    }

    /// Drains pending derived data and recomputes geometry.
    ///
    /// Pass `None` for `series` when the relative series are currently
    /// unavailable; the last-known geometry is kept in that case.
    pub fn refresh(&mut self, series: Option<&MarkerSeries<'_>>) -> &MarkerGeometry {
        if let Some(update) = self.feed.drain() {
            self.derived = Some(update);
        }

        let Some(anchor) = &self.anchor else {
            self.geometry = MarkerGeometry::empty();
            return &self.geometry;
        };
        let Some(series) = series else {
            return &self.geometry;
        };
        if anchor.needs_derived() && self.derived.is_none() {
            return &self.geometry;
        }

        let empty = DerivedData::new();
        let derived = self.derived.as_ref().unwrap_or(&empty);
        self.geometry = compute_anchors(anchor, series, derived, &self.options);
        &self.geometry
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use stela_transforms::{DerivedDatum, feed};

    use super::*;
    use crate::step::ConnectDirection;
    use crate::{CoordPoint, DataPos, ScaleLinear, SeriesContext};

    fn ctx<'a>() -> SeriesContext<'a> {
        SeriesContext {
            region: Rect::new(0.0, 0.0, 200.0, 100.0),
            x_scale: ScaleLinear::new((0.0, 10.0), (0.0, 200.0)),
            y_scale: ScaleLinear::new((0.0, 50.0), (100.0, 0.0)),
            x_data: &[],
            y_data: &[],
        }
    }

    fn opts() -> MarkerOptions {
        MarkerOptions::default()
    }

    #[test]
    fn axis_anchor_produces_two_points() {
        let series = MarkerSeries::single(ctx());
        let g = compute_anchors(
            &MarkerAnchor::X(DataPos::Value(5.0)),
            &series,
            &Vec::new(),
            &opts(),
        );
        assert_eq!(g.points.len(), 2);
        assert!(g.segments.is_none());
    }

    #[test]
    fn axis_anchor_consumes_only_the_first_layout_line() {
        let series = MarkerSeries::single(ctx());
        let derived = vec![DerivedDatum::at_x(2.0), DerivedDatum::at_x(8.0)];
        let g = compute_anchors(&MarkerAnchor::X(DataPos::Derived), &series, &derived, &opts());
        assert_eq!(g.points.len(), 2);
        assert_eq!(g.points[0].x, 40.0);
    }

    #[test]
    fn position_round_trip_is_identity() {
        let series = MarkerSeries::single(ctx());
        let g = compute_anchors(
            &MarkerAnchor::Coordinate {
                points: vec![CoordPoint::value(0.0, 0.0), CoordPoint::value(10.0, 50.0)],
                process: None,
            },
            &series,
            &Vec::new(),
            &opts(),
        );
        assert!(!g.is_empty());

        let again = compute_anchors(
            &MarkerAnchor::Position(g.points.to_vec()),
            &series,
            &Vec::new(),
            &opts(),
        );
        assert_eq!(again.points, g.points);
    }

    #[test]
    fn unresolved_derived_anchor_is_empty_not_an_error() {
        let series = MarkerSeries::single(ctx());
        let g = compute_anchors(&MarkerAnchor::Y(DataPos::Derived), &series, &Vec::new(), &opts());
        assert!(g.is_empty());
        assert!(g.clip_rect.is_none());
    }

    #[test]
    fn clip_rect_is_the_union_of_participant_regions() {
        let mut start = ctx();
        start.region = Rect::new(0.0, 0.0, 100.0, 50.0);
        let mut end = ctx();
        end.region = Rect::new(10.0, 20.0, 90.0, 60.0);
        let mut primary = ctx();
        primary.region = Rect::new(-5.0, 0.0, 55.0, 60.0);
        let series = MarkerSeries {
            start,
            end,
            primary,
        };

        let rect = clip_rect(&series);
        assert_eq!(rect, Rect::new(-5.0, 0.0, 100.0, 60.0));
        assert_eq!(rect.width(), 105.0);
        assert_eq!(rect.height(), 60.0);

        let g = compute_anchors(
            &MarkerAnchor::X(DataPos::Value(1.0)),
            &series,
            &Vec::new(),
            &MarkerOptions {
                clip: true,
                ..MarkerOptions::default()
            },
        );
        assert_eq!(g.clip_rect, Some(rect));
    }

    #[test]
    fn step_refinement_expands_to_four_points() {
        let series = MarkerSeries::single(ctx());
        let options = MarkerOptions {
            step: Some(StepSpec {
                multi_segment: true,
                main_segment_index: Some(1),
                connect_direction: ConnectDirection::Top,
                expand_distance: 10.0,
            }),
            ..MarkerOptions::default()
        };
        let g = compute_anchors(
            &MarkerAnchor::Coordinate {
                points: vec![CoordPoint::value(1.0, 10.0), CoordPoint::value(9.0, 40.0)],
                process: None,
            },
            &series,
            &Vec::new(),
            &options,
        );
        assert_eq!(g.points.len(), 4);
        let segments = g.segments.expect("multi-segment output");
        assert_eq!(segments[0][0], g.points[0]);
        assert_eq!(segments[2][1], g.points[3]);
        assert_eq!(g.label, Some(LabelAnchor::SegmentMiddle { index: 1 }));
    }

    #[test]
    fn unpinned_step_label_anchors_at_start_with_offset() {
        let series = MarkerSeries::single(ctx());
        let options = MarkerOptions {
            step: Some(StepSpec::new(ConnectDirection::Bottom)),
            ..MarkerOptions::default()
        };
        let g = compute_anchors(
            &MarkerAnchor::Coordinate {
                points: vec![CoordPoint::value(1.0, 10.0), CoordPoint::value(9.0, 40.0)],
                process: None,
            },
            &series,
            &Vec::new(),
            &options,
        );
        assert!(matches!(g.label, Some(LabelAnchor::Start { .. })));
        assert!(g.segments.is_none());
        assert_eq!(g.points.len(), 4);
    }

    #[test]
    fn step_recompute_is_idempotent() {
        let series = MarkerSeries::single(ctx());
        let options = MarkerOptions {
            step: Some(StepSpec {
                multi_segment: false,
                main_segment_index: None,
                connect_direction: ConnectDirection::Right,
                expand_distance: 7.25,
            }),
            ..MarkerOptions::default()
        };
        let anchor = MarkerAnchor::Coordinate {
            points: vec![CoordPoint::value(2.0, 5.0), CoordPoint::value(7.0, 45.0)],
            process: None,
        };
        let a = compute_anchors(&anchor, &series, &Vec::new(), &options);
        let b = compute_anchors(&anchor, &series, &Vec::new(), &options);
        assert_eq!(a, b);
    }

    #[test]
    fn view_retains_geometry_until_derived_data_arrives() {
        let (tx, rx) = feed();
        let mut view = MarkerView::new(Some(MarkerAnchor::Y(DataPos::Derived)), opts(), rx);
        let binding = ctx();
        let series = MarkerSeries::single(binding);

        // No derived data yet: nothing to draw, nothing to retain.
        assert!(view.refresh(Some(&series)).is_empty());

        tx.publish(vec![DerivedDatum::at_y(25.0)]);
        let g = view.refresh(Some(&series)).clone();
        assert_eq!(g.points.len(), 2);

        // Series temporarily unavailable: last geometry is retained.
        assert_eq!(view.refresh(None), &g);

        // Superseding updates: only the latest pending value is seen.
        tx.publish(vec![DerivedDatum::at_y(0.0)]);
        tx.publish(vec![DerivedDatum::at_y(50.0)]);
        let g2 = view.refresh(Some(&series));
        assert_eq!(g2.points[0].y, 0.0);
    }

    #[test]
    fn view_without_anchor_always_yields_empty() {
        let (tx, rx) = feed();
        tx.publish(vec![DerivedDatum::at_y(25.0)]);
        let mut view = MarkerView::new(None, opts(), rx);
        let binding = ctx();
        let series = MarkerSeries::single(binding);
        assert!(view.refresh(Some(&series)).is_empty());
    }
}
