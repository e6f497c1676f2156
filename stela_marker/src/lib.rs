// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker geometry for chart annotations.
//!
//! A marker is a declarative annotation (line/area/point) anchored to data,
//! categories, or coordinates and rendered above series data. This crate
//! computes the concrete screen-space geometry for one marker:
//! - anchor resolution into a closed union ([`resolve_anchor`]),
//! - layout into ordered point sequences ([`compute_anchors`]),
//! - step-join refinement and label placement,
//! - the advisory clip rectangle over the participant regions.
//!
//! Painting is downstream: the output is a plain attribute bag
//! ([`MarkerGeometry`]) with no rendering semantics attached. Everything is
//! a pure, idempotent function of its inputs; the only stateful piece is
//! [`MarkerView`], which owns the derived-data subscription and retains the
//! last geometry across partial updates.

#![no_std]

extern crate alloc;

mod engine;
mod layout;
mod scale;
mod series;
mod spec;
mod step;

pub use engine::{
    AnchorPoints, MarkerGeometry, MarkerOptions, MarkerView, clip_rect, compute_anchors,
};
pub use layout::{axis_x_layout, axis_y_layout, coordinate_layout, position_layout};
pub use scale::ScaleLinear;
pub use series::{MarkerSeries, SeriesContext};
pub use spec::{CoordPoint, CoordProcess, DataPos, MarkerAnchor, MarkerFields, resolve_anchor};
pub use step::{
    ConnectDirection, LabelAnchor, StepSpec, insert_points, split_segments, step_label_offset,
};
