// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker data transforms.
//!
//! This crate is the "data transform stage" feeding marker geometry:
//! - aggregation ops that reduce a series field to one or more anchor values,
//! - a least-squares linear regression producing two endpoints, and
//! - a single-slot update channel that delivers derived data to the geometry
//!   engine synchronously, with no hidden listeners.
//!
//! Transforms are pure per invocation: the same options and input snapshot
//! always produce the same derived sequence (length and field shape
//! included), which is what makes downstream geometry idempotent.

#![no_std]

extern crate alloc;

// Nothing else in this crate's dependency graph links `std`, so the float
// methods behind the `std` feature need it linked here.
#[cfg(feature = "std")]
extern crate std;

mod aggregate;
mod feed;
#[cfg(not(feature = "std"))]
mod float;
mod regression;

pub use aggregate::{AggregateOp, aggregate};
pub use feed::{FeedReceiver, FeedSender, feed};
pub use regression::{RegressionLine, linear_regression};

use alloc::vec::Vec;

/// One derived anchor datum.
///
/// Axis-anchored markers fill only the axis they anchor to; coordinate
/// markers fill both.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedDatum {
    /// Derived x value in data space, if the transform produced one.
    pub x: Option<f64>,
    /// Derived y value in data space, if the transform produced one.
    pub y: Option<f64>,
}

impl DerivedDatum {
    /// A datum carrying only an x value.
    #[must_use]
    pub fn at_x(x: f64) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }

    /// A datum carrying only a y value.
    #[must_use]
    pub fn at_y(y: f64) -> Self {
        Self {
            x: None,
            y: Some(y),
        }
    }

    /// A datum carrying both coordinates.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

/// The ordered output of the transform stage.
///
/// Length is deterministic for a given transform: 1 for single-value
/// aggregations, N for multi-point aggregations, 2 for regression endpoints.
pub type DerivedData = Vec<DerivedDatum>;
