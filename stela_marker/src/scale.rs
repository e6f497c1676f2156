// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear domain-to-screen mapping.
//!
//! Marker anchors are expressed in data space; the relative series supplies
//! the mapping into screen space. Only the linear case lives here; richer
//! scale families belong to the charting layer that owns axes.

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a scale from a domain interval to a range interval.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate (zero-span) domain maps everything to the range start.
    #[must_use]
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (x - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    #[must_use]
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (y - r0) / (r1 - r0) * (d1 - d0)
    }

    /// The start of the configured domain (as authored).
    #[must_use]
    pub fn domain_start(&self) -> f64 {
        self.domain.0
    }

    /// The end of the configured domain (as authored).
    #[must_use]
    pub fn domain_end(&self) -> f64 {
        self.domain.1
    }

    /// The smaller domain bound.
    #[must_use]
    pub fn domain_min(&self) -> f64 {
        self.domain.0.min(self.domain.1)
    }

    /// The larger domain bound.
    #[must_use]
    pub fn domain_max(&self) -> f64 {
        self.domain.0.max(self.domain.1)
    }
}
