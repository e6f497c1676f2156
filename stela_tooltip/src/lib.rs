// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip box layout for chart annotations.
//!
//! This crate turns tooltip *content* (a title plus key/value rows, each
//! optionally carrying a series shape) and *style tokens* into a fully sized
//! box tree:
//! - per-cell measured text with resolved styles,
//! - aligned key/value column widths (with an adaptive-key escape hatch),
//! - panel width, height, and a scroll-clamped DOM height, and
//! - flat panel paint attributes.
//!
//! It does not position the tooltip on screen or draw anything; a renderer
//! or DOM backend consumes [`TooltipLayout`]. Text measurement comes from
//! `stela_text`, so native and web backends plug in the same way.

#![no_std]

extern crate alloc;

mod content;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod style;

pub use content::{RowContent, RowShape, SymbolType, TitleContent, TooltipContent};
pub use layout::{
    CellBox, ColumnWidths, RowBox, ShapeBox, TitleBox, TooltipLayout, layout_tooltip,
};
pub use style::{
    BorderStyle, CellStyle, DEFAULT_TEXT_SPACING, PanelAttrs, PanelStyle, ShadowStyle, ShapeStyle,
    TextTokens, Theme, TooltipStyle, panel_attrs,
};
