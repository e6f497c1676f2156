// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip content model: a title block and a list of key/value rows.

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::style::TextTokens;

/// The marker drawn in a row's shape column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymbolType {
    /// A filled or hollow circle.
    #[default]
    Circle,
    /// An axis-aligned square.
    Square,
    /// A diamond (square rotated 45 degrees).
    Diamond,
    /// An upward triangle.
    Triangle,
    /// A wide rectangle.
    Rect,
}

/// Per-row shape column content.
#[derive(Clone, Debug, PartialEq)]
pub struct RowShape {
    /// Symbol to draw.
    pub symbol: SymbolType,
    /// Series color the symbol carries.
    pub fill: Color,
    /// Explicit stroke, falling back to `fill` for hollow symbols.
    pub stroke: Option<Color>,
    /// Whether the symbol is drawn as an outline.
    pub hollow: bool,
    /// Stroke width, if the symbol is stroked.
    pub line_width: Option<f64>,
    /// Size override; the shape column default applies when unset.
    pub size: Option<f64>,
}

impl RowShape {
    /// A solid symbol in the given color.
    #[must_use]
    pub fn solid(symbol: SymbolType, fill: Color) -> Self {
        Self {
            symbol,
            fill,
            stroke: None,
            hollow: false,
            line_width: None,
            size: None,
        }
    }

    /// The fill actually painted: hollow symbols paint none.
    #[must_use]
    pub fn paint_fill(&self) -> Option<Color> {
        if self.hollow { None } else { Some(self.fill) }
    }

    /// The stroke actually painted: explicit stroke, else the series fill.
    #[must_use]
    pub fn paint_stroke(&self) -> Color {
        self.stroke.unwrap_or(self.fill)
    }
}

/// One key/value row of tooltip content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowContent {
    /// Key text; rows with no key still reserve the key column.
    pub key: Option<String>,
    /// Value text.
    pub value: Option<String>,
    /// Shape column content, if the row shows one.
    pub shape: Option<RowShape>,
    /// Whether the key participates in the adaptive key width instead of
    /// the fixed key column.
    pub is_key_adaptive: bool,
    /// Spacing below this row, overriding the style's `space_row`. Unused
    /// on the last row.
    pub space_row: Option<f64>,
    /// Per-row key style overrides.
    pub key_style: TextTokens,
    /// Per-row value style overrides.
    pub value_style: TextTokens,
    /// Rows can be hidden without removing them from the content.
    pub visible: bool,
}

impl RowContent {
    /// A visible row with the given key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            visible: true,
            ..Self::default()
        }
    }

    /// Whether the row contributes to layout: visible with a key or a
    /// value. A shape alone does not keep a row alive.
    #[must_use]
    pub fn participates(&self) -> bool {
        let has_key = self.key.as_deref().is_some_and(|k| !k.is_empty());
        let has_value = self.value.as_deref().is_some_and(|v| !v.is_empty());
        self.visible && (has_key || has_value)
    }
}

/// The tooltip title block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TitleContent {
    /// Title text.
    pub text: String,
    /// Per-title style overrides.
    pub style: TextTokens,
    /// Spacing between the title and the first row, overriding the style's
    /// `space_row`.
    pub space_row: Option<f64>,
    /// Hidden titles reserve no space.
    pub visible: bool,
}

impl TitleContent {
    /// A visible title.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextTokens::default(),
            space_row: None,
            visible: true,
        }
    }
}

/// Everything a tooltip shows for one pick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipContent {
    /// Optional title block above the rows.
    pub title: Option<TitleContent>,
    /// Key/value rows in display order.
    pub rows: Vec<RowContent>,
}
