// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip style tokens and their resolution.
//!
//! Text styling flows through three layers: theme defaults, column-level
//! tokens (title/key/value), and per-row overrides. Resolution is a plain
//! field-by-field merge where later layers win; there is no failure path,
//! only defaulting.

use peniko::Color;
use stela_core::Padding;
use stela_text::{FontFamily, FontWeight, TextStyle, WordBreak};

/// Global theme defaults the tooltip falls back to.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Default font family.
    pub font_family: FontFamily,
    /// Default font size.
    pub font_size: f64,
    /// Default text fill.
    pub text_fill: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: FontFamily::SansSerif,
            font_size: 12.0,
            text_fill: Color::BLACK,
        }
    }
}

/// Optional text style overrides, one layer of the merge chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextTokens {
    /// Text fill override.
    pub fill: Option<Color>,
    /// Font size override.
    pub font_size: Option<f64>,
    /// Font family override.
    pub font_family: Option<FontFamily>,
    /// Font weight override.
    pub font_weight: Option<FontWeight>,
    /// Line height override.
    pub line_height: Option<f64>,
    /// Spacing to the following column.
    pub spacing: Option<f64>,
    /// Whether the text may wrap.
    pub multi_line: Option<bool>,
    /// Maximum text width when wrapping.
    pub max_width: Option<f64>,
    /// Wrap behavior.
    pub word_break: Option<WordBreak>,
    /// Whether the block follows sibling content width.
    pub auto_width: Option<bool>,
}

impl TextTokens {
    /// Merges `self` over `base`: fields set here win.
    #[must_use]
    pub fn merged_over(&self, base: &Self) -> Self {
        Self {
            fill: self.fill.or(base.fill),
            font_size: self.font_size.or(base.font_size),
            font_family: self.font_family.clone().or_else(|| base.font_family.clone()),
            font_weight: self.font_weight.or(base.font_weight),
            line_height: self.line_height.or(base.line_height),
            spacing: self.spacing.or(base.spacing),
            multi_line: self.multi_line.or(base.multi_line),
            max_width: self.max_width.or(base.max_width),
            word_break: self.word_break.or(base.word_break),
            auto_width: self.auto_width.or(base.auto_width),
        }
    }

    /// Resolves the merged tokens against theme defaults.
    #[must_use]
    pub fn resolve(&self, theme: &Theme) -> CellStyle {
        CellStyle {
            fill: self.fill.unwrap_or(theme.text_fill),
            font_size: self.font_size.unwrap_or(theme.font_size),
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| theme.font_family.clone()),
            font_weight: self.font_weight.unwrap_or(FontWeight::NORMAL),
            line_height: self.line_height,
            spacing: self.spacing.unwrap_or(DEFAULT_TEXT_SPACING),
            multi_line: self.multi_line,
            max_width: self.max_width,
            word_break: self.word_break.unwrap_or(WordBreak::BreakWord),
            auto_width: self.auto_width,
        }
    }
}

/// Default spacing between a text column and the next.
pub const DEFAULT_TEXT_SPACING: f64 = 10.0;

/// A fully resolved text style for one cell.
///
/// `multi_line` and `auto_width` stay optional: their defaults depend on
/// where the cell sits (titles default-enable wrapping in auto-width mode,
/// row values default-enable auto width).
#[derive(Clone, Debug, PartialEq)]
pub struct CellStyle {
    /// Text fill.
    pub fill: Color,
    /// Font size.
    pub font_size: f64,
    /// Font family.
    pub font_family: FontFamily,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Explicit line height, if any.
    pub line_height: Option<f64>,
    /// Spacing to the following column.
    pub spacing: f64,
    /// Whether the text may wrap (unset means no).
    pub multi_line: Option<bool>,
    /// Maximum text width when wrapping.
    pub max_width: Option<f64>,
    /// Wrap behavior.
    pub word_break: WordBreak,
    /// Whether the block follows sibling content width (unset defaults
    /// per-site).
    pub auto_width: Option<bool>,
}

impl CellStyle {
    /// The measurement style for this cell.
    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            font_size: self.font_size,
            font_family: self.font_family.clone(),
            font_weight: self.font_weight,
            font_style: stela_text::FontStyle::Normal,
            line_height: self.line_height,
            max_width: self.max_width,
            multi_line: self.multi_line.unwrap_or(false),
            word_break: self.word_break,
        }
    }
}

/// Shape column defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    /// Default marker size.
    pub size: f64,
    /// Spacing between the shape column and the key column.
    pub spacing: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            size: 8.0,
            spacing: 6.0,
        }
    }
}

/// Panel border styling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderStyle {
    /// Border color.
    pub color: Option<Color>,
    /// Border width.
    pub width: f64,
    /// Corner radius (applied to all four corners).
    pub radius: Option<f64>,
}

/// Panel shadow styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    /// Shadow color.
    pub color: Color,
    /// Blur radius.
    pub blur: f64,
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
    /// Spread distance.
    pub spread: f64,
}

/// Panel styling tokens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelStyle {
    /// Inner padding.
    pub padding: Padding,
    /// Background fill.
    pub background: Option<Color>,
    /// Border, if any.
    pub border: Option<BorderStyle>,
    /// Drop shadow, if any.
    pub shadow: Option<ShadowStyle>,
}

/// Flat paint attributes for the tooltip panel, ready for a renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelAttrs {
    /// Background fill.
    pub fill: Option<Color>,
    /// Border stroke.
    pub stroke: Option<Color>,
    /// Border stroke width.
    pub line_width: f64,
    /// Per-corner radius, clockwise from top-left.
    pub corner_radius: Option<[f64; 4]>,
    /// Whether a shadow is drawn.
    pub shadow: bool,
    /// Shadow parameters when `shadow` is set.
    pub shadow_style: Option<ShadowStyle>,
}

/// Flattens panel styling into paint attributes.
#[must_use]
pub fn panel_attrs(style: &PanelStyle) -> PanelAttrs {
    let border = style.border.unwrap_or_default();
    PanelAttrs {
        fill: style.background,
        stroke: border.color,
        line_width: border.width,
        corner_radius: border.radius.map(|r| [r, r, r, r]),
        shadow: style.shadow.is_some(),
        shadow_style: style.shadow,
    }
}

/// The complete style-token surface of the tooltip layout engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipStyle {
    /// Panel styling (padding and paint).
    pub panel: PanelStyle,
    /// Column-level tokens for the title.
    pub title_label: TextTokens,
    /// Column-level tokens for row keys.
    pub key_label: TextTokens,
    /// Column-level tokens for row values.
    pub value_label: TextTokens,
    /// Shape column defaults.
    pub shape: ShapeStyle,
    /// Vertical spacing between rows (and the title block).
    pub space_row: f64,
    /// Caps the scrollable content height (`dom_height`).
    pub max_content_height: Option<f64>,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn later_layers_win_in_the_merge_chain() {
        let column = TextTokens {
            font_size: Some(11.0),
            spacing: Some(8.0),
            ..TextTokens::default()
        };
        let row = TextTokens {
            font_size: Some(14.0),
            ..TextTokens::default()
        };
        let merged = row.merged_over(&column);
        assert_eq!(merged.font_size, Some(14.0));
        assert_eq!(merged.spacing, Some(8.0));
    }

    #[test]
    fn resolution_falls_back_to_theme() {
        let theme = Theme {
            font_size: 16.0,
            ..Theme::default()
        };
        let style = TextTokens::default().resolve(&theme);
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.fill, theme.text_fill);
        assert_eq!(style.spacing, DEFAULT_TEXT_SPACING);
        assert_eq!(style.auto_width, None);
    }

    #[test]
    fn panel_attrs_flatten_border_and_shadow() {
        let style = PanelStyle {
            padding: Padding::uniform(10.0),
            background: Some(Color::WHITE),
            border: Some(BorderStyle {
                color: Some(Color::BLACK),
                width: 1.0,
                radius: Some(3.0),
            }),
            shadow: Some(ShadowStyle {
                color: Color::BLACK,
                blur: 4.0,
                x: 0.0,
                y: 2.0,
                spread: 0.0,
            }),
        };
        let attrs = panel_attrs(&style);
        assert_eq!(attrs.fill, Some(Color::WHITE));
        assert_eq!(attrs.line_width, 1.0);
        assert_eq!(attrs.corner_radius, Some([3.0; 4]));
        assert!(attrs.shadow);
    }

    #[test]
    fn borderless_panel_strokes_nothing() {
        let attrs = panel_attrs(&PanelStyle::default());
        assert_eq!(attrs.stroke, None);
        assert_eq!(attrs.line_width, 0.0);
        assert!(!attrs.shadow);
    }
}
