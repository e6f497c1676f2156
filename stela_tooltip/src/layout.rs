// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip box-layout pass.
//!
//! Layout runs in two passes over the filtered rows:
//!
//! 1. A measurement fold: every key, value, and shape cell is measured,
//!    producing per-row boxes, the total content height, and an immutable
//!    [`ColumnWidths`] record of the column maxima.
//! 2. A width-resolution pass: once the panel width is known (it also
//!    depends on the title), value cells in the default auto-width mode are
//!    assigned the remaining column width.
//!
//! Nothing here positions the panel on screen; the output is a sized box
//! tree a renderer or DOM backend can place.

use alloc::vec::Vec;

use peniko::Color;
use stela_core::Padding;
use stela_text::{MeasuredText, TextMeasurer};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::content::{RowContent, SymbolType, TooltipContent};
use crate::style::{CellStyle, PanelAttrs, Theme, TooltipStyle, panel_attrs};

/// A measured text cell, carrying the style the renderer should draw it
/// with.
#[derive(Clone, Debug, PartialEq)]
pub struct CellBox {
    /// Measured, possibly wrapped, text.
    pub text: MeasuredText,
    /// Fully resolved style for the cell.
    pub style: CellStyle,
    /// Laid-out width. For auto-width values this is the column width, not
    /// the natural text width.
    pub width: f64,
    /// Laid-out height.
    pub height: f64,
}

/// A laid-out shape cell with its paint resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeBox {
    /// Symbol to draw.
    pub symbol: SymbolType,
    /// Fill, absent for hollow symbols.
    pub fill: Option<Color>,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width, if any.
    pub line_width: Option<f64>,
    /// Symbol size (width and height).
    pub size: f64,
}

/// One laid-out content row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowBox {
    /// Key cell, if the row has a key.
    pub key: Option<CellBox>,
    /// Value cell, if the row has a value.
    pub value: Option<CellBox>,
    /// Shape cell, if the row shows one.
    pub shape: Option<ShapeBox>,
    /// Row height, the maximum of its cells.
    pub height: f64,
    /// Spacing below this row (unused on the last row).
    pub space_row: f64,
}

/// The laid-out title block.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleBox {
    /// Measured title text.
    pub text: MeasuredText,
    /// Fully resolved title style.
    pub style: CellStyle,
    /// Laid-out width; clamped to the content width in auto-width mode.
    pub width: f64,
    /// Laid-out height.
    pub height: f64,
    /// Spacing between the title and the first row.
    pub space_row: f64,
    /// Whether the title followed the content width.
    pub auto_width: bool,
}

/// Column width maxima gathered by the measurement fold.
///
/// The record is immutable once the fold completes: the width-resolution
/// pass reads it but never writes back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColumnWidths {
    /// Widest fixed key.
    pub key: f64,
    /// Widest adaptive key. Adaptive keys span the key and value columns
    /// instead of aligning to the fixed key column.
    pub adaptive_key: f64,
    /// Widest value at its natural width.
    pub value: f64,
    /// Shape column width including its trailing spacing, `0` when no row
    /// has a shape.
    pub shape: f64,
}

impl ColumnWidths {
    /// The content width requirement: the larger of the aligned
    /// shape/key/value track and the shape/adaptive-key track.
    #[must_use]
    pub fn content_max_width(&self, key_spacing: f64, value_spacing: f64) -> f64 {
        let aligned = self.shape + self.key + key_spacing + self.value + value_spacing;
        let adaptive = self.shape + self.adaptive_key;
        aligned.max(adaptive)
    }
}

/// The complete output of the layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLayout {
    /// Panel paint attributes.
    pub panel: PanelAttrs,
    /// Panel inner padding.
    pub padding: Padding,
    /// Panel outer width.
    pub width: f64,
    /// Panel outer height, with content unclamped.
    pub height: f64,
    /// Panel outer height for scrollable backends: content height is
    /// clamped to `max_content_height`.
    pub dom_height: f64,
    /// Laid-out title, if visible.
    pub title: Option<TitleBox>,
    /// Laid-out rows in display order.
    pub rows: Vec<RowBox>,
    /// Column maxima from the measurement fold.
    pub widths: ColumnWidths,
    /// Final value column width after auto-width resolution.
    pub value_width: f64,
    /// Whether any row shows a shape.
    pub has_shape: bool,
}

/// Output of the measurement fold over the filtered rows.
struct RowsMeasurement {
    rows: Vec<RowBox>,
    widths: ColumnWidths,
    content_height: f64,
}

/// Lays out `content` under `style` and `theme`, measuring text through
/// `measurer`.
pub fn layout_tooltip(
    content: &TooltipContent,
    style: &TooltipStyle,
    theme: &Theme,
    measurer: &impl TextMeasurer,
) -> TooltipLayout {
    let key_column = style.key_label.resolve(theme);
    let value_column = style.value_label.resolve(theme);

    let measured = measure_rows(content, style, theme, measurer);
    let has_content = !measured.rows.is_empty();
    let content_max_width = if has_content {
        measured
            .widths
            .content_max_width(key_column.spacing, value_column.spacing)
    } else {
        0.0
    };

    let title = content
        .title
        .as_ref()
        .filter(|t| t.visible)
        .map(|t| {
            let mut resolved = t.style.merged_over(&style.title_label).resolve(theme);
            let auto_width = resolved.auto_width == Some(true) && resolved.multi_line != Some(false);
            if auto_width {
                resolved.multi_line = Some(resolved.multi_line.unwrap_or(true));
                if resolved.max_width.is_none() && has_content {
                    resolved.max_width = Some(content_max_width.ceil());
                }
            }
            let text = measurer.measure(&t.text, &resolved.text_style());
            let width = if auto_width {
                text.width.min(resolved.max_width.unwrap_or(f64::INFINITY))
            } else {
                text.width
            };
            let height = text.height;
            TitleBox {
                text,
                style: resolved,
                width,
                height,
                space_row: t.space_row.unwrap_or(style.space_row),
                auto_width,
            }
        });

    let title_height_with_space = title.as_ref().map_or(0.0, |t| {
        t.height + if has_content { t.space_row } else { 0.0 }
    });
    let title_width = title.as_ref().map_or(0.0, |t| t.width);
    let auto_width_mode = title.as_ref().is_some_and(|t| t.auto_width);

    let padding = style.panel.padding;
    let mut width = padding.horizontal();
    if auto_width_mode {
        // The panel follows the content; a title-only tooltip falls back
        // to the title's own width.
        width += if content_max_width > 0.0 {
            content_max_width
        } else {
            title_width
        };
    } else {
        width += title_width.max(content_max_width);
    }

    let height = padding.vertical() + measured.content_height + title_height_with_space;
    let clamped_content_height = measured
        .content_height
        .min(style.max_content_height.unwrap_or(f64::INFINITY));
    let dom_height = padding.vertical() + clamped_content_height + title_height_with_space;

    // Width-resolution pass: values default to auto width and take the
    // rest of the panel after the shape and the aligned key column.
    let column_width = width
        - padding.horizontal()
        - measured.widths.shape
        - measured.widths.key
        - key_column.spacing
        - value_column.spacing;
    let mut value_width = measured.widths.value;
    let rows: Vec<RowBox> = measured
        .rows
        .into_iter()
        .map(|mut row| {
            if let Some(value) = row.value.as_mut()
                && value.style.auto_width.unwrap_or(true)
            {
                value.width = column_width;
                if value.style.max_width.is_none() {
                    value.style.max_width = Some(column_width.ceil());
                }
                value_width = value_width.max(column_width);
            }
            row
        })
        .collect();

    let has_shape = rows.iter().any(|r| r.shape.is_some());
    TooltipLayout {
        panel: panel_attrs(&style.panel),
        padding,
        width,
        height,
        dom_height,
        title,
        rows,
        widths: measured.widths,
        value_width,
        has_shape,
    }
}

/// Measures every participating row, folding up column maxima and the
/// total content height.
fn measure_rows(
    content: &TooltipContent,
    style: &TooltipStyle,
    theme: &Theme,
    measurer: &impl TextMeasurer,
) -> RowsMeasurement {
    let rows: Vec<&RowContent> = content.rows.iter().filter(|r| r.participates()).collect();
    let count = rows.len();

    let mut widths = ColumnWidths::default();
    let mut max_shape = 0.0_f64;
    let mut any_shape = false;
    let mut content_height = 0.0;
    let mut boxes = Vec::with_capacity(count);

    for (i, row) in rows.iter().enumerate() {
        let mut height = 0.0_f64;

        let key = row
            .key
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(|k| {
                let cell_style = row.key_style.merged_over(&style.key_label).resolve(theme);
                let text = measurer.measure(k, &cell_style.text_style());
                if row.is_key_adaptive {
                    widths.adaptive_key = widths.adaptive_key.max(text.width);
                } else {
                    widths.key = widths.key.max(text.width);
                }
                height = height.max(text.height);
                let (width, cell_height) = (text.width, text.height);
                CellBox {
                    text,
                    style: cell_style,
                    width,
                    height: cell_height,
                }
            });

        let value = row
            .value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|v| {
                let cell_style = row.value_style.merged_over(&style.value_label).resolve(theme);
                let text = measurer.measure(v, &cell_style.text_style());
                widths.value = widths.value.max(text.width);
                height = height.max(text.height);
                let (width, cell_height) = (text.width, text.height);
                CellBox {
                    text,
                    style: cell_style,
                    width,
                    height: cell_height,
                }
            });

        let shape = row.shape.as_ref().map(|s| {
            let size = s.size.unwrap_or(style.shape.size);
            any_shape = true;
            max_shape = max_shape.max(size);
            height = height.max(size);
            ShapeBox {
                symbol: s.symbol,
                fill: s.paint_fill(),
                stroke: s.paint_stroke(),
                line_width: s.line_width,
                size,
            }
        });

        let space_row = row.space_row.unwrap_or(style.space_row);
        content_height += height;
        if i + 1 < count {
            content_height += space_row;
        }

        boxes.push(RowBox {
            key,
            value,
            shape,
            height,
            space_row,
        });
    }

    if any_shape {
        widths.shape = max_shape + style.shape.spacing;
    }

    RowsMeasurement {
        rows: boxes,
        widths,
        content_height,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use stela_text::HeuristicTextMeasurer;

    use super::*;
    use crate::content::{RowShape, TitleContent};
    use crate::style::TextTokens;

    // The heuristic measurer is 0.6 em per glyph; at font size 10 every
    // glyph is 6 px wide and every line 10 px tall.
    fn test_theme() -> Theme {
        Theme {
            font_size: 10.0,
            ..Theme::default()
        }
    }

    fn test_style() -> TooltipStyle {
        TooltipStyle {
            panel: crate::style::PanelStyle {
                padding: Padding::uniform(10.0),
                ..crate::style::PanelStyle::default()
            },
            space_row: 4.0,
            ..TooltipStyle::default()
        }
    }

    fn rows_content(rows: Vec<RowContent>) -> TooltipContent {
        TooltipContent { title: None, rows }
    }

    #[test]
    fn fixed_key_column_takes_the_widest_key() {
        let content = rows_content(vec![
            RowContent::new("B", "1"),
            RowContent::new("BB", "22"),
        ]);
        let layout = layout_tooltip(&content, &test_style(), &test_theme(), &HeuristicTextMeasurer);
        let key_style = layout.rows[1].key.as_ref().unwrap().style.text_style();
        let bb = HeuristicTextMeasurer.measure("BB", &key_style);
        assert_eq!(layout.widths.key, bb.width);
        assert_eq!(layout.widths.key, 12.0);
    }

    #[test]
    fn panel_height_stacks_rows_spacing_and_padding() {
        let content = rows_content(vec![
            RowContent::new("a", "1"),
            RowContent::new("b", "2"),
        ]);
        let layout = layout_tooltip(&content, &test_style(), &test_theme(), &HeuristicTextMeasurer);
        // Two 10 px rows, 4 px between them, 10 px padding on both sides.
        assert_eq!(layout.height, 10.0 + 4.0 + 10.0 + 20.0);
        assert_eq!(layout.dom_height, layout.height);
    }

    #[test]
    fn hidden_and_empty_rows_are_skipped() {
        let mut hidden = RowContent::new("x", "y");
        hidden.visible = false;
        let empty = RowContent {
            visible: true,
            ..RowContent::default()
        };
        let content = rows_content(vec![RowContent::new("a", "1"), hidden, empty]);
        let layout = layout_tooltip(&content, &test_style(), &test_theme(), &HeuristicTextMeasurer);
        assert_eq!(layout.rows.len(), 1);
    }

    #[test]
    fn empty_content_still_reserves_padding() {
        let layout = layout_tooltip(
            &TooltipContent::default(),
            &test_style(),
            &test_theme(),
            &HeuristicTextMeasurer,
        );
        assert_eq!(layout.width, 20.0);
        assert_eq!(layout.height, 20.0);
        assert_eq!(layout.dom_height, 20.0);
        assert!(layout.rows.is_empty());
        assert!(layout.title.is_none());
    }

    #[test]
    fn auto_width_title_never_exceeds_the_content_width() {
        let mut title = TitleContent::new("a rather long tooltip title");
        title.style = TextTokens {
            auto_width: Some(true),
            ..TextTokens::default()
        };
        let content = TooltipContent {
            title: Some(title),
            rows: vec![RowContent::new("k", "v")],
        };
        let layout = layout_tooltip(&content, &test_style(), &test_theme(), &HeuristicTextMeasurer);
        // shape 0 + key 6 + 10 + value 6 + 10
        let content_width = layout.widths.content_max_width(10.0, 10.0);
        assert_eq!(content_width, 32.0);
        let title = layout.title.as_ref().unwrap();
        assert!(title.auto_width);
        assert!(title.width <= content_width.ceil());
        // Wrapping was forced on, so the long title broke into lines.
        assert!(title.text.lines.len() > 1);
        assert_eq!(layout.width, content_width + 20.0);
    }

    #[test]
    fn fixed_width_title_widens_the_panel() {
        let content = TooltipContent {
            title: Some(TitleContent::new("TTTTTTTT")),
            rows: vec![RowContent::new("A", "1")],
        };
        let style = test_style();
        let layout = layout_tooltip(&content, &style, &test_theme(), &HeuristicTextMeasurer);
        // Title is 8 glyphs = 48 px, wider than the 32 px content track.
        assert_eq!(layout.width, 48.0 + 20.0);
        // Title stacks above the rows with its row spacing.
        assert_eq!(layout.height, 20.0 + 10.0 + 4.0 + 10.0);
    }

    #[test]
    fn auto_width_values_take_the_remaining_column() {
        let content = TooltipContent {
            title: Some(TitleContent::new("TTTTTTTT")),
            rows: vec![RowContent::new("A", "1")],
        };
        let layout = layout_tooltip(&content, &test_style(), &test_theme(), &HeuristicTextMeasurer);
        let expected = layout.width - 20.0 - layout.widths.shape - layout.widths.key - 10.0 - 10.0;
        let value = layout.rows[0].value.as_ref().unwrap();
        assert_eq!(value.width, expected);
        assert_eq!(value.style.max_width, Some(expected.ceil()));
        assert_eq!(layout.value_width, expected);
        // The natural width stays in the fold record.
        assert_eq!(layout.widths.value, 6.0);
    }

    #[test]
    fn opting_out_of_auto_width_keeps_the_natural_value_width() {
        let mut row = RowContent::new("A", "1");
        row.value_style = TextTokens {
            auto_width: Some(false),
            ..TextTokens::default()
        };
        let content = rows_content(vec![row]);
        let layout = layout_tooltip(&content, &test_style(), &test_theme(), &HeuristicTextMeasurer);
        let value = layout.rows[0].value.as_ref().unwrap();
        assert_eq!(value.width, 6.0);
        assert_eq!(layout.value_width, 6.0);
    }

    #[test]
    fn adaptive_keys_size_their_own_track() {
        let mut adaptive = RowContent::new("AAAAAAAAAA", "");
        adaptive.is_key_adaptive = true;
        let content = rows_content(vec![RowContent::new("B", "1"), adaptive]);
        let layout = layout_tooltip(&content, &test_style(), &test_theme(), &HeuristicTextMeasurer);
        assert_eq!(layout.widths.key, 6.0);
        assert_eq!(layout.widths.adaptive_key, 60.0);
        // The adaptive track (60) wins over the aligned track (32).
        assert_eq!(layout.width, 60.0 + 20.0);
    }

    #[test]
    fn shape_column_reserves_size_plus_spacing() {
        let mut row = RowContent::new("k", "v");
        row.shape = Some(RowShape::solid(SymbolType::Circle, Color::BLACK));
        let content = rows_content(vec![row]);
        let layout = layout_tooltip(&content, &test_style(), &test_theme(), &HeuristicTextMeasurer);
        assert!(layout.has_shape);
        // Default shape size 8 plus default shape spacing 6.
        assert_eq!(layout.widths.shape, 14.0);
        // The 10 px text is taller than the 8 px shape.
        assert_eq!(layout.rows[0].height, 10.0);
    }

    #[test]
    fn dom_height_clamps_scrollable_content() {
        let mut style = test_style();
        style.space_row = 0.0;
        style.max_content_height = Some(15.0);
        let content = rows_content(vec![
            RowContent::new("a", "1"),
            RowContent::new("b", "2"),
        ]);
        let layout = layout_tooltip(&content, &style, &test_theme(), &HeuristicTextMeasurer);
        assert_eq!(layout.height, 20.0 + 20.0);
        assert_eq!(layout.dom_height, 20.0 + 15.0);
    }

    #[test]
    fn per_row_spacing_overrides_the_common_spacing() {
        let mut spaced = RowContent::new("a", "1");
        spaced.space_row = Some(12.0);
        let content = rows_content(vec![spaced, RowContent::new("b", "2")]);
        let layout = layout_tooltip(&content, &test_style(), &test_theme(), &HeuristicTextMeasurer);
        assert_eq!(layout.height, 20.0 + 10.0 + 12.0 + 10.0);
    }

    #[test]
    fn title_only_auto_width_keeps_its_own_width() {
        let mut title = TitleContent::new("title");
        title.style = TextTokens {
            auto_width: Some(true),
            ..TextTokens::default()
        };
        let content = TooltipContent {
            title: Some(title),
            rows: Vec::new(),
        };
        let layout = layout_tooltip(&content, &test_style(), &test_theme(), &HeuristicTextMeasurer);
        // 5 glyphs at 6 px; no content to follow, no row spacing added.
        assert_eq!(layout.width, 30.0 + 20.0);
        assert_eq!(layout.height, 10.0 + 20.0);
        assert!(layout.rows.is_empty());
    }
}
