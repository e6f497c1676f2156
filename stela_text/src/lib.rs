// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for annotation layout.
//!
//! The tooltip box-layout engine needs to measure text runs (including
//! multi-line wrapping) before it can size columns and the panel. Shaping and
//! glyph layout stay downstream, so layout code depends on a tiny measurement
//! interface instead.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned text), and
//! - renderer-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::HashMap;

/// A text measurement interface for layout.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine, or
/// - backed by web platform text measurement (e.g. HTML canvas).
///
/// Measurement is a pure function of `(text, style)`; callers may cache
/// results freely (see [`MemoizedMeasurer`]).
///
/// A measurer that cannot measure at all (broken font backend) should panic:
/// that is an environment fault, not a data problem, and layout code does not
/// attempt to recover from it.
pub trait TextMeasurer {
    /// Measures `text`, wrapping it when `style` asks for multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> MeasuredText;
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
    /// Explicit line height; when `None`, `font_size` is used.
    pub line_height: Option<f64>,
    /// Maximum line width, used only when `multi_line` is set.
    pub max_width: Option<f64>,
    /// Whether the text may wrap onto multiple lines.
    pub multi_line: bool,
    /// How lines break when wrapping.
    pub word_break: WordBreak,
}

impl TextStyle {
    /// Creates a single-line style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            line_height: None,
            max_width: None,
            multi_line: false,
            word_break: WordBreak::BreakWord,
        }
    }

    /// Returns the effective line height.
    #[must_use]
    pub fn effective_line_height(&self) -> f64 {
        self.line_height.unwrap_or(self.font_size)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Line breaking behavior when wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordBreak {
    /// Prefer breaking between words; a word longer than the line is split.
    BreakWord,
    /// Break anywhere, including inside words.
    BreakAll,
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// The result of measuring (and possibly wrapping) a text run.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredText {
    /// The laid-out lines. Single-line styles always produce one entry.
    pub lines: Vec<String>,
    /// Width of the widest line.
    pub width: f64,
    /// Total height (`lines.len() * line height`).
    pub height: f64,
}

impl MeasuredText {
    /// An empty measurement (no lines, zero extent).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em. Explicit newlines always
/// break; greedy wrapping applies when the style enables `multi_line` and
/// provides a `max_width`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    fn glyph_width(style: &TextStyle) -> f64 {
        0.6 * style.font_size
    }

    fn line_width(line: &str, style: &TextStyle) -> f64 {
        Self::glyph_width(style) * line.chars().count() as f64
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> MeasuredText {
        let mut lines: Vec<String> = Vec::new();
        for raw in text.split('\n') {
            match (style.multi_line, style.max_width) {
                (true, Some(max_width)) if max_width > 0.0 => {
                    lines.extend(wrap_line(raw, max_width, Self::glyph_width(style), style));
                }
                _ => lines.push(raw.to_string()),
            }
        }
        if lines.is_empty() {
            lines.push(String::new());
        }

        let width = lines
            .iter()
            .map(|l| Self::line_width(l, style))
            .fold(0.0_f64, f64::max);
        let height = style.effective_line_height() * lines.len() as f64;
        MeasuredText {
            lines,
            width,
            height,
        }
    }
}

/// Greedy wrap of a single raw line into lines no wider than `max_width`.
fn wrap_line(raw: &str, max_width: f64, glyph_width: f64, style: &TextStyle) -> Vec<String> {
    // At least one glyph per line, so pathological widths still terminate.
    let max_chars = ((max_width / glyph_width) as usize).max(1);

    match style.word_break {
        WordBreak::BreakAll => {
            let chars: Vec<char> = raw.chars().collect();
            if chars.is_empty() {
                return vec![String::new()];
            }
            chars
                .chunks(max_chars)
                .map(|c| c.iter().collect())
                .collect()
        }
        WordBreak::BreakWord => {
            let mut out: Vec<String> = Vec::new();
            let mut current = String::new();
            let mut current_len = 0_usize;
            for word in raw.split(' ') {
                let word_len = word.chars().count();
                let sep = usize::from(!current.is_empty());
                if current_len + sep + word_len <= max_chars {
                    if sep == 1 {
                        current.push(' ');
                    }
                    current.push_str(word);
                    current_len += sep + word_len;
                    continue;
                }
                if !current.is_empty() {
                    out.push(core::mem::take(&mut current));
                    current_len = 0;
                }
                if word_len <= max_chars {
                    current.push_str(word);
                    current_len = word_len;
                } else {
                    // A single word wider than the line splits like break-all.
                    let chars: Vec<char> = word.chars().collect();
                    for chunk in chars.chunks(max_chars) {
                        out.push(chunk.iter().collect());
                    }
                    if let Some(last) = out.pop() {
                        current_len = last.chars().count();
                        current = last;
                    }
                }
            }
            out.push(current);
            out
        }
    }
}

/// A memoizing wrapper around another measurer.
///
/// Measurement is pure per `(text, style)`, so results are cached across
/// recomputations (resize, data refresh, re-theme). The cache key hashes
/// float fields by bit pattern; styles that differ only by `-0.0` vs `0.0`
/// measure twice, which is harmless.
#[derive(Debug)]
pub struct MemoizedMeasurer<M> {
    inner: M,
    cache: RefCell<HashMap<MeasureKey, MeasuredText>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct MeasureKey {
    text: String,
    font_size: u64,
    font_family: FontFamily,
    font_weight: FontWeight,
    font_style: FontStyle,
    line_height: Option<u64>,
    max_width: Option<u64>,
    multi_line: bool,
    word_break: WordBreak,
}

impl MeasureKey {
    fn new(text: &str, style: &TextStyle) -> Self {
        Self {
            text: text.to_string(),
            font_size: style.font_size.to_bits(),
            font_family: style.font_family.clone(),
            font_weight: style.font_weight,
            font_style: style.font_style,
            line_height: style.line_height.map(f64::to_bits),
            max_width: style.max_width.map(f64::to_bits),
            multi_line: style.multi_line,
            word_break: style.word_break,
        }
    }
}

impl<M> MemoizedMeasurer<M> {
    /// Wraps `inner` with an unbounded memo cache.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Drops all cached measurements.
    ///
    /// Call this when the measurement environment changes (e.g. fonts
    /// finished loading in a web backend).
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<M: TextMeasurer> TextMeasurer for MemoizedMeasurer<M> {
    fn measure(&self, text: &str, style: &TextStyle) -> MeasuredText {
        let key = MeasureKey::new(text, style);
        if let Some(hit) = self.cache.borrow().get(&key) {
            return hit.clone();
        }
        let measured = self.inner.measure(text, style);
        self.cache.borrow_mut().insert(key, measured.clone());
        measured
    }
}
