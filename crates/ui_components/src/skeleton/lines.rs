//! Deterministic line layout for placeholder text.
//!
//! Widths are jittered with a fixed three-entry table instead of a random source so that
//! the same configuration always renders identically (visual regression snapshots depend
//! on it).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::class_list::ClassList;
use crate::settings::UiSettings;

const JITTER_TABLE: [f64; 3] = [0.973051493507435, 0.15334737213558558, 0.5671034553053769];
const MAX_JITTER_PX: i64 = 75;

/// Default `line_count` for paragraphs.
pub const DEFAULT_LINE_COUNT: usize = 3;
/// Default line width.
pub const DEFAULT_WIDTH: &str = "100%";

fn jitter(index: usize) -> i64 {
    (JITTER_TABLE[index % JITTER_TABLE.len()] * MAX_JITTER_PX as f64).floor() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Unit detected in a CSS width string.
pub enum CssUnit {
    /// Contains `%`.
    Percent,
    /// Contains `px`.
    Pixel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Loosely parsed CSS length.
pub struct CssLength {
    /// Leading integer, if the string starts with one.
    pub magnitude: Option<i64>,
    /// Detected unit.
    pub unit: CssUnit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a width cannot drive paragraph jitter.
pub enum CssLengthError {
    /// Neither `%` nor `px` appears in the value.
    #[error("width `{0}` has no `%` or `px` unit")]
    UnsupportedUnit(String),
}

impl FromStr for CssLength {
    type Err = CssLengthError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let unit = if raw.contains('%') {
            CssUnit::Percent
        } else if raw.contains("px") {
            CssUnit::Pixel
        } else {
            return Err(CssLengthError::UnsupportedUnit(raw.to_string()));
        };
        Ok(Self {
            magnitude: leading_integer(raw),
            unit,
        })
    }
}

/// Integer prefix after optional whitespace and sign (`"12.5px"` -> 12).
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end].parse::<i64>().ok().map(|value| sign * value)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Input to [`layout_lines`].
pub struct SkeletonConfig {
    /// Render several jittered lines instead of one.
    pub paragraph: bool,
    /// Number of lines in paragraph mode.
    pub line_count: usize,
    /// Line width (`"100%"`, `"240px"`), or the maximum width in paragraph mode.
    pub width: String,
    /// Use the larger heading variant.
    pub heading: bool,
    /// Extra class applied to every line.
    #[serde(rename = "className")]
    pub class: Option<String>,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            paragraph: false,
            line_count: DEFAULT_LINE_COUNT,
            width: DEFAULT_WIDTH.to_string(),
            heading: false,
            class: None,
        }
    }
}

impl SkeletonConfig {
    /// Shared class list for every line.
    pub fn line_class(&self, settings: &UiSettings) -> ClassList {
        ClassList::default()
            .with_optional(self.class.as_deref())
            .with(settings.class("skeleton__text"))
            .with_if(self.heading, settings.class("skeleton__heading"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One placeholder line to draw.
pub struct SkeletonLine {
    /// CSS width value.
    pub width: String,
    /// Position in the produced sequence.
    pub key: usize,
    /// Class list shared by all lines of one layout.
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a layout pass.
pub enum SkeletonLayout {
    /// A single line using the raw width.
    Single(SkeletonLine),
    /// Jittered paragraph lines, drawn inside a wrapper.
    Paragraph(Vec<SkeletonLine>),
}

impl SkeletonLayout {
    /// Flattens the layout into its lines.
    pub fn into_lines(self) -> Vec<SkeletonLine> {
        match self {
            Self::Single(line) => vec![line],
            Self::Paragraph(lines) => lines,
        }
    }
}

/// Lays out placeholder lines for `config`.
///
/// Widths that cannot be jittered fall back to a single line with the raw width.
pub fn layout_lines(config: &SkeletonConfig, settings: &UiSettings) -> SkeletonLayout {
    let class = config.line_class(settings).to_string();
    let line = |key: usize, width: String| SkeletonLine {
        width,
        key,
        class: class.clone(),
    };

    if !config.paragraph {
        return SkeletonLayout::Single(line(0, config.width.clone()));
    }

    match config.width.parse::<CssLength>() {
        Ok(CssLength {
            unit: CssUnit::Percent,
            ..
        }) => SkeletonLayout::Paragraph(
            (0..config.line_count)
                .map(|i| line(i, format!("calc({} - {}px)", config.width, jitter(i))))
                .collect(),
        ),
        Ok(CssLength {
            unit: CssUnit::Pixel,
            magnitude: Some(magnitude),
        }) => SkeletonLayout::Paragraph(
            (0..config.line_count)
                .map(|i| {
                    let width = magnitude.saturating_sub(MAX_JITTER_PX - jitter(i));
                    line(i, format!("{width}px"))
                })
                .collect(),
        ),
        _ => SkeletonLayout::Single(line(0, config.width.clone())),
    }
}

/// Generates the placeholder lines for `config` with the default class prefix.
pub fn generate_lines(config: &SkeletonConfig) -> Vec<SkeletonLine> {
    layout_lines(config, &UiSettings::default()).into_lines()
}
