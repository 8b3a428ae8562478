//! Legend layout: one row of color swatches followed by their captions.

use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_even;
use crate::draw::{Point, Rect, Size};
use crate::{ExpenseCategory, LegendCaptions};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendStyle {
    pub x: f32,
    pub y: f32,
    pub swatch_size: f32,
    /// Gap between a swatch and its caption.
    pub spacing: f32,
    /// Gap between a caption and the next swatch.
    pub group_spacing: f32,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            x: 850.0,
            y: 750.0,
            swatch_size: 30.0,
            spacing: 10.0,
            group_spacing: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub category: ExpenseCategory,
    pub caption: String,
    pub swatch: Rect,
    pub text_origin: Point,
}

/// Lays out the legend left to right without wrapping.
///
/// `measure` returns the drawn size of a caption. Each caption is centered
/// vertically against its swatch, and the cursor advances by the swatch,
/// the spacing, the rounded caption width and the group spacing.
pub fn layout_legend(
    captions: &LegendCaptions,
    style: &LegendStyle,
    mut measure: impl FnMut(&str) -> Size,
) -> Vec<LegendEntry> {
    let mut cursor = style.x;

    ExpenseCategory::ALL
        .into_iter()
        .map(|category| {
            let caption = captions.get(category);
            let size = measure(caption);

            let entry = LegendEntry {
                category,
                caption: caption.to_string(),
                swatch: Rect::new(cursor, style.y, style.swatch_size, style.swatch_size),
                text_origin: Point::new(
                    cursor + style.swatch_size + style.spacing,
                    style.y + (style.swatch_size - size.height) / 2.0,
                ),
            };

            cursor += style.swatch_size
                + style.spacing
                + round_half_even(f64::from(size.width)) as f32
                + style.group_spacing;
            entry
        })
        .collect()
}
