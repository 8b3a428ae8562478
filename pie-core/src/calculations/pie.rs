//! Pie segment layout.
//!
//! Each category gets a wedge whose sweep is proportional to its share of
//! the total. Wedges are laid out clockwise starting at 0° in category
//! order, each starting where the previous one ended, so together they
//! cover the full circle.

use serde::{Deserialize, Serialize};

use crate::calculations::common::{sweep_degrees, whole_percentage};
use crate::draw::{Point, Rect};
use crate::{ExpenseCategory, ExpenseSnapshot};

/// Where and how the pie is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Distance of the percentage labels from the center, as a fraction
    /// of the horizontal radius.
    pub label_radius_fraction: f32,
    pub border_width: f32,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            x: 900.0,
            y: 200.0,
            width: 500.0,
            height: 500.0,
            label_radius_fraction: 0.5,
            border_width: 2.0,
        }
    }
}

impl PieStyle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn label_radius(&self) -> f32 {
        self.width / 2.0 * self.label_radius_fraction
    }
}

/// One wedge of the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub category: ExpenseCategory,
    pub value: f64,
    /// Degrees clockwise from the positive x axis.
    pub start_angle: f32,
    pub sweep_angle: f32,
    /// Rounded share of the total, 0..=100.
    pub percentage: i64,
    /// Point the percentage label is centered on.
    pub label_center: Point,
}

impl PieSegment {
    pub fn label(&self) -> String {
        format!("{}%", self.percentage)
    }

    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }

    pub fn mid_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieLayout {
    pub bounds: Rect,
    pub segments: Vec<PieSegment>,
}

impl PieLayout {
    /// Sum of all sweep angles; 360° up to rounding.
    pub fn total_sweep(&self) -> f32 {
        self.segments.iter().map(|s| s.sweep_angle).sum()
    }

    /// Sum of the rounded percentages; may differ from 100 by up to 3.
    pub fn total_percentage(&self) -> i64 {
        self.segments.iter().map(|s| s.percentage).sum()
    }
}

/// Lays out the four wedges for `snapshot`.
///
/// Returns `None` when the total is zero, since there is nothing to divide.
pub fn layout_pie(
    snapshot: &ExpenseSnapshot,
    style: &PieStyle,
) -> Option<PieLayout> {
    if !snapshot.has_positive_total() {
        return None;
    }

    let bounds = style.bounds();
    let center = bounds.center();
    let label_radius = f64::from(style.label_radius());

    let mut start = 0.0_f64;
    let mut segments = Vec::with_capacity(ExpenseCategory::ALL.len());

    for category in ExpenseCategory::ALL {
        let share = snapshot.share(category)?;
        let sweep = sweep_degrees(share);

        let mut segment = PieSegment {
            category,
            value: snapshot.get(category),
            start_angle: start as f32,
            sweep_angle: sweep as f32,
            percentage: whole_percentage(share),
            label_center: center,
        };
        let mid = f64::from(segment.mid_angle()).to_radians();
        segment.label_center = Point::new(
            center.x + (label_radius * mid.cos()) as f32,
            center.y + (label_radius * mid.sin()) as f32,
        );

        tracing::debug!(
            category = category.as_str(),
            start = segment.start_angle,
            sweep = segment.sweep_angle,
            percentage = segment.percentage,
            "pie segment"
        );
        segments.push(segment);

        start += sweep;
    }

    Some(PieLayout { bounds, segments })
}
