//! Layout calculations for the pie chart and its legend.
//!
//! Both layouts are closed-form: the pie is a cumulative sweep over the
//! categories in fixed order, the legend a cumulative horizontal offset.

pub mod common;
pub mod legend;
pub mod pie;

pub use legend::{LegendEntry, LegendStyle, layout_legend};
pub use pie::{PieLayout, PieSegment, PieStyle, layout_pie};

use serde::{Deserialize, Serialize};

/// Static layout constants for everything drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub chart: PieStyle,
    pub legend: LegendStyle,
}
