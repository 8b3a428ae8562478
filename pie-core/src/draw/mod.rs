//! Drawing primitives and the chart/legend renderers.
//!
//! Renderers only talk to the [`Canvas`] trait, so any 2D backend that can
//! fill wedges, stroke arcs, fill rectangles and draw text can host them.

mod canvas;
mod color;
mod geometry;
mod recording;
mod render;

pub use canvas::{Canvas, FontWeight, TextStyle};
pub use color::Color;
pub use geometry::{Point, Rect, Size, arc_points, ellipse_point};
pub use recording::{DrawCommand, RecordingCanvas};
pub use render::{draw_legend, draw_pie_chart, paint};
