use super::{Color, Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font weight and color of a piece of text, on top of the backend's default font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub weight: FontWeight,
    pub color: Color,
}

impl TextStyle {
    pub const fn regular(color: Color) -> Self {
        Self {
            weight: FontWeight::Regular,
            color,
        }
    }

    pub const fn bold(color: Color) -> Self {
        Self {
            weight: FontWeight::Bold,
            color,
        }
    }
}

/// The drawing operations the chart and legend renderers need.
///
/// Angles are in degrees, measured clockwise from the positive x axis;
/// `bounds` is the rectangle the full ellipse is inscribed in.
pub trait Canvas {
    /// Fills the wedge between `start` and `start + sweep`.
    fn fill_wedge(
        &mut self,
        bounds: Rect,
        start: f32,
        sweep: f32,
        color: Color,
    );

    /// Strokes the outer arc of the wedge between `start` and `start + sweep`.
    fn stroke_arc(
        &mut self,
        bounds: Rect,
        start: f32,
        sweep: f32,
        color: Color,
        width: f32,
    );

    fn fill_rect(
        &mut self,
        rect: Rect,
        color: Color,
    );

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        style: TextStyle,
    );

    /// Size `text` would occupy if drawn with `style`.
    fn measure_text(
        &mut self,
        text: &str,
        style: TextStyle,
    ) -> Size;
}
