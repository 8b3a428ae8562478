use gpui::{Hsla, Pixels, Point, point, px, rgb};
use pie_core::draw::{self, Color};

/// Converts a chart color to gpui's color type.
pub fn to_hsla(color: Color) -> Hsla {
    Hsla::from(rgb(color.to_hex()))
}

/// Converts a chart-space point to window pixels, relative to `origin`.
pub fn to_window_point(
    origin: Point<Pixels>,
    p: draw::Point,
) -> Point<Pixels> {
    point(origin.x + px(p.x), origin.y + px(p.y))
}
