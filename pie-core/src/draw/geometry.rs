use serde::{Deserialize, Serialize};

/// A point in canvas coordinates; y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(
        width: f32,
        height: f32,
    ) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Point on the ellipse inscribed in `bounds` at `angle` degrees,
/// measured clockwise from the positive x axis.
pub fn ellipse_point(
    bounds: Rect,
    angle: f32,
) -> Point {
    let center = bounds.center();
    let radians = f64::from(angle).to_radians();
    Point::new(
        center.x + (f64::from(bounds.width / 2.0) * radians.cos()) as f32,
        center.y + (f64::from(bounds.height / 2.0) * radians.sin()) as f32,
    )
}

/// Approximates an elliptical arc with a polyline.
///
/// Returns the points from `start` to `start + sweep` (inclusive), spaced
/// at most `max_step` degrees apart. A zero sweep yields a single point.
pub fn arc_points(
    bounds: Rect,
    start: f32,
    sweep: f32,
    max_step: f32,
) -> Vec<Point> {
    if sweep == 0.0 {
        return vec![ellipse_point(bounds, start)];
    }

    let steps = (sweep.abs() / max_step.max(f32::EPSILON)).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| ellipse_point(bounds, start + sweep * i as f32 / steps as f32))
        .collect()
}
