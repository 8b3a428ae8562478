//! [`Canvas`] backend that paints straight into a gpui window.

use gpui::{
    App, Bounds, PathBuilder, Pixels, Point, ShapedLine, SharedString, TextRun, Window,
    fill, px, size,
};
use pie_core::draw::{self, Canvas, Color, FontWeight, Rect, TextStyle, arc_points};
use tracing::warn;

use crate::utils::{to_hsla, to_window_point};

/// Largest angle covered by one straight segment of an arc.
const ARC_STEP_DEGREES: f32 = 2.0;

/// Paints chart commands during a gpui paint pass.
///
/// Chart coordinates are relative to `origin`, the top-left corner of the
/// canvas element.
pub struct GpuiCanvas<'a> {
    origin: Point<Pixels>,
    window: &'a mut Window,
    cx: &'a mut App,
}

impl<'a> GpuiCanvas<'a> {
    pub fn new(
        origin: Point<Pixels>,
        window: &'a mut Window,
        cx: &'a mut App,
    ) -> Self {
        Self { origin, window, cx }
    }

    fn point(
        &self,
        p: draw::Point,
    ) -> Point<Pixels> {
        to_window_point(self.origin, p)
    }

    fn shape(
        &mut self,
        text: &str,
        style: TextStyle,
    ) -> (ShapedLine, Pixels) {
        let text_style = self.window.text_style();
        let mut font = text_style.font();
        if style.weight == FontWeight::Bold {
            font.weight = gpui::FontWeight::BOLD;
        }

        let run = TextRun {
            len: text.len(),
            font,
            color: to_hsla(style.color),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let font_size = text_style.font_size.to_pixels(self.window.rem_size());
        let line_height = self.window.line_height();

        let line = self.window.text_system().shape_line(
            SharedString::from(text.to_string()),
            font_size,
            &[run],
            None,
        );
        (line, line_height)
    }
}

impl Canvas for GpuiCanvas<'_> {
    fn fill_wedge(
        &mut self,
        bounds: Rect,
        start: f32,
        sweep: f32,
        color: Color,
    ) {
        if sweep <= 0.0 {
            return;
        }

        let mut builder = PathBuilder::fill();
        builder.move_to(self.point(bounds.center()));
        for p in arc_points(bounds, start, sweep, ARC_STEP_DEGREES) {
            builder.line_to(self.point(p));
        }
        builder.close();

        match builder.build() {
            Ok(path) => self.window.paint_path(path, to_hsla(color)),
            Err(error) => warn!(?error, start, sweep, "cannot build wedge path"),
        }
    }

    fn stroke_arc(
        &mut self,
        bounds: Rect,
        start: f32,
        sweep: f32,
        color: Color,
        width: f32,
    ) {
        if sweep <= 0.0 {
            return;
        }

        let mut points = arc_points(bounds, start, sweep, ARC_STEP_DEGREES).into_iter();
        let Some(first) = points.next() else {
            return;
        };

        let mut builder = PathBuilder::stroke(px(width));
        builder.move_to(self.point(first));
        for p in points {
            builder.line_to(self.point(p));
        }

        match builder.build() {
            Ok(path) => self.window.paint_path(path, to_hsla(color)),
            Err(error) => warn!(?error, start, sweep, "cannot build arc path"),
        }
    }

    fn fill_rect(
        &mut self,
        rect: Rect,
        color: Color,
    ) {
        let bounds = Bounds::new(
            self.point(draw::Point::new(rect.x, rect.y)),
            size(px(rect.width), px(rect.height)),
        );
        self.window.paint_quad(fill(bounds, to_hsla(color)));
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: draw::Point,
        style: TextStyle,
    ) {
        let (line, line_height) = self.shape(text, style);
        let origin = self.point(origin);

        if let Err(error) = line.paint(
            origin,
            line_height,
            self.window,
            self.cx,
        ) {
            warn!(?error, text, "cannot paint text");
        }
    }

    fn measure_text(
        &mut self,
        text: &str,
        style: TextStyle,
    ) -> draw::Size {
        let (line, line_height) = self.shape(text, style);
        draw::Size::new(f32::from(line.width), f32::from(line_height))
    }
}
