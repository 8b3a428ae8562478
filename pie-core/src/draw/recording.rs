use super::{Canvas, Color, Point, Rect, Size, TextStyle};

/// One call made against a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillWedge {
        bounds: Rect,
        start: f32,
        sweep: f32,
        color: Color,
    },
    StrokeArc {
        bounds: Rect,
        start: f32,
        sweep: f32,
        color: Color,
        width: f32,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

/// A [`Canvas`] that records every call instead of drawing.
///
/// Text is measured with a fixed advance per character and a fixed line
/// height, which makes layouts predictable.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    char_width: f32,
    line_height: f32,
    commands: Vec<DrawCommand>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::with_metrics(7.0, 15.0)
    }

    pub fn with_metrics(
        char_width: f32,
        line_height: f32,
    ) -> Self {
        Self {
            char_width,
            line_height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text of every `Text` command, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_wedge(
        &mut self,
        bounds: Rect,
        start: f32,
        sweep: f32,
        color: Color,
    ) {
        self.commands.push(DrawCommand::FillWedge {
            bounds,
            start,
            sweep,
            color,
        });
    }

    fn stroke_arc(
        &mut self,
        bounds: Rect,
        start: f32,
        sweep: f32,
        color: Color,
        width: f32,
    ) {
        self.commands.push(DrawCommand::StrokeArc {
            bounds,
            start,
            sweep,
            color,
            width,
        });
    }

    fn fill_rect(
        &mut self,
        rect: Rect,
        color: Color,
    ) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        style: TextStyle,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style,
        });
    }

    fn measure_text(
        &mut self,
        text: &str,
        _style: TextStyle,
    ) -> Size {
        Size::new(text.chars().count() as f32 * self.char_width, self.line_height)
    }
}
