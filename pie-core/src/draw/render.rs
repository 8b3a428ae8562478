use tracing::trace;

use super::{Canvas, Color, TextStyle};
use crate::calculations::{ChartLayout, LegendStyle, PieStyle, layout_legend, layout_pie};
use crate::{ExpenseSnapshot, LegendCaptions, RenderState};

/// Draws whatever `state` marks visible; draws nothing for a hidden state.
pub fn paint(
    canvas: &mut dyn Canvas,
    state: &RenderState,
    captions: &LegendCaptions,
    layout: &ChartLayout,
) {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return;
    };

    if state.show_chart {
        draw_pie_chart(canvas, snapshot, &layout.chart);
    }
    if state.show_legend {
        draw_legend(canvas, captions, &layout.legend);
    }
}

/// Fills and outlines one wedge per category and centers its percentage
/// label on the wedge's mid angle.
pub fn draw_pie_chart(
    canvas: &mut dyn Canvas,
    snapshot: &ExpenseSnapshot,
    style: &PieStyle,
) {
    let Some(layout) = layout_pie(snapshot, style) else {
        return;
    };
    let label_style = TextStyle::bold(Color::BLACK);

    for segment in &layout.segments {
        canvas.fill_wedge(
            layout.bounds,
            segment.start_angle,
            segment.sweep_angle,
            segment.category.color(),
        );
        canvas.stroke_arc(
            layout.bounds,
            segment.start_angle,
            segment.sweep_angle,
            Color::BLACK,
            style.border_width,
        );

        let label = segment.label();
        let size = canvas.measure_text(&label, label_style);
        let mut origin = segment.label_center;
        origin.x -= size.width / 2.0;
        origin.y -= size.height / 2.0;
        canvas.draw_text(&label, origin, label_style);
    }
    trace!(segments = layout.segments.len(), "pie chart drawn");
}

pub fn draw_legend(
    canvas: &mut dyn Canvas,
    captions: &LegendCaptions,
    style: &LegendStyle,
) {
    let text_style = TextStyle::regular(Color::BLACK);
    let entries = layout_legend(captions, style, |text| canvas.measure_text(text, text_style));

    for entry in &entries {
        canvas.fill_rect(entry.swatch, entry.category.color());
        canvas.draw_text(&entry.caption, entry.text_origin, text_style);
    }
}
