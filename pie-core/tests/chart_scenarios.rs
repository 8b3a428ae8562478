//! End-to-end scenarios: raw field text in, draw commands out.

use pie_core::calculations::{ChartLayout, PieStyle, layout_pie};
use pie_core::draw::{DrawCommand, RecordingCanvas, paint};
use pie_core::{ExpenseFormInput, ExpenseSnapshot, InputError, LegendCaptions, submit};
use pretty_assertions::assert_eq;

fn render(input: &ExpenseFormInput) -> (Vec<InputError>, RecordingCanvas) {
    let outcome = submit(input);
    let mut canvas = RecordingCanvas::new();
    paint(
        &mut canvas,
        &outcome.state,
        &LegendCaptions::default(),
        &ChartLayout::default(),
    );
    (outcome.warnings, canvas)
}

fn sweeps(canvas: &RecordingCanvas) -> Vec<f32> {
    canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillWedge { sweep, .. } => Some(*sweep),
            _ => None,
        })
        .collect()
}

#[test]
fn single_category_fills_whole_pie() {
    let (warnings, canvas) = render(&ExpenseFormInput::new("100", "0", "0", "0"));

    assert!(warnings.is_empty());
    assert_eq!(sweeps(&canvas), vec![360.0, 0.0, 0.0, 0.0]);
    assert_eq!(&canvas.texts()[..4], &["100%", "0%", "0%", "0%"]);
}

#[test]
fn blank_field_hides_chart() {
    let (warnings, canvas) = render(&ExpenseFormInput::new("", "10", "10", "10"));

    assert_eq!(warnings, vec![InputError::MissingField]);
    assert!(canvas.commands().is_empty());
}

#[test]
fn zero_total_hides_chart() {
    let (warnings, canvas) = render(&ExpenseFormInput::new("0", "0", "0", "0"));

    assert_eq!(warnings, vec![InputError::ZeroTotal]);
    assert_eq!(
        warnings[0].to_string(),
        "Total expenses cannot be zero. Please enter valid values."
    );
    assert!(canvas.commands().is_empty());
}

#[test]
fn equal_amounts_draw_four_quarters() {
    let (warnings, canvas) = render(&ExpenseFormInput::new("50", "50", "50", "50"));

    assert!(warnings.is_empty());
    assert_eq!(sweeps(&canvas), vec![90.0; 4]);
    assert_eq!(&canvas.texts()[..4], &["25%", "25%", "25%", "25%"]);
}

#[test]
fn shown_then_rejected_hides_previous_chart() {
    let shown = submit(&ExpenseFormInput::new("1", "2", "3", "4"));
    let hidden = submit(&ExpenseFormInput::new("1", "2", "", "4"));

    assert!(shown.state.show_chart && shown.state.show_legend);
    assert!(!hidden.state.show_chart && !hidden.state.show_legend);
    assert!(hidden.repaint);
}

#[test]
fn huge_amount_keeps_its_share_of_the_chart() {
    let (warnings, canvas) = render(&ExpenseFormInput::new("1e30", "1", "1", "1"));

    assert!(warnings.is_empty());
    assert_eq!(sweeps(&canvas)[0], 360.0);
    assert_eq!(canvas.texts()[0], "100%");
}

#[test]
fn sweeps_and_percentages_over_many_inputs() {
    let samples = [
        [1.0, 2.0, 3.0, 4.0],
        [0.01, 0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0, 0.0],
        [123456.78, 0.5, 9999.0, 42.0],
        [7.0, 7.0, 7.0, 7.0],
        [0.125, 0.125, 0.375, 0.375],
        [1000000000.0, 1.0, 1.0, 1.0],
        [1e30, 1.0, 1.0, 1.0],
        [f64::MAX, f64::MAX, 1.0, 0.0],
    ];

    for [a, b, c, d] in samples {
        let snapshot = ExpenseSnapshot::new(a, b, c, d);
        let layout = layout_pie(&snapshot, &PieStyle::default()).expect("positive total");

        assert!(
            (layout.total_sweep() - 360.0).abs() < 1e-2,
            "sweeps of {snapshot} sum to {}",
            layout.total_sweep()
        );
        assert!(
            (layout.total_percentage() - 100).abs() <= 3,
            "percentages of {snapshot} sum to {}",
            layout.total_percentage()
        );
        assert!(layout.segments.iter().all(|s| s.value >= 0.0));
    }
}
