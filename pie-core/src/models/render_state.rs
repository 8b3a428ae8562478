use crate::ExpenseSnapshot;

/// What the paint handler should draw on the next frame.
///
/// `show_chart` and `show_legend` always move together and are only set
/// while `snapshot` holds a positive total.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderState {
    pub show_chart: bool,
    pub show_legend: bool,
    pub snapshot: Option<ExpenseSnapshot>,
}

impl RenderState {
    /// State with nothing drawn.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// State with the chart and legend drawn for `snapshot`.
    pub fn shown(snapshot: ExpenseSnapshot) -> Self {
        Self {
            show_chart: true,
            show_legend: true,
            snapshot: Some(snapshot),
        }
    }
}
