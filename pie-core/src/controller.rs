//! Submit handler for the expense form.
//!
//! Turns the current text of the four fields into the next [`RenderState`],
//! plus the warnings to show the user. The UI calls [`submit`] when the
//! button is clicked and repaints when asked to.

use tracing::{info, warn};

use crate::input::parse_amount;
use crate::{ExpenseCategory, ExpenseFormInput, ExpenseSnapshot, InputError, RenderState};

/// Result of one click on the chart button.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub state: RenderState,
    /// Warnings in the order they were raised; each becomes one dialog.
    pub warnings: Vec<InputError>,
    /// Whether the window must redraw to reflect `state`.
    pub repaint: bool,
}

impl SubmitOutcome {
    fn rejected(warnings: Vec<InputError>) -> Self {
        Self {
            state: RenderState::hidden(),
            warnings,
            repaint: true,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.state.show_chart && self.state.show_legend
    }
}

/// Validates the form and builds the next render state.
///
/// * A blank field rejects the submit outright.
/// * A field that is not a non-negative number counts as zero and raises
///   its own warning; the other fields are still parsed.
/// * A zero total rejects the submit.
pub fn submit(input: &ExpenseFormInput) -> SubmitOutcome {
    if let Some(blank) = input.first_blank() {
        warn!(category = blank.as_str(), "submit rejected: empty field");
        return SubmitOutcome::rejected(vec![InputError::MissingField]);
    }

    let mut warnings = Vec::new();
    let mut amounts = [0.0_f64; 4];

    for category in ExpenseCategory::ALL {
        let text = input.get(category);
        match parse_amount(text) {
            Some(value) => amounts[category.index()] = value,
            None => {
                warn!(category = category.as_str(), input = %text, "invalid amount, using 0");
                warnings.push(InputError::InvalidNumber {
                    category,
                    input: text.to_string(),
                });
            }
        }
    }

    let [bills, gas, entertainment, groceries] = amounts;
    let snapshot = ExpenseSnapshot::new(bills, gas, entertainment, groceries);

    if !snapshot.has_positive_total() {
        warn!("submit rejected: total is zero");
        warnings.push(InputError::ZeroTotal);
        return SubmitOutcome::rejected(warnings);
    }

    info!(%snapshot, "chart shown");
    SubmitOutcome {
        state: RenderState::shown(snapshot),
        warnings,
        repaint: true,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::{PieStyle, layout_pie};

    #[test]
    fn submit_valid_input_shows_chart() {
        let outcome = submit(&ExpenseFormInput::new("100", "20.5", "0", "1,000"));

        assert!(outcome.is_shown());
        assert!(outcome.warnings.is_empty());
        assert!(outcome.repaint);
        assert_eq!(
            outcome.state.snapshot,
            Some(ExpenseSnapshot::new(100.0, 20.5, 0.0, 1000.0))
        );
    }

    #[test]
    fn submit_blank_field_hides_chart_without_parsing() {
        let outcome = submit(&ExpenseFormInput::new("abc", "10", " ", "10"));

        assert!(!outcome.is_shown());
        assert_eq!(outcome.state, RenderState::hidden());
        assert_eq!(outcome.warnings, vec![InputError::MissingField]);
        assert!(outcome.repaint);
    }

    #[test]
    fn submit_invalid_field_counts_as_zero_and_continues() {
        let outcome = submit(&ExpenseFormInput::new("ten", "10", "x", "30"));

        assert!(outcome.is_shown());
        assert_eq!(
            outcome.warnings,
            vec![
                InputError::InvalidNumber {
                    category: ExpenseCategory::Bills,
                    input: "ten".to_string(),
                },
                InputError::InvalidNumber {
                    category: ExpenseCategory::Entertainment,
                    input: "x".to_string(),
                },
            ]
        );
        assert_eq!(
            outcome.state.snapshot,
            Some(ExpenseSnapshot::new(0.0, 10.0, 0.0, 30.0))
        );
    }

    #[test]
    fn submit_all_invalid_fields_end_with_zero_total() {
        let outcome = submit(&ExpenseFormInput::new("a", "b", "c", "d"));

        assert_eq!(outcome.state, RenderState::hidden());
        assert_eq!(outcome.warnings.len(), 5);
        assert_eq!(outcome.warnings.last(), Some(&InputError::ZeroTotal));
    }

    #[test]
    fn submit_negative_amount_is_invalid() {
        let outcome = submit(&ExpenseFormInput::new("-5", "10", "10", "10"));

        assert!(outcome.is_shown());
        assert_eq!(
            outcome.warnings,
            vec![InputError::InvalidNumber {
                category: ExpenseCategory::Bills,
                input: "-5".to_string(),
            }]
        );
    }

    #[test]
    fn submit_replaces_previous_snapshot() {
        let first = submit(&ExpenseFormInput::new("1", "1", "1", "1"));
        let second = submit(&ExpenseFormInput::new("2", "2", "2", "2"));

        assert_ne!(first.state.snapshot, second.state.snapshot);
        assert_eq!(second.state.snapshot.map(|s| s.total()), Some(8.0));
    }

    #[test]
    fn submit_amounts_beyond_decimal_range_show_chart() {
        let outcome = submit(&ExpenseFormInput::new(
            "50000000000000000000000000000",
            "50000000000000000000000000000",
            "1",
            "1",
        ));

        assert!(outcome.is_shown());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn submit_huge_amount_keeps_its_share() {
        let outcome = submit(&ExpenseFormInput::new("1e30", "1", "1", "1"));

        assert!(outcome.is_shown());
        assert!(outcome.warnings.is_empty());

        let snapshot = outcome.state.snapshot.unwrap();
        let layout = layout_pie(&snapshot, &PieStyle::default()).unwrap();
        assert_eq!(layout.segments[0].percentage, 100);
        assert_eq!(layout.segments[0].sweep_angle, 360.0);
    }

    #[test]
    fn submit_total_past_f64_max_does_not_panic() {
        let outcome = submit(&ExpenseFormInput::new("1e308", "1e308", "1e308", "1e308"));

        assert!(outcome.is_shown());

        let snapshot = outcome.state.snapshot.unwrap();
        let layout = layout_pie(&snapshot, &PieStyle::default()).unwrap();
        let sweeps: Vec<f32> = layout.segments.iter().map(|s| s.sweep_angle).collect();
        assert_eq!(sweeps, vec![90.0; 4]);
    }
}
