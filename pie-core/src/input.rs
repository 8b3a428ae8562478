//! Raw form input and amount parsing.

use crate::ExpenseCategory;

/// Current text of the four expense fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFormInput {
    pub bills: String,
    pub gas: String,
    pub entertainment: String,
    pub groceries: String,
}

impl ExpenseFormInput {
    pub fn new(
        bills: impl Into<String>,
        gas: impl Into<String>,
        entertainment: impl Into<String>,
        groceries: impl Into<String>,
    ) -> Self {
        Self {
            bills: bills.into(),
            gas: gas.into(),
            entertainment: entertainment.into(),
            groceries: groceries.into(),
        }
    }

    pub fn get(
        &self,
        category: ExpenseCategory,
    ) -> &str {
        match category {
            ExpenseCategory::Bills => &self.bills,
            ExpenseCategory::Gas => &self.gas,
            ExpenseCategory::Entertainment => &self.entertainment,
            ExpenseCategory::Groceries => &self.groceries,
        }
    }

    /// Returns the first category whose field is empty or whitespace-only.
    pub fn first_blank(&self) -> Option<ExpenseCategory> {
        ExpenseCategory::ALL
            .into_iter()
            .find(|c| self.get(*c).trim().is_empty())
    }
}

/// Normalizes input for parsing: trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses an expense amount.
///
/// Accepts plain decimals and scientific notation, with `,` as a thousands
/// separator. Returns `None` for blank input, for anything that is not a
/// finite number, and for negative amounts.
pub fn parse_amount(s: &str) -> Option<f64> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return None;
    }

    let value = normalized.parse::<f64>().ok()?;
    if !value.is_finite() {
        tracing::debug!(input = %s, "non-finite amount rejected");
        return None;
    }
    if value < 0.0 {
        tracing::debug!(input = %s, "negative amount rejected");
        return None;
    }
    // Folds -0.0 into 0.0.
    Some(value.abs())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56"), Some(1234.56));
        assert_eq!(parse_amount("1,234,567.89"), Some(1234567.89));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  42.5  "), Some(42.5));
    }

    #[test]
    fn parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount("2.5E-2"), Some(0.025));
    }

    #[test]
    fn parse_amount_accepts_amounts_beyond_decimal_range() {
        assert_eq!(parse_amount("1e30"), Some(1e30));
        assert_eq!(
            parse_amount("50000000000000000000000000000"),
            Some(5e28)
        );
    }

    #[test]
    fn parse_amount_rejects_garbage_and_blank() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
    }

    #[test]
    fn parse_amount_rejects_non_finite_values() {
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("1e400"), None);
    }

    #[test]
    fn parse_amount_rejects_negative_values() {
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("-0.001"), None);
        assert_eq!(parse_amount("+5"), Some(5.0));
        assert_eq!(parse_amount("-0"), Some(0.0));

        let negative_zero = parse_amount("-0.0").unwrap();
        assert_eq!(negative_zero, 0.0);
        assert!(negative_zero.is_sign_positive());
    }

    #[test]
    fn first_blank_finds_whitespace_only_field() {
        let input = ExpenseFormInput::new("1", "2", "  ", "");

        assert_eq!(input.first_blank(), Some(ExpenseCategory::Entertainment));
    }

    #[test]
    fn first_blank_is_none_when_all_filled() {
        let input = ExpenseFormInput::new("1", "x", "3", "4");

        assert_eq!(input.first_blank(), None);
    }
}
