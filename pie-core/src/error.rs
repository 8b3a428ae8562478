//! User input errors raised by the submit handler.
//!
//! None of these are fatal. Each is shown to the user as a blocking
//! warning dialog, using [`InputError::title`] and the `Display` text.

use thiserror::Error;

use crate::ExpenseCategory;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    /// At least one of the four fields is empty or only whitespace.
    #[error("All fields must be filled to display the chart.")]
    MissingField,

    /// A field could not be read as a non-negative number; it counts as zero.
    #[error("Please enter a valid number.")]
    InvalidNumber {
        category: ExpenseCategory,
        input: String,
    },

    /// Every field parsed but the amounts add up to zero.
    #[error("Total expenses cannot be zero. Please enter valid values.")]
    ZeroTotal,
}

impl InputError {
    /// Caption of the warning dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingField => "Incomplete Input",
            Self::InvalidNumber { .. } | Self::ZeroTotal => "Invalid Input",
        }
    }

    /// Whether this error stops the chart from being drawn.
    pub fn blocks_rendering(&self) -> bool {
        !matches!(self, Self::InvalidNumber { .. })
    }
}
