use serde::{Deserialize, Serialize};

use crate::draw::Color;

/// One of the four expense categories, in the order they are laid out on
/// the chart and in the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Bills,
    Gas,
    Entertainment,
    Groceries,
}

impl ExpenseCategory {
    /// All categories in chart order.
    pub const ALL: [ExpenseCategory; 4] = [
        Self::Bills,
        Self::Gas,
        Self::Entertainment,
        Self::Groceries,
    ];

    pub fn index(&self) -> usize {
        match self {
            Self::Bills => 0,
            Self::Gas => 1,
            Self::Entertainment => 2,
            Self::Groceries => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bills => "bills",
            Self::Gas => "gas",
            Self::Entertainment => "entertainment",
            Self::Groceries => "groceries",
        }
    }

    /// Caption shown next to the input field and in the legend.
    pub fn default_caption(&self) -> &'static str {
        match self {
            Self::Bills => "Bills",
            Self::Gas => "Gas",
            Self::Entertainment => "Entertainment",
            Self::Groceries => "Groceries",
        }
    }

    /// Fill color of the wedge and of the legend swatch.
    pub fn color(&self) -> Color {
        match self {
            Self::Bills => Color::MISTY_ROSE,
            Self::Gas => Color::WHEAT,
            Self::Entertainment => Color::CADET_BLUE,
            Self::Groceries => Color::LIGHT_CYAN,
        }
    }
}

/// The four legend captions supplied by the surrounding form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendCaptions {
    pub bills: String,
    pub gas: String,
    pub entertainment: String,
    pub groceries: String,
}

impl Default for LegendCaptions {
    fn default() -> Self {
        Self {
            bills: ExpenseCategory::Bills.default_caption().to_string(),
            gas: ExpenseCategory::Gas.default_caption().to_string(),
            entertainment: ExpenseCategory::Entertainment.default_caption().to_string(),
            groceries: ExpenseCategory::Groceries.default_caption().to_string(),
        }
    }
}

impl LegendCaptions {
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
}
