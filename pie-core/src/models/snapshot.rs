use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ExpenseCategory;

/// Immutable set of expense amounts, one per category.
///
/// Built by the submit handler once all four fields have been parsed.
/// Amounts are finite and never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseSnapshot {
    pub bills: f64,
    pub gas: f64,
    pub entertainment: f64,
    pub groceries: f64,
}

impl ExpenseSnapshot {
    pub fn new(
        bills: f64,
        gas: f64,
        entertainment: f64,
        groceries: f64,
    ) -> Self {
        Self {
            bills,
            gas,
            entertainment,
            groceries,
        }
    }

    pub fn get(
        &self,
        category: ExpenseCategory,
    ) -> f64 {
        match category {
            ExpenseCategory::Bills => self.bills,
            ExpenseCategory::Gas => self.gas,
            ExpenseCategory::Entertainment => self.entertainment,
            ExpenseCategory::Groceries => self.groceries,
        }
    }

    fn amounts(&self) -> [f64; 4] {
        [self.bills, self.gas, self.entertainment, self.groceries]
    }

    /// Sum of the four amounts; `f64::INFINITY` when it exceeds `f64::MAX`.
    pub fn total(&self) -> f64 {
        self.amounts().iter().sum()
    }

    /// Whether at least one amount is above zero.
    pub fn has_positive_total(&self) -> bool {
        self.amounts().iter().any(|v| *v > 0.0)
    }

    /// Fraction of the total taken by `category`, in `0.0..=1.0`.
    ///
    /// Amounts are scaled by the largest one before summing, so the share
    /// stays exact even when the total itself is not representable.
    /// Returns `None` when the total is zero.
    pub fn share(
        &self,
        category: ExpenseCategory,
    ) -> Option<f64> {
        let largest = self.amounts().into_iter().fold(0.0_f64, f64::max);
        if largest <= 0.0 {
            return None;
        }

        let scaled_total: f64 = self.amounts().iter().map(|v| v / largest).sum();
        Some(self.get(category) / largest / scaled_total)
    }
}

impl fmt::Display for ExpenseSnapshot {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "bills={} gas={} entertainment={} groceries={} total={}",
            self.bills,
            self.gas,
            self.entertainment,
            self.groceries,
            self.total()
        )
    }
}
