use serde::Serialize;

use crate::errors::ChartError;
use crate::ledger::Category;
use crate::utils::round_cents;

/// Spending attributed to one category within a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub name: String,
    pub spent: f64,
    /// Share of the total, floored to a multiple of ten.
    pub percentage: u8,
}

/// Per-category spending totals in input order, plus their rounded sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingBreakdown {
    pub entries: Vec<CategorySpend>,
    pub total: f64,
}

impl SpendingBreakdown {
    pub fn from_categories<'a, I>(categories: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = &'a Category>,
    {
        let spent: Vec<(&str, f64)> = categories
            .into_iter()
            .map(|category| (category.description(), round_cents(category.spent())))
            .collect();
        if spent.is_empty() {
            return Err(ChartError::NoCategories);
        }

        let total = round_cents(spent.iter().map(|(_, amount)| amount).sum());
        if total == 0.0 {
            return Err(ChartError::NothingSpent);
        }

        let entries = spent
            .into_iter()
            .map(|(name, amount)| CategorySpend {
                name: name.to_string(),
                spent: amount,
                percentage: floor_to_tens(amount / total),
            })
            .collect();
        Ok(Self { entries, total })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn floor_to_tens(share: f64) -> u8 {
    let tens = (share * 10.0).floor().clamp(0.0, 10.0);
    tens as u8 * 10
}
