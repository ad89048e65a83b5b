//! ASCII bar chart of how total spending splits across categories.

pub mod summary;

pub use summary::{CategorySpend, SpendingBreakdown};

use tracing::debug;

use crate::config::ChartConfig;
use crate::errors::ChartError;
use crate::ledger::Category;
use crate::utils::text::{pad, Alignment};

const AXIS_INDENT: &str = "    ";
const COLUMN_WIDTH: usize = 3;

/// Renders the spend chart for `categories` in the default layout.
pub fn create_spend_chart<'a, I>(categories: I) -> Result<String, ChartError>
where
    I: IntoIterator<Item = &'a Category>,
{
    create_spend_chart_with(categories, &ChartConfig::default())
}

/// Renders the spend chart using the title and bar marker from `config`.
pub fn create_spend_chart_with<'a, I>(
    categories: I,
    config: &ChartConfig,
) -> Result<String, ChartError>
where
    I: IntoIterator<Item = &'a Category>,
{
    let breakdown = SpendingBreakdown::from_categories(categories)?;
    Ok(breakdown.render(config))
}

impl SpendingBreakdown {
    /// Lays out threshold rows from 100 down to 0, the axis, and the category
    /// names written vertically beneath their columns.
    pub fn render(&self, config: &ChartConfig) -> String {
        debug!(categories = self.len(), total = self.total, "rendering spend chart");

        let mut out = String::new();
        out.push_str(&config.title);
        out.push('\n');

        let bar = format!(" {} ", config.marker);
        let gap = " ".repeat(COLUMN_WIDTH);
        for threshold in (0..=100u8).rev().step_by(10) {
            out.push_str(&format!("{threshold:>3}|"));
            for entry in &self.entries {
                out.push_str(if entry.percentage >= threshold { &bar } else { &gap });
            }
            out.push_str(" \n");
        }

        out.push_str(AXIS_INDENT);
        out.push_str(&"-".repeat(COLUMN_WIDTH * self.len() + 1));
        out.push('\n');

        let names: Vec<Vec<char>> = self
            .entries
            .iter()
            .map(|entry| entry.name.chars().collect())
            .collect();
        let height = names.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..height {
            out.push_str(AXIS_INDENT);
            for name in &names {
                let letter = name.get(row).copied().unwrap_or(' ');
                out.push_str(&pad(
                    letter.encode_utf8(&mut [0; 4]),
                    COLUMN_WIDTH,
                    Alignment::Center,
                    ' ',
                ));
            }
            out.push_str(" \n");
        }

        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        out
    }
}
