#![doc(test(attr(deny(warnings))))]

//! Budget Chart tracks deposits, withdrawals, and transfers across spending
//! categories and renders an ASCII chart of where the money went.
//!
//! ```
//! use budget_chart::{create_spend_chart, Category};
//!
//! let mut food = Category::new("Food");
//! let mut clothing = Category::new("Clothing");
//! food.deposit(1000.0, "initial deposit");
//! food.withdraw(10.15, "groceries").unwrap();
//! food.transfer(50.0, &mut clothing).unwrap();
//! clothing.withdraw(25.55, "shirt").unwrap();
//!
//! let chart = create_spend_chart([&food, &clothing]).unwrap();
//! assert!(chart.starts_with("Percentage spent by category\n"));
//! ```

pub mod chart;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use chart::{create_spend_chart, create_spend_chart_with, CategorySpend, SpendingBreakdown};
pub use config::ChartConfig;
pub use errors::{ChartError, ConfigError, LedgerError};
pub use ledger::{Category, Transaction};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Chart tracing initialized.");
    });
}
