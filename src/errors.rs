use thiserror::Error;

/// Failures raised while moving money in or out of a category.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },
}

/// Inputs the spend chart cannot be drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("Cannot chart spending without any categories")]
    NoCategories,
    #[error("Cannot chart spending when nothing has been spent")]
    NothingSpent,
}

/// Error type for chart configuration parsing and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
