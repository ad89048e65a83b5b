use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single signed entry in a category's log.
///
/// Deposits carry positive amounts and withdrawals negative ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
        }
    }

    pub fn is_spending(&self) -> bool {
        self.amount < 0.0
    }
}
