use std::fmt;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::utils::text::{pad, truncate, Alignment};

use super::transaction::Transaction;

const REPORT_WIDTH: usize = 30;
const DESCRIPTION_WIDTH: usize = 23;
const AMOUNT_WIDTH: usize = 7;

/// A named spending category with a running balance and an append-only log.
///
/// The balance always equals the sum of the logged amounts and is only
/// changed through [`deposit`](Self::deposit), [`withdraw`](Self::withdraw)
/// and [`transfer`](Self::transfer).
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    id: Uuid,
    description: String,
    balance: f64,
    transactions: Vec<Transaction>,
}

impl Category {
    /// Creates an empty category with a zero balance.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            balance: 0.0,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Adds `amount` to the balance. The sign is not checked.
    pub fn deposit(&mut self, amount: f64, description: impl Into<String>) {
        let description = description.into();
        debug!(category = %self.description, amount, %description, "deposit");
        self.record(amount, description);
    }

    /// Removes `amount` when the balance covers it; otherwise nothing changes.
    pub fn withdraw(
        &mut self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        if self.balance - amount >= 0.0 {
            let description = description.into();
            debug!(category = %self.description, amount, %description, "withdraw");
            self.record(-amount, description);
            return Ok(());
        }
        debug!(
            category = %self.description,
            requested = amount,
            available = self.balance,
            "withdrawal rejected"
        );
        Err(LedgerError::InsufficientFunds {
            requested: amount,
            available: self.balance,
        })
    }

    /// Returns whether the balance covers `amount`.
    pub fn check_funds(&self, amount: f64) -> bool {
        self.balance >= amount
    }

    /// Moves `amount` into `target`, logging an entry on both sides.
    ///
    /// Either both categories change or neither does: the deposit half has no
    /// failure path, so only the withdrawal can reject the transfer.
    pub fn transfer(&mut self, amount: f64, target: &mut Category) -> Result<(), LedgerError> {
        self.withdraw(amount, format!("Transfer to {}", target.description))?;
        target.deposit(amount, format!("Transfer from {}", self.description));
        debug!(from = %self.description, to = %target.description, amount, "transfer");
        Ok(())
    }

    /// Total withdrawn from this category, as a positive number.
    pub fn spent(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.is_spending())
            .map(|txn| txn.amount.abs())
            .sum()
    }

    fn record(&mut self, amount: f64, description: String) {
        self.transactions.push(Transaction::new(amount, description));
        self.balance += amount;
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            pad(&self.description, REPORT_WIDTH, Alignment::Center, '*')
        )?;
        for txn in &self.transactions {
            let description = pad(&txn.description, DESCRIPTION_WIDTH, Alignment::Left, ' ');
            let amount = format!("{:>width$.2}", txn.amount, width = AMOUNT_WIDTH);
            writeln!(
                f,
                "{}{}",
                truncate(&description, DESCRIPTION_WIDTH),
                truncate(&amount, AMOUNT_WIDTH)
            )?;
        }
        write!(f, "Total: {:.2}", self.balance)
    }
}
