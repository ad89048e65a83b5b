#![allow(dead_code)]

use budget_chart::Category;

/// Funds a category and withdraws each of `spending` from it.
pub fn category_with_spending(name: &str, opening: f64, spending: &[f64]) -> Category {
    let mut category = Category::new(name);
    category.deposit(opening, "initial deposit");
    for amount in spending {
        category
            .withdraw(*amount, "")
            .expect("opening deposit covers spending");
    }
    category
}

pub fn assert_balance_matches_log(category: &Category) {
    let logged: f64 = category.transactions().iter().map(|txn| txn.amount).sum();
    assert_eq!(
        category.balance(),
        logged,
        "balance drifted from the log of `{}`",
        category.description()
    );
}
