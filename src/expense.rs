//! Expense management for the expense tracker.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and `NewExpense` for validating form input
//! - The in-memory `Ledger` with its grouped view and running total
//! - View handlers and endpoints for the expense tracker page

mod core;
mod create_endpoint;
mod delete_endpoint;
mod ledger;
mod page;

pub use core::{Expense, ExpenseId, ExpenseName, MAX_AMOUNT, NewExpense};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use ledger::{CategoryGroup, Ledger};
pub use page::{get_expenses_page, tracker_view};
