//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::{
    CategorySet, Error,
    expense::{Expense, ExpenseId, Ledger, NewExpense},
};

/// The expenses and categories of the running app.
///
/// There is exactly one session per server process. It starts with an empty
/// ledger and the default categories, and is dropped when the server stops.
#[derive(Debug, Clone, Default)]
pub struct ExpenseSession {
    /// The recorded expenses, newest first.
    pub ledger: Ledger,
    /// The categories expenses can be filed under.
    pub categories: CategorySet,
}

impl ExpenseSession {
    /// Create a session with an empty ledger and the default categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the add expense form fields and record the expense.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a field is empty, the amount is not a
    /// number greater than zero, or the category is not in the category set.
    /// The ledger is unchanged on error.
    pub fn add_expense(
        &mut self,
        name: &str,
        amount: &str,
        category: &str,
    ) -> Result<&Expense, Error> {
        let new_expense = NewExpense::parse(name, amount, category, &self.categories)?;

        Ok(self.ledger.add_expense(new_expense))
    }

    /// Remove the expense with `id`, if it exists.
    pub fn delete_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        self.ledger.delete_expense(id)
    }
}

/// The state of the REST server.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The in-memory expense session shared by all request handlers.
    pub session: Arc<Mutex<ExpenseSession>>,
}

impl AppState {
    /// Create a new [AppState] around `session`.
    pub fn new(session: ExpenseSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}
