//! The in-memory ledger of expenses and the views derived from it.

use std::collections::HashMap;

use super::core::{Expense, ExpenseId, NewExpense};

/// The recorded expenses, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

/// The expenses of one category, in ledger order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    /// The category name shared by every expense in the group.
    pub category: &'a str,
    /// The expenses in this category, newest first.
    pub expenses: Vec<&'a Expense>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Record `new_expense` under a fresh ID and put it at the front of the ledger.
    ///
    /// Identical expenses are allowed, they just get different IDs.
    pub fn add_expense(&mut self, new_expense: NewExpense) -> &Expense {
        let id = self.next_id;
        self.next_id += 1;

        self.expenses.insert(
            0,
            Expense {
                id,
                name: new_expense.name,
                amount: new_expense.amount,
                category: new_expense.category,
            },
        );

        &self.expenses[0]
    }

    /// Remove the expense with `id` and return it.
    ///
    /// Returns `None`, and leaves the ledger untouched, if there is no such expense.
    pub fn delete_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;

        Some(self.expenses.remove(index))
    }

    /// The expenses, newest first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The number of expenses.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether there are no expenses.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The sum of all expense amounts, zero for an empty ledger.
    pub fn total(&self) -> f64 {
        // `Sum for f64` starts at -0.0, which would display as "-0.00".
        self.expenses
            .iter()
            .fold(0.0, |total, expense| total + expense.amount)
    }

    /// Partition the expenses by category.
    ///
    /// Groups are ordered by where their category first appears in the ledger
    /// (i.e., the category of the newest expense comes first), and each group
    /// keeps the ledger order of its expenses.
    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        let mut group_index: HashMap<&str, usize> = HashMap::new();

        for expense in &self.expenses {
            let category = expense.category.as_ref();

            let index = *group_index.entry(category).or_insert_with(|| {
                groups.push(CategoryGroup {
                    category,
                    expenses: Vec::new(),
                });
                groups.len() - 1
            });

            groups[index].expenses.push(expense);
        }

        groups
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
