//! Core expense types and validation of user input.

use std::fmt::Display;

use crate::{CategorySet, Error, ExpenseField, category::CategoryName};

/// The ID of an expense.
///
/// IDs are handed out by a [Ledger](super::Ledger) in increasing order and are
/// never reused by the same ledger.
pub type ExpenseId = u64;

/// The largest amount a single expense may have.
///
/// Keeps the running total finite and exactly printable to the cent.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// The text label of an expense, e.g., "Coffee".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpenseName(String);

impl ExpenseName {
    /// Create an expense name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingField] if `name` is empty after trimming.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::MissingField(ExpenseField::Name))
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create an expense name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for ExpenseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ExpenseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Money spent on something, filed under a category.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub name: ExpenseName,
    /// The amount of money spent, always greater than zero.
    pub amount: f64,
    /// The category the expense is filed under.
    pub category: CategoryName,
}

/// A validated expense that has not been added to a ledger yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// What the money was spent on.
    pub name: ExpenseName,
    /// The amount of money spent, always greater than zero.
    pub amount: f64,
    /// The category the expense is filed under.
    pub category: CategoryName,
}

impl NewExpense {
    /// Validate the raw text of the add expense form.
    ///
    /// Missing fields are reported before a malformed amount, and the amount
    /// before an unknown category.
    ///
    /// # Errors
    ///
    /// - [Error::MissingField] if `name` or `amount` are blank, or `category` is empty.
    /// - [Error::InvalidAmount] if `amount` is not a finite number greater than zero.
    /// - [Error::AmountTooLarge] if `amount` is more than [MAX_AMOUNT].
    /// - [Error::UnknownCategory] if `category` is not in `categories`.
    pub fn parse(
        name: &str,
        amount: &str,
        category: &str,
        categories: &CategorySet,
    ) -> Result<Self, Error> {
        let name = ExpenseName::new(name)?;

        let amount = amount.trim();
        if amount.is_empty() {
            return Err(Error::MissingField(ExpenseField::Amount));
        }

        if category.is_empty() {
            return Err(Error::MissingField(ExpenseField::Category));
        }

        let amount = parse_amount(amount)?;

        let category = categories
            .get(category)
            .cloned()
            .ok_or_else(|| Error::UnknownCategory(category.to_owned()))?;

        Ok(Self {
            name,
            amount,
            category,
        })
    }
}

/// Parse `text` as an amount of money.
///
/// # Errors
///
/// Returns [Error::InvalidAmount] if `text` is not a finite number strictly greater than zero,
/// or [Error::AmountTooLarge] if it is more than [MAX_AMOUNT].
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > MAX_AMOUNT => {
            Err(Error::AmountTooLarge(text.to_owned()))
        }
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}
