//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    alert::Alert, endpoints, expense::MAX_AMOUNT, html::format_currency,
    internal_server_error::InternalServerError,
};

/// The input fields of the add expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    /// The text label of the expense.
    Name,
    /// The amount of money spent.
    Amount,
    /// The category the expense belongs to.
    Category,
}

impl Display for ExpenseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExpenseField::Name => "name",
            ExpenseField::Amount => "amount",
            ExpenseField::Category => "category",
        };

        write!(f, "{name}")
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field of the expense form was empty.
    #[error("the expense {0} is missing")]
    MissingField(ExpenseField),

    /// The amount could not be parsed as a number greater than zero.
    ///
    /// Holds the text that was submitted.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The amount is larger than [MAX_AMOUNT].
    ///
    /// Holds the text that was submitted.
    #[error("\"{0}\" is more than the largest allowed amount")]
    AmountTooLarge(String),

    /// The category of an expense is not in the category set.
    #[error("the category \"{0}\" does not exist")]
    UnknownCategory(String),

    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryLabel,

    /// The category already exists in the category set.
    ///
    /// Labels are compared exactly, so "food" and "Food" are different categories.
    #[error("the category \"{0}\" already exists")]
    DuplicateCategory(String),

    /// Could not acquire the lock on the expense session.
    ///
    /// This only happens if another thread panicked while holding the lock.
    #[error("could not acquire the expense session lock")]
    SessionLockError,
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    ///
    /// A poisoned session lock also tells htmx to redirect to the error page,
    /// since the tracker can no longer be rendered.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: format!("Missing {field}"),
                    details: "Please enter a valid name, amount, and category.".to_owned(),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "Please enter a valid amount. \"{amount}\" is not a number greater than zero."
                    ),
                },
            ),
            Error::AmountTooLarge(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Amount too large".to_owned(),
                    details: format!(
                        "Please enter a smaller amount. \"{amount}\" is more than {}.",
                        format_currency(MAX_AMOUNT)
                    ),
                },
            ),
            Error::UnknownCategory(category) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Unknown category".to_owned(),
                    details: format!(
                        "The category \"{category}\" does not exist. \
                        Pick one of the listed categories or add it first."
                    ),
                },
            ),
            Error::EmptyCategoryLabel => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid category".to_owned(),
                    details: "Category name cannot be empty.".to_owned(),
                },
            ),
            Error::DuplicateCategory(category) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Duplicate category".to_owned(),
                    details: format!("This category already exists: \"{category}\"."),
                },
            ),
            Error::SessionLockError => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    HxRedirect(endpoints::INTERNAL_ERROR_VIEW.to_owned()),
                    (),
                )
                    .into_response();
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::SessionLockError => {
                tracing::error!("An unexpected error occurred: {}", self);
                InternalServerError::default().into_response()
            }
            error => error.into_alert_response(),
        }
    }
}
