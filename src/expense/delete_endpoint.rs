use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    app_state::ExpenseSession,
    expense::{ExpenseId, tracker_view},
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The session holding the ledger and categories.
    session: Arc<Mutex<ExpenseSession>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// A route handler for deleting an expense, responds with the re-rendered tracker.
///
/// Deleting an expense that does not exist is not an error, e.g., when the
/// same delete button is clicked twice, and the response is the same as for a
/// successful delete.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    let mut session = match state.session.lock() {
        Ok(session) => session,
        Err(error) => {
            tracing::error!("could not acquire expense session lock: {error}");
            return Error::SessionLockError.into_alert_response();
        }
    };

    match session.delete_expense(expense_id) {
        Some(_) => tracing::info!("deleted expense {expense_id}"),
        None => tracing::debug!("expense {expense_id} was already deleted"),
    }

    tracker_view(&session).into_response()
}
