//! Defines the endpoint for adding a new expense.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form so that a missing field becomes a validation
// error instead of an extractor rejection.
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{AppState, Error, app_state::ExpenseSession, expense::tracker_view};

/// The state needed to add an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The session holding the ledger and categories.
    pub session: Arc<Mutex<ExpenseSession>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// The form data for adding an expense.
///
/// Fields are kept as raw text so that validation can tell a missing field
/// apart from a malformed one.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseForm {
    /// What the money was spent on.
    #[serde(default)]
    pub name: String,
    /// The amount spent, as typed.
    #[serde(default)]
    pub amount: String,
    /// The selected category, empty if none was selected.
    #[serde(default)]
    pub category: String,
}

/// A route handler for adding an expense.
///
/// Responds with the re-rendered tracker on success, or with an alert if the
/// form is invalid, in which case the ledger is unchanged.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let mut session = match state.session.lock() {
        Ok(session) => session,
        Err(error) => {
            tracing::error!("could not acquire expense session lock: {error}");
            return Error::SessionLockError.into_alert_response();
        }
    };

    match session.add_expense(&form.name, &form.amount, &form.category) {
        Ok(expense) => tracing::info!("added expense {}", expense.id),
        Err(error) => return error.into_alert_response(),
    }

    tracker_view(&session).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::Form;
    use scraper::Selector;

    use crate::{
        ExpenseSession,
        expense::create_endpoint::{CreateExpenseState, ExpenseForm, create_expense_endpoint},
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    fn get_state() -> CreateExpenseState {
        CreateExpenseState {
            session: Arc::new(Mutex::new(ExpenseSession::new())),
        }
    }

    fn expense_form(name: &str, amount: &str, category: &str) -> ExpenseForm {
        ExpenseForm {
            name: name.to_owned(),
            amount: amount.to_owned(),
            category: category.to_owned(),
        }
    }

    async fn alert_text(response: axum::response::Response) -> String {
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        html.select(&Selector::parse("[role=alert]").unwrap())
            .next()
            .expect("No alert found")
            .text()
            .collect()
    }

    #[tokio::test]
    async fn can_create_expense() {
        let state = get_state();

        let response = create_expense_endpoint(
            State(state.clone()),
            Form(expense_form(" Coffee ", "4.50", "Food")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        {
            let session = state.session.lock().unwrap();
            assert_eq!(session.ledger.len(), 1);
            let expense = &session.ledger.expenses()[0];
            assert_eq!(expense.name.as_ref(), "Coffee");
            assert_eq!(expense.amount, 4.5);
            assert_eq!(expense.category.as_ref(), "Food");
        }

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let tracker = html
            .select(&Selector::parse("main#expense-tracker").unwrap())
            .next()
            .expect("No tracker found");
        let total = tracker
            .select(&Selector::parse("#total").unwrap())
            .next()
            .expect("No total found")
            .text()
            .collect::<String>();
        assert_eq!(total.trim(), "Total Expenses: $4.50");
    }

    #[tokio::test]
    async fn successful_create_clears_form_inputs() {
        let state = get_state();

        let response = create_expense_endpoint(
            State(state),
            Form(expense_form("Coffee", "4.50", "Food")),
        )
        .await
        .into_response();

        let html = parse_html_fragment(response).await;
        for input in html.select(&Selector::parse("form#expense-form input").unwrap()) {
            assert_eq!(
                input.value().attr("value"),
                None,
                "want input {:?} to be empty",
                input.value().attr("name")
            );
        }
        let selected = html
            .select(&Selector::parse("select[name=category] option[selected]").unwrap())
            .count();
        assert_eq!(selected, 0, "want no category to be selected");
    }

    #[tokio::test]
    async fn newest_expense_is_first() {
        let state = get_state();

        for (name, amount, category) in [("Coffee", "4.50", "Food"), ("Bus", "2.00", "Transport")]
        {
            create_expense_endpoint(
                State(state.clone()),
                Form(expense_form(name, amount, category)),
            )
            .await;
        }

        let session = state.session.lock().unwrap();
        assert_eq!(session.ledger.expenses()[0].name.as_ref(), "Bus");
    }

    #[tokio::test]
    async fn missing_name_returns_alert() {
        let state = get_state();

        let response = create_expense_endpoint(
            State(state.clone()),
            Form(expense_form("", "5", "Food")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            alert_text(response)
                .await
                .contains("Please enter a valid name, amount, and category.")
        );
        assert!(state.session.lock().unwrap().ledger.is_empty());
    }

    #[tokio::test]
    async fn negative_amount_returns_alert() {
        let state = get_state();

        let response = create_expense_endpoint(
            State(state.clone()),
            Form(expense_form("Taxi", "-3", "Transport")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            alert_text(response)
                .await
                .contains("Please enter a valid amount.")
        );
        assert!(state.session.lock().unwrap().ledger.is_empty());
    }

    #[tokio::test]
    async fn unknown_category_returns_alert() {
        let state = get_state();

        let response = create_expense_endpoint(
            State(state.clone()),
            Form(expense_form("Vet", "80", "Pets")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(alert_text(response).await.contains("\"Pets\" does not exist"));
        assert!(state.session.lock().unwrap().ledger.is_empty());
    }

    #[test]
    fn form_without_category_parses_as_empty_category() {
        let form: ExpenseForm = serde_html_form::from_str("name=Coffee&amount=4.50").unwrap();

        assert_eq!(form.name, "Coffee");
        assert_eq!(form.amount, "4.50");
        assert_eq!(form.category, "");
    }
}
