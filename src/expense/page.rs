//! The expense tracker page.
//!
//! The page is one `main` element, the tracker, which holds the add expense
//! form, the add category form, the running total and the expenses grouped by
//! category. Every endpoint that changes the session responds with a freshly
//! rendered tracker that htmx swaps in place of the old one.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, CategorySet, Error,
    alert::ALERT_CONTAINER_ID,
    app_state::ExpenseSession,
    endpoints::{self, format_endpoint},
    expense::{CategoryGroup, Expense, MAX_AMOUNT},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, EXPENSE_ITEM_STYLE, FORM_CONTAINER_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, SECTION_HEADER_STYLE, base,
        dollar_input_styles, format_currency,
    },
};

/// The element ID of the tracker, the target of every htmx swap on the page.
pub const TRACKER_ID: &str = "expense-tracker";

/// The state needed for the expense tracker page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    pub session: Arc<Mutex<ExpenseSession>>,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// Render the expense tracker page.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
) -> Result<Response, Error> {
    let session = state
        .session
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense session lock: {error}"))
        .map_err(|_| Error::SessionLockError)?;

    let content = tracker_view(&session);

    Ok(base("Expenses", &[dollar_input_styles()], &content).into_response())
}

/// Render the tracker with empty form inputs.
pub fn tracker_view(session: &ExpenseSession) -> Markup {
    let groups = session.ledger.group_by_category();
    let total = session.ledger.total();

    html!(
        main id=(TRACKER_ID) class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold text-center my-5" { "Expensify - Manage Your Funds" }

            div class=(FORM_CONTAINER_STYLE)
            {
                (expense_form_view(&session.categories))
                (category_form_view())
            }

            p id="total" class="text-xl font-bold text-center my-3 text-blue-600 dark:text-blue-400"
            {
                "Total Expenses: " (format_currency(total))
            }

            (expense_list_view(&groups))
        }
    )
}

fn swap_attributes() -> (String, String) {
    (format!("#{TRACKER_ID}"), format!("#{ALERT_CONTAINER_ID}"))
}

fn expense_form_view(categories: &CategorySet) -> Markup {
    let (tracker_target, alert_target) = swap_attributes();

    html! {
        form
            id="expense-form"
            hx-post=(endpoints::EXPENSES_API)
            hx-target=(tracker_target)
            hx-swap="outerHTML"
            hx-target-error=(alert_target)
            class="w-full space-y-4 mb-6"
        {
            div
            {
                label for="expense-name" class=(FORM_LABEL_STYLE) { "Expense Name" }

                input
                    id="expense-name"
                    type="text"
                    name="name"
                    placeholder="Expense Name"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        id="amount"
                        type="number"
                        name="amount"
                        step="0.01"
                        min="0.01"
                        max=(format!("{MAX_AMOUNT:.0}"))
                        placeholder="Amount"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select id="category" name="category" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select Category" }

                    @for category in categories.iter() {
                        option value=(category) { (category) }
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}

fn category_form_view() -> Markup {
    let (tracker_target, alert_target) = swap_attributes();

    html! {
        form
            id="category-form"
            hx-post=(endpoints::CATEGORIES_API)
            hx-target=(tracker_target)
            hx-swap="outerHTML"
            hx-target-error=(alert_target)
            class="w-full space-y-4 mb-6"
        {
            div
            {
                label for="new-category" class=(FORM_LABEL_STYLE) { "New Category" }

                input
                    id="new-category"
                    type="text"
                    name="name"
                    placeholder="Add New Category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Category" }
        }
    }
}

fn expense_list_view(groups: &[CategoryGroup<'_>]) -> Markup {
    html! {
        section id="expense-list" class="w-full max-w-md"
        {
            @if groups.is_empty() {
                p class="text-center text-gray-500 dark:text-gray-400 my-5"
                {
                    "No expenses added yet!"
                }
            }

            @for group in groups {
                section data-category=(group.category)
                {
                    h2 class=(SECTION_HEADER_STYLE) { (group.category) }

                    ul
                    {
                        @for expense in &group.expenses {
                            (expense_item_view(expense))
                        }
                    }
                }
            }
        }
    }
}

fn expense_item_view(expense: &Expense) -> Markup {
    let (tracker_target, alert_target) = swap_attributes();
    let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, expense.id);

    html! {
        li class=(EXPENSE_ITEM_STYLE) data-expense-id=(expense.id)
        {
            span class="expense-name" { (expense.name) }
            span class="expense-amount tabular-nums" { (format_currency(expense.amount)) }

            button
                type="button"
                hx-delete=(delete_url)
                hx-target=(tracker_target)
                hx-swap="outerHTML"
                hx-target-error=(alert_target)
                class=(BUTTON_DELETE_STYLE)
            {
                "Delete"
            }
        }
    }
}
