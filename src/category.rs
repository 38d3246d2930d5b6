//! This file defines the `CategoryName` and `CategorySet` types and the API route for adding a category.
//! A category is used for grouping expenses, e.g., 'Food', 'Transport'.

use std::{
    fmt::Display,
    str::FromStr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form so that a missing field becomes a validation
// error instead of an extractor rejection.
use axum_extra::extract::Form;
use maud::html;
use serde::Deserialize;

use crate::{AppState, Error, alert::Alert, app_state::ExpenseSession, expense::tracker_view};

/// The categories every session starts with, in display order.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Entertainment",
    "Bills",
    "Shopping",
    "Healthcare",
];

/// The name of a category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryLabel] if `name` is empty after trimming.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryLabel)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty and has no surrounding whitespace.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The categories that expenses can be filed under.
///
/// Names are unique, compared exactly (case-sensitive), and kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySet {
    categories: Vec<CategoryName>,
}

impl CategorySet {
    /// Create a category set holding [DEFAULT_CATEGORIES].
    pub fn new() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|name| CategoryName::new_unchecked(name))
                .collect(),
        }
    }

    /// Add a category to the end of the set.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyCategoryLabel] if `label` is empty after trimming, or
    /// [Error::DuplicateCategory] if the trimmed label is already in the set.
    pub fn add(&mut self, label: &str) -> Result<&CategoryName, Error> {
        let name = CategoryName::new(label)?;

        if self.contains(name.as_ref()) {
            return Err(Error::DuplicateCategory(name.0));
        }

        self.categories.push(name);

        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Get the category with exactly the name `label`.
    pub fn get(&self, label: &str) -> Option<&CategoryName> {
        self.categories
            .iter()
            .find(|category| category.as_ref() == label)
    }

    /// Whether a category with exactly the name `label` is in the set.
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// The categories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryName> {
        self.categories.iter()
    }

    /// The number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the set has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new()
    }
}

/// The state needed for adding a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryState {
    pub session: Arc<Mutex<ExpenseSession>>,
}

impl FromRef<AppState> for CreateCategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// The form data for adding a category.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: String,
}

/// Handle the add category form.
///
/// Responds with the re-rendered expense tracker, which has an empty category
/// input and lists the new category, plus an out-of-band success alert.
/// The alert shows the label as stored, i.e. trimmed.
pub async fn create_category_endpoint(
    State(state): State<CreateCategoryState>,
    Form(form): Form<CategoryForm>,
) -> Response {
    let mut session = match state.session.lock() {
        Ok(session) => session,
        Err(error) => {
            tracing::error!("could not acquire expense session lock: {error}");
            return Error::SessionLockError.into_alert_response();
        }
    };

    let category = match session.categories.add(&form.name) {
        Ok(category) => category.clone(),
        Err(error) => return error.into_alert_response(),
    };

    tracing::info!("added category \"{category}\"");

    let notice = Alert::Success {
        message: "Success".to_owned(),
        details: format!("Category \"{category}\" added!"),
    };

    html!(
        (tracker_view(&session))
        (notice.into_oob_html())
    )
    .into_response()
}


#[cfg(test)]
mod create_category_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::Form;
    use scraper::Selector;

    use crate::{
        DEFAULT_CATEGORIES, ExpenseSession,
        category::{CategoryForm, CreateCategoryState, create_category_endpoint},
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    fn get_state() -> CreateCategoryState {
        CreateCategoryState {
            session: Arc::new(Mutex::new(ExpenseSession::new())),
        }
    }

    #[tokio::test]
    async fn can_add_category() {
        let state = get_state();
        let form = CategoryForm {
            name: " Pets ".to_owned(),
        };

        let response = create_category_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let options = html
            .select(&Selector::parse("select[name=category] option").unwrap())
            .map(|option| option.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(options.last().map(String::as_str), Some("Pets"));

        let category_input = html
            .select(&Selector::parse("input[name=name][id=new-category]").unwrap())
            .next()
            .expect("No category input found");
        assert_eq!(category_input.value().attr("value"), None);

        let alert_text = html
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("No out-of-band alert found")
            .text()
            .collect::<String>();
        assert!(alert_text.contains("Category \"Pets\" added!"));

        let session = state.session.lock().unwrap();
        assert!(session.categories.contains("Pets"));
    }

    #[tokio::test]
    async fn add_duplicate_category_returns_alert_and_leaves_set_unchanged() {
        let state = get_state();
        let form = CategoryForm {
            name: "Food".to_owned(),
        };

        let response = create_category_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("This category already exists"));

        let session = state.session.lock().unwrap();
        assert_eq!(session.categories.len(), DEFAULT_CATEGORIES.len());
    }

    #[tokio::test]
    async fn add_empty_category_returns_alert() {
        let state = get_state();

        let response = create_category_endpoint(State(state.clone()), Form(CategoryForm::default()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Category name cannot be empty."));
    }

    #[test]
    fn form_without_name_defaults_to_empty() {
        let form: CategoryForm = serde_html_form::from_str("").unwrap();

        assert_eq!(form.name, "");
    }
}
