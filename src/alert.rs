//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the `#alert-container` element of the base page,
//! either as the target of a failed htmx request or as an out-of-band swap
//! alongside a successful response.

use maud::{Markup, html};

/// The element ID of the container that alerts are rendered into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// A message to display to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An action succeeded and there is something to say about it.
    Success {
        /// The headline.
        message: String,
        /// The explanation below the headline.
        details: String,
    },
    /// An action failed.
    Error {
        /// The headline.
        message: String,
        /// What went wrong and how to fix it.
        details: String,
    },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (is_error, message, details) = match self {
            Alert::Success { message, details } => (false, message, details),
            Alert::Error { message, details } => (true, message, details),
        };

        let style = if is_error {
            "flex items-start gap-3 p-4 mb-4 rounded-lg border text-red-800 \
            border-red-300 bg-red-50 dark:bg-gray-800 dark:text-red-400 \
            dark:border-red-800"
        } else {
            "flex items-start gap-3 p-4 mb-4 rounded-lg border text-green-800 \
            border-green-300 bg-green-50 dark:bg-gray-800 dark:text-green-400 \
            dark:border-green-800"
        };

        html!(
            div
                role="alert"
                class=(style)
                data-alert-kind=(if is_error { "error" } else { "success" })
            {
                div class="flex-1"
                {
                    p class="font-medium" { (message) }
                    p class="text-sm" { (details) }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="ms-auto bg-transparent border-none cursor-pointer"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        )
    }

    /// Render the alert wrapped in the alert container, marked for an htmx
    /// out-of-band swap.
    ///
    /// Append this to the main content of a response to show the alert
    /// without changing the request's swap target.
    pub fn into_oob_html(self) -> Markup {
        html!(
            div id=(ALERT_CONTAINER_ID) hx-swap-oob="true" class="w-full max-w-md px-4"
            {
                (self.into_html())
            }
        )
    }
}
