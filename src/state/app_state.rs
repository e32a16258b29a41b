//! Application state definitions

use super::forms::CategoryForm;
use crate::api::Category;
use std::collections::VecDeque;

/// Alert shown when a category could not be submitted
pub const SUBMISSION_FAILED_MESSAGE: &str = "Unable to add category. Please try your request again";

/// Where the current submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Awaiting input or submission
    #[default]
    Idle,
    /// A request has been sent and its outcome has not arrived yet
    InFlight,
}

/// State of the category listing panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryListState {
    #[default]
    Loading,
    Loaded(Vec<Category>),
    Failed(String),
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Form
    pub form: CategoryForm,
    pub submission: SubmissionPhase,

    // Existing categories on the server
    pub categories: CategoryListState,

    // UI state
    pub server_url: String,
    pub status_message: Option<String>,
    alerts: VecDeque<String>,
}

impl AppState {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Default::default()
        }
    }

    /// Returns true while a submission is outstanding
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionPhase::InFlight
    }

    /// Queue a modal alert
    pub fn push_alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }

    /// Returns true if an alert is waiting to be dismissed
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// The alert currently shown, if any
    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    /// Dismiss the alert currently shown
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    /// Number of queued alerts, including the one shown
    #[cfg(test)]
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }
}
