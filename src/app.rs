//! Application state and core logic

use crate::api::{ApiError, Category, CategoryCreated, CategoryService};
use crate::state::{
    AppState, CategoryListState, Form, SubmissionPhase, CATEGORY_TYPE_FIELD,
    SUBMISSION_FAILED_MESSAGE,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Outcomes reported back to the UI loop by background requests
#[derive(Debug)]
pub enum AppEvent {
    CategorySubmitted(Result<Option<CategoryCreated>, ApiError>),
    /// `generation` identifies the refresh that produced the listing
    CategoriesLoaded {
        generation: u64,
        result: Result<Vec<Category>, ApiError>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Trivia server client
    service: Arc<dyn CategoryService>,
    /// Sender handed to spawned requests
    events_tx: UnboundedSender<AppEvent>,
    /// Outcomes waiting to be applied to the state
    events_rx: UnboundedReceiver<AppEvent>,
    /// Generation of the most recent listing refresh
    listing_generation: u64,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(service: Arc<dyn CategoryService>, server_url: impl Into<String>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(server_url),
            service,
            events_tx,
            events_rx,
            listing_generation: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request that the app quits after the current tick
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // The alert is modal: only its dismissal keys do anything
        if self.state.has_alerts() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return;
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let on_submit_button = self.state.form.is_submit_button_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s')
                if ctrl || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit_category();
            }
            KeyCode::Char('r') if ctrl => self.refresh_categories(),
            // Enter submits from the field as well as from the button
            KeyCode::Enter => {
                self.submit_category();
            }
            KeyCode::Esc => self.quit = true,
            // Form field input (only when not on the Submit button)
            KeyCode::Char(c) if !on_submit_button && !ctrl => {
                let value = self.state.form.category_type.with_char(c);
                self.handle_change(CATEGORY_TYPE_FIELD, value);
            }
            KeyCode::Backspace if !on_submit_button => {
                let value = self.state.form.category_type.without_last_char();
                self.handle_change(CATEGORY_TYPE_FIELD, value);
            }
            _ => {}
        }
    }

    /// Set a form field to a new value
    pub fn handle_change(&mut self, field_name: &str, value: String) {
        self.state.form.handle_change(field_name, value);
    }

    /// Send the current form contents to the server.
    ///
    /// The request runs in the background; its outcome arrives as an
    /// [`AppEvent::CategorySubmitted`]. Returns false without sending anything
    /// while a previous submission is still in flight.
    pub fn submit_category(&mut self) -> bool {
        if self.state.is_submitting() {
            tracing::debug!("Submission already in flight, ignoring");
            return false;
        }

        let request = self.state.form.to_request();
        tracing::info!("Submitting category {:?}", request.category_type);
        self.state.submission = SubmissionPhase::InFlight;

        let service = Arc::clone(&self.service);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = service.create_category(&request).await;
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(AppEvent::CategorySubmitted(outcome));
        });

        true
    }

    /// Reload the list of categories stored on the server.
    ///
    /// Only the newest refresh is applied; listings from earlier refreshes
    /// that arrive later are dropped.
    pub fn refresh_categories(&mut self) {
        self.listing_generation += 1;
        let generation = self.listing_generation;
        tracing::debug!(generation, "Refreshing categories");

        let service = Arc::clone(&self.service);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = service.list_categories().await;
            let _ = tx.send(AppEvent::CategoriesLoaded { generation, result });
        });
    }

    /// Apply every outcome that has arrived since the last tick
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next background outcome
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// Apply a background outcome to the state
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CategorySubmitted(result) => {
                self.state.submission = SubmissionPhase::Idle;
                match result {
                    Ok(created) => {
                        tracing::info!("Category added: {created:?}");
                        self.state.form.reset();
                        self.state.status_message = Some(success_message(created.as_ref()));
                        self.refresh_categories();
                    }
                    Err(err) => {
                        tracing::warn!(
                            status = ?err.status(),
                            "Category submission failed: {err}"
                        );
                        self.state.push_alert(SUBMISSION_FAILED_MESSAGE);
                    }
                }
            }
            AppEvent::CategoriesLoaded { generation, result } => {
                if generation != self.listing_generation {
                    tracing::debug!(
                        generation,
                        latest = self.listing_generation,
                        "Dropping stale category listing"
                    );
                    return;
                }
                self.state.categories = match result {
                    Ok(categories) => {
                        tracing::debug!("Loaded {} categories", categories.len());
                        CategoryListState::Loaded(categories)
                    }
                    Err(err) => {
                        tracing::warn!("Failed to load categories: {err}");
                        CategoryListState::Failed(err.to_string())
                    }
                };
            }
        }
    }
}

/// Status line text after a successful submission
fn success_message(created: Option<&CategoryCreated>) -> String {
    match created {
        Some(CategoryCreated {
            category_id: Some(id),
            ..
        }) => format!("Category added (id {id})"),
        Some(CategoryCreated {
            message: Some(message),
            ..
        }) => message.clone(),
        _ => "Category added".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockCategoryService, NewCategory};
    use reqwest::StatusCode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(mock: MockCategoryService) -> App {
        App::new(Arc::new(mock), "http://trivia.test")
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            url: "http://trivia.test/categories".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    async fn apply_next(app: &mut App) {
        let event = app.next_event().await.expect("event channel open");
        app.handle_event(event);
    }

    mod typing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_updates_field_exactly() {
            let mut app = app_with(MockCategoryService::new());
            type_text(&mut app, "Mythology");
            assert_eq!(app.state.form.category_type.as_text(), "Mythology");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = app_with(MockCategoryService::new());
            type_text(&mut app, "Myths");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.category_type.as_text(), "Myth");
        }

        #[test]
        fn test_backspace_to_empty_is_allowed() {
            let mut app = app_with(MockCategoryService::new());
            type_text(&mut app, "A");
            app.handle_key(key(KeyCode::Backspace));
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.category_type.as_text(), "");
        }

        #[test]
        fn test_typing_on_submit_button_is_ignored() {
            let mut app = app_with(MockCategoryService::new());
            type_text(&mut app, "Art");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "xyz");
            assert_eq!(app.state.form.category_type.as_text(), "Art");
        }

        #[test]
        fn test_handle_change_sets_value_directly() {
            let mut app = app_with(MockCategoryService::new());
            app.handle_change(CATEGORY_TYPE_FIELD, "Geography".to_string());
            assert_eq!(app.state.form.category_type.as_text(), "Geography");
            app.handle_change(CATEGORY_TYPE_FIELD, String::new());
            assert_eq!(app.state.form.category_type.as_text(), "");
        }

        #[test]
        fn test_escape_quits() {
            let mut app = app_with(MockCategoryService::new());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_successful_submission_resets_form() {
            let mut mock = MockCategoryService::new();
            mock.expect_create_category()
                .withf(|c: &NewCategory| c.category_type == "Mythology")
                .times(1)
                .returning(|_| {
                    Ok(Some(CategoryCreated {
                        success: true,
                        message: Some("Category successfully created!".to_string()),
                        category_id: Some(7),
                    }))
                });
            mock.expect_list_categories().times(1).returning(|| {
                Ok(vec![Category {
                    id: 7,
                    name: "Mythology".to_string(),
                }])
            });

            let mut app = app_with(mock);
            type_text(&mut app, "Mythology");
            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.is_submitting());
            assert!(!app.should_quit());

            apply_next(&mut app).await;

            assert_eq!(app.state.form.category_type.as_text(), "");
            assert_eq!(app.state.form.active_field_index, 0);
            assert!(!app.state.has_alerts());
            assert!(!app.state.is_submitting());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Category added (id 7)")
            );

            // Success triggers a listing refresh
            apply_next(&mut app).await;
            assert_eq!(
                app.state.categories,
                CategoryListState::Loaded(vec![Category {
                    id: 7,
                    name: "Mythology".to_string(),
                }])
            );
        }

        #[tokio::test]
        async fn test_failed_submission_alerts_and_keeps_value() {
            let mut mock = MockCategoryService::new();
            mock.expect_create_category()
                .times(1)
                .returning(|_| Err(server_error()));
            mock.expect_list_categories().never();

            let mut app = app_with(mock);
            type_text(&mut app, "Mythology");
            app.handle_key(key(KeyCode::Enter));
            apply_next(&mut app).await;

            assert_eq!(app.state.alert_count(), 1);
            assert_eq!(
                app.state.current_alert(),
                Some("Unable to add category. Please try your request again")
            );
            assert_eq!(app.state.form.category_type.as_text(), "Mythology");
            assert_eq!(app.state.submission, SubmissionPhase::Idle);
        }

        #[tokio::test]
        async fn test_transport_failure_uses_same_alert() {
            let mut mock = MockCategoryService::new();
            mock.expect_create_category().returning(|_| {
                Err(ApiError::Transport {
                    url: "http://trivia.test/categories".to_string(),
                    message: "operation timed out".to_string(),
                })
            });

            let mut app = app_with(mock);
            type_text(&mut app, "Mythology");
            app.handle_key(key(KeyCode::Enter));
            apply_next(&mut app).await;

            assert_eq!(app.state.current_alert(), Some(SUBMISSION_FAILED_MESSAGE));
        }

        #[tokio::test]
        async fn test_empty_category_is_still_submitted() {
            let mut mock = MockCategoryService::new();
            mock.expect_create_category()
                .withf(|c: &NewCategory| c.category_type.is_empty())
                .times(1)
                .returning(|_| Ok(None));
            mock.expect_list_categories().returning(|| Ok(Vec::new()));

            let mut app = app_with(mock);
            assert!(app.submit_category());
            apply_next(&mut app).await;

            assert!(!app.state.has_alerts());
            assert_eq!(app.state.status_message.as_deref(), Some("Category added"));
        }

        #[tokio::test]
        async fn test_second_submit_while_in_flight_is_ignored() {
            let mut mock = MockCategoryService::new();
            mock.expect_create_category()
                .times(1)
                .returning(|_| Ok(None));
            mock.expect_list_categories().returning(|| Ok(Vec::new()));

            let mut app = app_with(mock);
            type_text(&mut app, "Science");
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(ctrl('s'));
            assert!(!app.submit_category());

            apply_next(&mut app).await;
            assert!(!app.state.is_submitting());
        }

        #[tokio::test]
        async fn test_submit_button_and_shortcut_submit() {
            let mut mock = MockCategoryService::new();
            mock.expect_create_category()
                .times(2)
                .returning(|_| Ok(None));
            mock.expect_list_categories().returning(|| Ok(Vec::new()));

            let mut app = app_with(mock);
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Enter));
            apply_next(&mut app).await;

            app.handle_key(ctrl('s'));
            assert!(app.state.is_submitting());

            // A listing refresh may arrive first
            while app.state.is_submitting() {
                apply_next(&mut app).await;
            }
        }

        #[tokio::test]
        async fn test_alert_is_modal_until_dismissed() {
            let mut mock = MockCategoryService::new();
            mock.expect_create_category()
                .times(1)
                .returning(|_| Err(server_error()));

            let mut app = app_with(mock);
            type_text(&mut app, "Mythology");
            app.handle_key(key(KeyCode::Enter));
            apply_next(&mut app).await;

            // Keys other than Enter/Esc are swallowed
            type_text(&mut app, "abc");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.category_type.as_text(), "Mythology");
            assert!(app.state.has_alerts());

            app.handle_key(key(KeyCode::Esc));
            assert!(!app.state.has_alerts());
            // Esc dismissed the alert rather than quitting
            assert!(!app.should_quit());
        }
    }

    mod listing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_refresh_loads_categories() {
            let mut mock = MockCategoryService::new();
            mock.expect_list_categories().times(1).returning(|| {
                Ok(vec![Category {
                    id: 1,
                    name: "Science".to_string(),
                }])
            });

            let mut app = app_with(mock);
            app.handle_key(ctrl('r'));
            apply_next(&mut app).await;

            assert!(matches!(
                &app.state.categories,
                CategoryListState::Loaded(list) if list.len() == 1
            ));
        }

        #[tokio::test]
        async fn test_refresh_failure_does_not_alert() {
            let mut mock = MockCategoryService::new();
            mock.expect_list_categories()
                .returning(|| Err(server_error()));

            let mut app = app_with(mock);
            app.refresh_categories();
            apply_next(&mut app).await;

            assert!(!app.state.has_alerts());
            assert!(matches!(app.state.categories, CategoryListState::Failed(_)));
        }

        #[tokio::test]
        async fn test_listing_from_older_refresh_is_dropped() {
            let mut mock = MockCategoryService::new();
            mock.expect_list_categories().times(2).returning(|| {
                Ok(vec![Category {
                    id: 2,
                    name: "Art".to_string(),
                }])
            });

            let mut app = app_with(mock);
            app.refresh_categories();
            app.refresh_categories();

            // The first refresh answers last with an outdated listing
            app.handle_event(AppEvent::CategoriesLoaded {
                generation: 1,
                result: Ok(Vec::new()),
            });
            assert_eq!(app.state.categories, CategoryListState::Loading);

            apply_next(&mut app).await;
            apply_next(&mut app).await;
            assert_eq!(
                app.state.categories,
                CategoryListState::Loaded(vec![Category {
                    id: 2,
                    name: "Art".to_string(),
                }])
            );
        }

        #[tokio::test]
        async fn test_drain_events_applies_pending_outcomes() {
            let mut app = app_with(MockCategoryService::new());
            app.events_tx
                .send(AppEvent::CategoriesLoaded {
                    generation: 0,
                    result: Ok(Vec::new()),
                })
                .unwrap();
            app.drain_events();
            assert_eq!(app.state.categories, CategoryListState::Loaded(Vec::new()));
        }
    }

    mod messages {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_success_message_prefers_id() {
            let created = CategoryCreated {
                success: true,
                message: Some("Category successfully created!".to_string()),
                category_id: Some(3),
            };
            assert_eq!(success_message(Some(&created)), "Category added (id 3)");
        }

        #[test]
        fn test_success_message_falls_back_to_server_message() {
            let created = CategoryCreated {
                message: Some("Created".to_string()),
                ..Default::default()
            };
            assert_eq!(success_message(Some(&created)), "Created");
        }

        #[test]
        fn test_success_message_without_body() {
            assert_eq!(success_message(None), "Category added");
        }
    }
}
