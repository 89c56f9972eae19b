use crate::domain::{
    authenticate, progress_percent, validate_new_task, validate_registration, Priority, Selection,
    Task, TaskInput, UiMode,
};
use crate::persistence::{CredentialStore, TaskStore};
use crate::quotes::{FetchOutcome, Quote, QuoteFetcher, QuoteRotation};
use chrono::Local;
use std::time::{Duration, Instant};

/// How long a success banner stays visible
const SUCCESS_BANNER_MS: u64 = 1400;

/// Transient user-facing message kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// Transient user-facing message shown under the board or form
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub kind: BannerKind,
    shown_at: Instant,
}

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub editing_field: usize, // 0 = username, 1 = password
}

/// Registration form state
#[derive(Debug, Clone, Default)]
pub struct RegisterFormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub editing_field: usize, // 0..=3
}

/// Add-task form state
#[derive(Debug, Clone, Default)]
pub struct TaskFormState {
    pub name: String,
    pub deadline: String,
    pub priority: Option<Priority>,
    pub editing_field: usize, // 0 = name, 1 = deadline, 2 = priority
}

/// Main application state
pub struct AppState {
    pub ui_mode: UiMode,
    pub credentials: CredentialStore,
    pub store: TaskStore,
    pub session_user: Option<String>,
    pub selection: Selection,
    pub selected_index: usize,
    pub login_form: LoginFormState,
    pub register_form: RegisterFormState,
    pub task_form: Option<TaskFormState>,
    pub banner: Option<Banner>,
    pub quote: Option<Quote>,
    pub quote_pending: bool,
    fetcher: QuoteFetcher,
    rotation: QuoteRotation,
}

impl AppState {
    pub fn new(credentials: CredentialStore, store: TaskStore) -> Self {
        Self {
            ui_mode: UiMode::Login,
            credentials,
            store,
            session_user: None,
            selection: Selection::default(),
            selected_index: 0,
            login_form: LoginFormState::default(),
            register_form: RegisterFormState::default(),
            task_form: None,
            banner: None,
            quote: None,
            quote_pending: false,
            fetcher: QuoteFetcher::new(),
            rotation: QuoteRotation::new(),
        }
    }

    /// The render-ready task list for the current selection
    pub fn visible(&self) -> Vec<Task> {
        crate::domain::visible_tasks(self.store.tasks(), &self.selection)
    }

    /// Completion percentage over the full store
    pub fn progress(&self) -> u8 {
        progress_percent(self.store.tasks())
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.banner = Some(Banner {
            text: text.into(),
            kind: BannerKind::Error,
            shown_at: Instant::now(),
        });
    }

    pub fn show_success(&mut self, text: impl Into<String>) {
        self.banner = Some(Banner {
            text: text.into(),
            kind: BannerKind::Success,
            shown_at: Instant::now(),
        });
    }

    fn clear_banner(&mut self) {
        self.banner = None;
    }

    /// Attempt login with the current form contents
    pub fn submit_login(&mut self) {
        self.clear_banner();

        let outcome = authenticate(
            self.credentials.users(),
            &self.login_form.username,
            &self.login_form.password,
        )
        .map(|user| user.username.clone());

        match outcome {
            Ok(username) => {
                self.session_user = Some(username);
                self.login_form = LoginFormState::default();
                self.ui_mode = UiMode::Board;
                self.request_quote();
            }
            Err(err) => self.show_error(err.to_string()),
        }
    }

    /// Attempt registration with the current form contents
    pub fn submit_registration(&mut self) {
        self.clear_banner();

        let input = crate::domain::RegistrationInput {
            username: self.register_form.username.clone(),
            email: self.register_form.email.clone(),
            password: self.register_form.password.clone(),
            confirm: self.register_form.confirm.clone(),
        };

        match validate_registration(self.credentials.users(), &input) {
            Ok(user) => {
                if let Err(err) = self.credentials.add(user) {
                    self.show_error(format!("Could not save account: {err}"));
                    return;
                }
                self.register_form = RegisterFormState::default();
                self.ui_mode = UiMode::Login;
                self.show_success("Registered successfully! Sign in to continue.");
            }
            Err(err) => self.show_error(err.to_string()),
        }
    }

    /// Return to the login screen, keeping the stores
    pub fn logout(&mut self) {
        self.session_user = None;
        self.login_form = LoginFormState::default();
        self.task_form = None;
        self.clear_banner();
        self.ui_mode = UiMode::Login;
    }

    pub fn open_task_form(&mut self) {
        self.task_form = Some(TaskFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn cancel_task_form(&mut self) {
        self.task_form = None;
        self.ui_mode = UiMode::Board;
    }

    /// Validate and append the task described by the form.
    ///
    /// On rejection the form contents stay put for correction; on success
    /// the fields are cleared and the form closes.
    pub fn submit_task(&mut self) {
        self.clear_banner();

        let Some(form) = &self.task_form else {
            return;
        };
        let input = TaskInput {
            name: form.name.clone(),
            deadline: form.deadline.clone(),
            priority: form.priority,
        };

        let today = Local::now().date_naive();
        match validate_new_task(self.store.tasks(), &input, today) {
            Ok(task) => {
                if let Err(err) = self.store.add(task) {
                    self.show_error(format!("Could not save tasks: {err}"));
                    return;
                }
                self.task_form = None;
                self.ui_mode = UiMode::Board;
                self.show_success("Task added successfully");
            }
            Err(err) => self.show_error(err.to_string()),
        }
    }

    /// Flip the completed flag of the selected visible task
    pub fn toggle_selected_completed(&mut self) {
        self.clear_banner();

        let Some(id) = self.selected_id() else {
            return;
        };
        match self.store.toggle_completed(&id) {
            Ok(Some(true)) => self.show_success("Task marked completed"),
            Ok(Some(false)) => self.show_success("Marked as pending"),
            Ok(None) => {}
            Err(err) => self.show_error(format!("Could not save tasks: {err}")),
        }
        self.clamp_selection();
    }

    /// Delete the selected visible task
    pub fn delete_selected(&mut self) {
        self.clear_banner();

        let Some(id) = self.selected_id() else {
            return;
        };
        match self.store.remove(&id) {
            Ok(true) => self.show_success("Task deleted"),
            Ok(false) => {}
            Err(err) => self.show_error(format!("Could not save tasks: {err}")),
        }
        self.clamp_selection();
    }

    fn selected_id(&self) -> Option<String> {
        self.visible()
            .get(self.selected_index)
            .map(|t| t.id.clone())
    }

    pub fn cycle_status_filter(&mut self) {
        self.selection.status = self.selection.status.cycle();
        self.clamp_selection();
    }

    pub fn cycle_priority_filter(&mut self) {
        self.selection.priority = self.selection.priority.cycle();
        self.clamp_selection();
    }

    pub fn cycle_sort(&mut self) {
        self.selection.sort = self.selection.sort.cycle();
        self.clamp_selection();
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible().len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Kick off a quote request, superseding any still in flight
    pub fn request_quote(&mut self) {
        self.quote_pending = true;
        self.fetcher.request();
    }

    /// Per-tick housekeeping: drain quote results, expire success banners
    pub fn tick(&mut self) {
        if let Some(outcome) = self.fetcher.poll() {
            self.quote_pending = false;
            self.quote = Some(match outcome {
                FetchOutcome::Fetched(quote) => quote,
                FetchOutcome::Failed => self.rotation.next(),
            });
        }

        if let Some(banner) = &self.banner {
            let expired = banner.kind == BannerKind::Success
                && banner.shown_at.elapsed() > Duration::from_millis(SUCCESS_BANNER_MS);
            if expired {
                self.banner = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriorityFilter, StatusFilter};
    use tempfile::tempdir;

    fn app_with_dir(dir: &std::path::Path) -> AppState {
        let credentials = CredentialStore::load(dir.join("users.json"));
        let store = TaskStore::load(dir.join("tasks.json"));
        AppState::new(credentials, store)
    }

    fn add_task(app: &mut AppState, name: &str, deadline: &str, priority: Priority) {
        app.open_task_form();
        {
            let form = app.task_form.as_mut().unwrap();
            form.name = name.to_string();
            form.deadline = deadline.to_string();
            form.priority = Some(priority);
        }
        app.submit_task();
    }

    #[test]
    fn test_register_login_flow() {
        let dir = tempdir().unwrap();
        let mut app = app_with_dir(dir.path());

        app.ui_mode = UiMode::Register;
        app.register_form.username = "ana".to_string();
        app.register_form.email = "ana@mail.com".to_string();
        app.register_form.password = "s3cret".to_string();
        app.register_form.confirm = "s3cret".to_string();
        app.submit_registration();

        assert_eq!(app.ui_mode, UiMode::Login);
        assert_eq!(
            app.banner.as_ref().map(|b| b.kind),
            Some(BannerKind::Success)
        );

        app.login_form.username = "ana".to_string();
        app.login_form.password = "s3cret".to_string();
        app.submit_login();
        assert_eq!(app.ui_mode, UiMode::Board);
        assert_eq!(app.session_user.as_deref(), Some("ana"));
    }

    #[test]
    fn test_login_failure_keeps_login_screen() {
        let dir = tempdir().unwrap();
        let mut app = app_with_dir(dir.path());

        app.login_form.username = "ghost".to_string();
        app.login_form.password = "nope".to_string();
        app.submit_login();

        assert_eq!(app.ui_mode, UiMode::Login);
        let banner = app.banner.as_ref().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, "Invalid username or password");
    }

    #[test]
    fn test_submit_task_appends_and_closes_form() {
        let dir = tempdir().unwrap();
        let mut app = app_with_dir(dir.path());

        add_task(&mut app, "Buy milk", "2099-01-01", Priority::High);

        assert!(app.task_form.is_none());
        assert_eq!(app.ui_mode, UiMode::Board);
        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.store.tasks()[0].name, "Buy milk");
    }

    #[test]
    fn test_rejected_task_preserves_form_for_correction() {
        let dir = tempdir().unwrap();
        let mut app = app_with_dir(dir.path());

        add_task(&mut app, "Buy milk", "2099-01-01", Priority::High);
        add_task(&mut app, "Buy milk", "2099-01-01", Priority::Low);

        // Second submission is a duplicate: store unchanged, form still open
        assert_eq!(app.store.tasks().len(), 1);
        let form = app.task_form.as_ref().unwrap();
        assert_eq!(form.name, "Buy milk");
        assert_eq!(
            app.banner.as_ref().map(|b| b.kind),
            Some(BannerKind::Error)
        );
    }

    #[test]
    fn test_toggle_and_delete_act_on_filtered_view() {
        let dir = tempdir().unwrap();
        let mut app = app_with_dir(dir.path());

        add_task(&mut app, "Low one", "2099-01-01", Priority::Low);
        add_task(&mut app, "High one", "2099-01-02", Priority::High);
        add_task(&mut app, "Low two", "2099-01-03", Priority::Low);

        // Filter down to High; the only visible row is "High one"
        app.selection.priority = PriorityFilter::Only(Priority::High);
        app.selected_index = 0;
        app.toggle_selected_completed();

        let high = app
            .store
            .tasks()
            .iter()
            .find(|t| t.name == "High one")
            .unwrap();
        assert!(high.completed);
        assert!(app.store.tasks().iter().filter(|t| t.name != "High one").all(|t| !t.completed));

        app.delete_selected();
        assert_eq!(app.store.tasks().len(), 2);
        assert!(app.store.tasks().iter().all(|t| t.name != "High one"));
    }

    #[test]
    fn test_selection_clamped_when_view_shrinks() {
        let dir = tempdir().unwrap();
        let mut app = app_with_dir(dir.path());

        add_task(&mut app, "A", "2099-01-01", Priority::Low);
        add_task(&mut app, "B", "2099-01-02", Priority::Low);
        app.selected_index = 1;

        app.delete_selected();
        assert_eq!(app.selected_index, 0);

        // Filtering to an empty view resets the cursor
        app.selection.status = StatusFilter::Completed;
        app.clamp_selection();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_progress_follows_store_not_view() {
        let dir = tempdir().unwrap();
        let mut app = app_with_dir(dir.path());

        add_task(&mut app, "A", "2099-01-01", Priority::Low);
        add_task(&mut app, "B", "2099-01-02", Priority::Low);
        app.selected_index = 0;
        app.toggle_selected_completed();

        app.selection.status = StatusFilter::Pending;
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.progress(), 50);
    }

    #[test]
    fn test_logout_returns_to_login_and_keeps_tasks() {
        let dir = tempdir().unwrap();
        let mut app = app_with_dir(dir.path());

        add_task(&mut app, "A", "2099-01-01", Priority::Low);
        app.session_user = Some("ana".to_string());
        app.ui_mode = UiMode::Board;

        app.logout();
        assert_eq!(app.ui_mode, UiMode::Login);
        assert!(app.session_user.is_none());
        assert_eq!(app.store.tasks().len(), 1);
    }
}
