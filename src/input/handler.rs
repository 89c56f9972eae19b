use crate::app::AppState;
use crate::domain::{Priority, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns Ok(true) when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Login => handle_login_mode(app, key),
        UiMode::Register => handle_register_mode(app, key),
        UiMode::Board => handle_board_mode(app, key),
        UiMode::AddingTask => handle_task_form_mode(app, key),
    }
}

/// Handle keys on the login screen
fn handle_login_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => Ok(true),
        KeyCode::Enter => {
            app.submit_login();
            Ok(false)
        }
        // Tab or arrows switch between the two fields
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            app.login_form.editing_field = (app.login_form.editing_field + 1) % 2;
            Ok(false)
        }
        // F2 opens the registration screen
        KeyCode::F(2) => {
            app.ui_mode = UiMode::Register;
            Ok(false)
        }
        KeyCode::Backspace => {
            match app.login_form.editing_field {
                0 => app.login_form.username.pop(),
                _ => app.login_form.password.pop(),
            };
            Ok(false)
        }
        KeyCode::Char(c) => {
            match app.login_form.editing_field {
                0 => app.login_form.username.push(c),
                _ => app.login_form.password.push(c),
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys on the registration screen
fn handle_register_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Back to login without registering
        KeyCode::Esc => {
            app.ui_mode = UiMode::Login;
            Ok(false)
        }
        KeyCode::Enter => {
            app.submit_registration();
            Ok(false)
        }
        KeyCode::Tab | KeyCode::Down => {
            app.register_form.editing_field = (app.register_form.editing_field + 1) % 4;
            Ok(false)
        }
        KeyCode::Up => {
            app.register_form.editing_field = (app.register_form.editing_field + 3) % 4;
            Ok(false)
        }
        KeyCode::Backspace => {
            register_field_mut(app).pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            register_field_mut(app).push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn register_field_mut(app: &mut AppState) -> &mut String {
    let form = &mut app.register_form;
    match form.editing_field {
        0 => &mut form.username,
        1 => &mut form.email,
        2 => &mut form.password,
        _ => &mut form.confirm,
    }
}

/// Handle keys on the task board
fn handle_board_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        // Back to the login screen
        KeyCode::Esc => {
            app.logout();
            Ok(false)
        }

        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completed
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected_completed();
            Ok(false)
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_task_form();
            Ok(false)
        }

        // Filters and sort
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.cycle_status_filter();
            Ok(false)
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.cycle_priority_filter();
            Ok(false)
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.cycle_sort();
            Ok(false)
        }

        // New quote
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.request_quote();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the add-task form
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let Some(form) = app.task_form.as_mut() else {
        app.ui_mode = UiMode::Board;
        return Ok(false);
    };

    match key.code {
        KeyCode::Esc => {
            app.cancel_task_form();
            Ok(false)
        }
        KeyCode::Enter => {
            app.submit_task();
            Ok(false)
        }
        KeyCode::Tab | KeyCode::Down => {
            form.editing_field = (form.editing_field + 1) % 3;
            Ok(false)
        }
        KeyCode::Up => {
            form.editing_field = (form.editing_field + 2) % 3;
            Ok(false)
        }
        // Priority is chosen with left/right on the third field
        KeyCode::Left | KeyCode::Right if form.editing_field == 2 => {
            form.priority = Some(match (form.priority, key.code) {
                (None, _) => Priority::Medium,
                (Some(Priority::Low), KeyCode::Right) => Priority::Medium,
                (Some(Priority::Medium), KeyCode::Right) => Priority::High,
                (Some(Priority::High), KeyCode::Right) => Priority::Low,
                (Some(Priority::Low), KeyCode::Left) => Priority::High,
                (Some(Priority::Medium), KeyCode::Left) => Priority::Low,
                (Some(Priority::High), KeyCode::Left) => Priority::Medium,
                (Some(p), _) => p,
            });
            Ok(false)
        }
        KeyCode::Backspace => {
            match form.editing_field {
                0 => form.name.pop(),
                1 => form.deadline.pop(),
                _ => None,
            };
            Ok(false)
        }
        KeyCode::Char(c) => {
            match form.editing_field {
                0 => form.name.push(c),
                1 => form.deadline.push(c),
                _ => {}
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}
