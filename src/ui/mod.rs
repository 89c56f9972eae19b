pub mod auth_form;
pub mod banner;
pub mod filter_bar;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod progress_pane;
pub mod quote_pane;
pub mod styles;
pub mod task_form;

use crate::app::AppState;
use crate::domain::UiMode;
use auth_form::{render_login_form, render_register_form};
use banner::render_banner;
use filter_bar::render_filter_bar;
use keybindings::render_keybindings;
use layout::create_board_layout;
use list_pane::render_list_pane;
use progress_pane::render_progress_pane;
use quote_pane::render_quote_pane;
use ratatui::layout::Rect;
use ratatui::Frame;
use task_form::render_task_form;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    match app.ui_mode {
        UiMode::Login => {
            render_login_form(f, app, size);
            render_banner(f, app, bottom_line(size));
        }
        UiMode::Register => {
            render_register_form(f, app, size);
            render_banner(f, app, bottom_line(size));
        }
        UiMode::Board | UiMode::AddingTask => {
            let layout = create_board_layout(size);

            render_keybindings(f, layout.keybindings_area);
            render_quote_pane(f, app, layout.quote_area);
            render_progress_pane(f, app, layout.progress_area);
            render_filter_bar(f, app, layout.filter_area);
            render_list_pane(f, app, layout.list_area);
            render_banner(f, app, layout.banner_area);

            // The add-task form floats over the board
            if app.ui_mode == UiMode::AddingTask {
                render_task_form(f, app, size);
            }
        }
    }
}

fn bottom_line(area: Rect) -> Rect {
    Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1)
}
