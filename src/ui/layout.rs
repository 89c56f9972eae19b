use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Board layout structure
pub struct BoardLayout {
    pub keybindings_area: Rect,
    pub quote_area: Rect,
    pub progress_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub banner_area: Rect,
}

/// Create the board layout
/// - Top bar: keybindings (1 row)
/// - Quote pane (4 rows)
/// - Progress gauge (3 rows)
/// - Filter bar (1 row)
/// - Task list (remaining space)
/// - Banner line (1 row)
pub fn create_board_layout(area: Rect) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(4), // Quote pane
            Constraint::Length(3), // Progress gauge
            Constraint::Length(1), // Filter bar
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Banner line
        ])
        .split(area);

    BoardLayout {
        keybindings_area: chunks[0],
        quote_area: chunks[1],
        progress_area: chunks[2],
        filter_area: chunks[3],
        list_area: chunks[4],
        banner_area: chunks[5],
    }
}

/// Create a centered modal area (for the add-task form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(14),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Create a centered area for the login/register forms
pub fn create_auth_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
