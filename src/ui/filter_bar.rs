use crate::app::AppState;
use crate::ui::styles::{hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the current filter and sort selections
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Status: ", hint_style()),
        Span::styled(app.selection.status.label(), title_style()),
        Span::styled("   Priority: ", hint_style()),
        Span::styled(app.selection.priority.label(), title_style()),
        Span::styled("   Sort: ", hint_style()),
        Span::styled(app.selection.sort.label(), title_style()),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
