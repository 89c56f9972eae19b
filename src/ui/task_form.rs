use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add-task form
pub fn render_task_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.task_form {
        let modal_area = create_modal_area(area);
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::raw(""));

        let name_label = if form.editing_field == 0 {
            "Name: (editing)"
        } else {
            "Name:"
        };
        lines.push(Line::raw(name_label));
        lines.push(value_line(&form.name, form.editing_field == 0));
        lines.push(Line::raw(""));

        let deadline_label = if form.editing_field == 1 {
            "Deadline (YYYY-MM-DD): (editing)"
        } else {
            "Deadline (YYYY-MM-DD):"
        };
        lines.push(Line::raw(deadline_label));
        lines.push(value_line(&form.deadline, form.editing_field == 1));
        lines.push(Line::raw(""));

        let priority_label = if form.editing_field == 2 {
            "Priority: (←/→ to choose)"
        } else {
            "Priority:"
        };
        lines.push(Line::raw(priority_label));
        let priority_text = form
            .priority
            .map(|p| p.label())
            .unwrap_or("(not chosen)");
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(priority_text, modal_title_style()),
        ]));
        lines.push(Line::raw(""));

        lines.push(Line::raw("Tab to switch fields  ·  Enter to submit  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

fn value_line(value: &str, active: bool) -> Line<'static> {
    Line::from(vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
        if active {
            Span::styled("█", modal_title_style())
        } else {
            Span::raw("")
        },
    ])
}
