use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    badge_style, border_style, completed_style, default_style, meta_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible();

    let items: Vec<ListItem> = if visible.is_empty() {
        // Placeholder row when the filtered view is empty
        vec![ListItem::new(vec![
            Line::styled("No tasks to show", default_style()),
            Line::styled("Add tasks to get started", meta_style()),
        ])]
    } else {
        visible
            .iter()
            .enumerate()
            .map(|(idx, task)| task_row(task, idx == app.selected_index))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Tasks ", title_style())),
    );

    f.render_widget(list, area);
}

fn task_row(task: &Task, selected: bool) -> ListItem<'static> {
    let name_style = if selected {
        selected_style()
    } else if task.completed {
        completed_style()
    } else {
        default_style()
    };

    let check = if task.completed { "[✓] " } else { "[ ] " };
    let name_line = Line::from(vec![
        Span::styled(check, name_style),
        Span::styled(task.name.clone(), name_style),
        Span::raw("  "),
        Span::styled(task.priority.label(), badge_style(task.priority)),
    ]);

    let meta_line = Line::styled(
        format!(
            "    Deadline: {} | Priority: {}",
            task.deadline.format("%Y-%m-%d"),
            task.priority.label()
        ),
        meta_style(),
    );

    ListItem::new(vec![name_line, meta_line])
}
