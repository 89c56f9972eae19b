use super::enums::{PriorityFilter, SortKey, StatusFilter};
use super::task::Task;

/// Ephemeral filter and sort selections; never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub sort: SortKey,
}

/// Derive the render-ready task list from the full store.
///
/// Filters always run against the full sequence; the sort is stable and is
/// skipped entirely for `SortKey::None`, preserving insertion order. The
/// input is never mutated.
pub fn visible_tasks(tasks: &[Task], selection: &Selection) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|t| selection.status.matches(t.completed))
        .filter(|t| selection.priority.matches(t.priority))
        .cloned()
        .collect();

    match selection.sort {
        SortKey::None => {}
        SortKey::DeadlineAsc => visible.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
        SortKey::DeadlineDesc => visible.sort_by(|a, b| b.deadline.cmp(&a.deadline)),
        SortKey::PriorityAsc => visible.sort_by(|a, b| a.priority.rank().cmp(&b.priority.rank())),
        SortKey::PriorityDesc => visible.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
    }

    visible
}

/// Completion percentage over the *unfiltered* task list, rounded to the
/// nearest whole percent; 0 when the list is empty
pub fn progress_percent(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.completed).count();
    ((completed as f64 / tasks.len() as f64) * 100.0).round() as u8
}
