use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used for sorting: High(3) > Medium(2) > Low(1)
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

}

/// Completion-status filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    /// Whether a task with the given completed flag passes this filter
    pub fn matches(&self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Completed => completed,
            Self::Pending => !completed,
        }
    }

    /// Advance to the next filter value (for the filter-bar key)
    pub fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Completed => Self::Pending,
            Self::Pending => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }
}

/// Priority filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Whether a task with the given priority passes this filter
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(p) => *p == priority,
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Only(Priority::Low),
            Self::Only(Priority::Low) => Self::Only(Priority::Medium),
            Self::Only(Priority::Medium) => Self::Only(Priority::High),
            Self::Only(Priority::High) => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(p) => p.label(),
        }
    }
}

/// Sort key for the visible task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Insertion order preserved
    #[default]
    None,
    DeadlineAsc,
    DeadlineDesc,
    PriorityAsc,
    PriorityDesc,
}

impl SortKey {
    pub fn cycle(&self) -> Self {
        match self {
            Self::None => Self::DeadlineAsc,
            Self::DeadlineAsc => Self::DeadlineDesc,
            Self::DeadlineDesc => Self::PriorityAsc,
            Self::PriorityAsc => Self::PriorityDesc,
            Self::PriorityDesc => Self::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::DeadlineAsc => "Deadline ↑",
            Self::DeadlineDesc => "Deadline ↓",
            Self::PriorityAsc => "Priority ↑",
            Self::PriorityDesc => "Priority ↓",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Login,
    Register,
    Board,
    AddingTask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
        assert_eq!(Priority::High.rank(), 3);
        assert_eq!(Priority::Medium.rank(), 2);
        assert_eq!(Priority::Low.rank(), 1);
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::High.label(), "High");
        assert_eq!(Priority::Medium.label(), "Medium");
        assert_eq!(Priority::Low.label(), "Low");
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(true));
        assert!(StatusFilter::All.matches(false));
        assert!(StatusFilter::Completed.matches(true));
        assert!(!StatusFilter::Completed.matches(false));
        assert!(StatusFilter::Pending.matches(false));
        assert!(!StatusFilter::Pending.matches(true));
    }

    #[test]
    fn test_priority_filter_matches() {
        assert!(PriorityFilter::All.matches(Priority::Low));
        assert!(PriorityFilter::Only(Priority::High).matches(Priority::High));
        assert!(!PriorityFilter::Only(Priority::High).matches(Priority::Medium));
    }

    #[test]
    fn test_filter_cycles_return_to_start() {
        let mut status = StatusFilter::All;
        for _ in 0..3 {
            status = status.cycle();
        }
        assert_eq!(status, StatusFilter::All);

        let mut priority = PriorityFilter::All;
        for _ in 0..4 {
            priority = priority.cycle();
        }
        assert_eq!(priority, PriorityFilter::All);

        let mut sort = SortKey::None;
        for _ in 0..5 {
            sort = sort.cycle();
        }
        assert_eq!(sort, SortKey::None);
    }
}
