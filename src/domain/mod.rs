pub mod enums;
pub mod task;
pub mod user;
pub mod views;

pub use enums::{Priority, PriorityFilter, SortKey, StatusFilter, UiMode};
pub use task::{validate_new_task, Task, TaskError, TaskInput};
pub use user::{authenticate, validate_registration, AuthError, RegistrationInput, User};
pub use views::{progress_percent, visible_tasks, Selection};
