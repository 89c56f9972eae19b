pub mod files;
pub mod store;

pub use files::{
    atomic_write, ensure_data_dir, get_data_dir, init_local_dir, read_file, tasks_file,
    users_file,
};
pub use store::{CredentialStore, TaskStore};
