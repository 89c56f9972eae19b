use crate::domain::{Task, User};
use crate::persistence::files::{atomic_write, read_file};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Owns the authoritative task sequence and its on-disk JSON copy.
///
/// Every mutation rewrites the whole file (last-writer-wins, no merge);
/// there is exactly one writer in this system.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the store from disk. An absent or malformed file yields an empty
    /// store; parse failures are swallowed, not surfaced.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let tasks = read_json_or_empty(&path);
        Self { path, tasks }
    }

    /// The full, unfiltered task sequence in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a task and persist
    pub fn add(&mut self, task: Task) -> Result<()> {
        self.tasks.push(task);
        self.save()
    }

    /// Remove the task with the given id and persist. Returns false when no
    /// task carries that id.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Flip the completed flag of the task with the given id and persist.
    /// Returns the new flag, or None when no task carries that id.
    pub fn toggle_completed(&mut self, id: &str) -> Result<Option<bool>> {
        let flipped = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                task.completed
            }
            None => return Ok(None),
        };
        self.save()?;
        Ok(Some(flipped))
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tasks)?;
        atomic_write(&self.path, &json)
    }
}

/// Registered accounts backed by a JSON file; append-only
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    users: Vec<User>,
}

impl CredentialStore {
    /// Load the store from disk; absent or malformed content yields no users
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let users = read_json_or_empty(&path);
        Self { path, users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Append a user record and persist
    pub fn add(&mut self, user: User) -> Result<()> {
        self.users.push(user);
        let json = serde_json::to_string_pretty(&self.users)?;
        atomic_write(&self.path, &json)
    }
}

fn read_json_or_empty<T: serde::de::DeserializeOwned>(path: &Path) -> Vec<T> {
    let raw = read_file(path).unwrap_or_default();
    if raw.is_empty() {
        return Vec::new();
    }
    serde_json::from_str(&raw).unwrap_or_default()
}
