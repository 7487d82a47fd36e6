//! File-backed todo store
//!
//! Holds the ordered item list and the id counter behind a single mutex and
//! rewrites the whole JSON file after each successful mutation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Result, TodoError};
use crate::model::{Todo, UpdateTodoRequest};

/// Mutable state guarded by the store lock
#[derive(Debug)]
struct StoreState {
    todos: Vec<Todo>,
    next_id: u64,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    fn from_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { todos, next_id }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }
}

/// Todo collection synchronized to a JSON file
///
/// Every operation, including [`TodoStore::list`], holds the lock for its
/// full duration. On a failed save the in-memory change is rolled back so
/// memory and disk stay in agreement; the id counter is never rewound.
#[derive(Debug)]
pub struct TodoStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl TodoStore {
    /// Open the store at `path`, loading any existing items
    ///
    /// The parent directory is created when missing. A missing or empty file
    /// yields an empty store; content that does not parse as a list of todos
    /// is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = load(&path)?;

        tracing::debug!(
            path = %path.display(),
            count = state.todos.len(),
            next_id = state.next_id,
            "Loaded todo store"
        );

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.lock().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all todos in insertion order
    pub fn list(&self) -> Vec<Todo> {
        self.lock().todos.clone()
    }

    /// Create a todo with the next id
    pub fn create(&self, title: impl Into<String>) -> Result<Todo> {
        let title = title.into();
        if title.is_empty() {
            return Err(TodoError::title_required());
        }

        let mut state = self.lock();
        let todo = Todo::new(state.next_id, title);
        state.next_id += 1;
        state.todos.push(todo.clone());

        if let Err(e) = self.save(&state.todos) {
            state.todos.pop();
            return Err(e);
        }

        tracing::debug!(id = todo.id, "Created todo");
        Ok(todo)
    }

    /// Apply the supplied fields to an existing todo
    pub fn update(&self, id: u64, request: UpdateTodoRequest) -> Result<Todo> {
        let mut state = self.lock();
        let idx = state.position(id).ok_or(TodoError::NotFound(id))?;

        if request.title.as_deref() == Some("") {
            return Err(TodoError::title_required());
        }

        let previous = state.todos[idx].clone();
        let todo = &mut state.todos[idx];
        if let Some(title) = request.title {
            todo.title = title;
        }
        if let Some(completed) = request.completed {
            todo.completed = completed;
        }

        if let Err(e) = self.save(&state.todos) {
            state.todos[idx] = previous;
            return Err(e);
        }

        tracing::debug!(id, "Updated todo");
        Ok(state.todos[idx].clone())
    }

    /// Remove a todo, keeping the order of the rest
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut state = self.lock();
        let idx = state.position(id).ok_or(TodoError::NotFound(id))?;

        let removed = state.todos.remove(idx);
        if let Err(e) = self.save(&state.todos) {
            state.todos.insert(idx, removed);
            return Err(e);
        }

        tracing::debug!(id, "Deleted todo");
        Ok(())
    }

    // Poisoning is ignored: mutations are rolled back before the guard drops.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write the full list to a sibling temp file, then rename over the target
    fn save(&self, todos: &[Todo]) -> Result<()> {
        let payload = serde_json::to_string_pretty(todos)?;
        let temp_path = temp_path(&self.path);

        let written =
            fs::write(&temp_path, payload).and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to save todos");
            return Err(e.into());
        }

        Ok(())
    }
}

fn load(path: &Path) -> Result<StoreState> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreState::empty()),
        Err(e) => return Err(e.into()),
    };

    if data.is_empty() {
        return Ok(StoreState::empty());
    }

    // `null` is accepted as an empty list
    let todos: Option<Vec<Todo>> = serde_json::from_slice(&data)?;
    Ok(StoreState::from_todos(todos.unwrap_or_default()))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
