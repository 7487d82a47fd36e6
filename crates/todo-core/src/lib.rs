//! Todo Core - file-backed task list
//!
//! This crate provides the core functionality for the todo service:
//!
//! - **Model**: the `Todo` item and the create/update request shapes
//! - **Store**: an in-memory list synchronized to a single JSON file
//! - **Error**: validation, lookup, and persistence failures
//!
//! # Persistence
//!
//! The store keeps the authoritative collection in memory behind one lock
//! and rewrites the whole file after every successful mutation:
//!
//! ```text
//! request → lock → mutate → save snapshot → unlock
//! ```

pub mod error;
pub mod model;
pub mod store;

pub use error::{PersistenceError, Result, TodoError};
pub use model::{CreateTodoRequest, Todo, UpdateTodoRequest};
pub use store::TodoStore;
