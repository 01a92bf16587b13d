pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod task_api;

pub use error::AppError;
pub use model::{Category, Priority, Task, TaskDraft};
pub use storage::{Backend, JsonFileBackend, MemoryBackend};
pub use task_api::{Change, Identifier, InsertOrder, StoreEvent, Summary, TaskFilter, TaskStore};
