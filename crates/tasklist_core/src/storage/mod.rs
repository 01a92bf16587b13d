use crate::error::AppError;
use crate::model::Task;
use std::sync::{Mutex, PoisonError};

pub mod json_store;

pub use json_store::JsonFileBackend;

/// Durable medium holding the whole task collection. Every save replaces
/// what was stored before.
pub trait Backend {
    fn load(&self) -> Result<Vec<Task>, AppError>;

    fn save(&self, tasks: &[Task]) -> Result<(), AppError>;
}

/// Keeps the collection in process memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tasks: Mutex<Vec<Task>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
        }
    }
}

impl Backend for MemoryBackend {
    fn load(&self) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(tasks.clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), AppError> {
        let mut stored = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        *stored = tasks.to_vec();
        Ok(())
    }
}
