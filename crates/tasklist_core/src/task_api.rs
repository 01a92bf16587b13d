use crate::config::Config;
use crate::error::AppError;
use crate::model::{Task, TaskDraft};
use crate::storage::{Backend, JsonFileBackend, json_store};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Where `create` places a new task in the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOrder {
    #[default]
    Append,
    Prepend,
}

impl FromStr for InsertOrder {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "prepend" => Ok(Self::Prepend),
            other => Err(AppError::validation(format!(
                "insert_order must be 'append' or 'prepend', got '{other}'"
            ))),
        }
    }
}

/// How `update` and `delete` locate tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Id(u64),
    /// Exact match on the stored task text.
    Text(String),
}

impl Identifier {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Id(id) => task.id == *id,
            Self::Text(text) => task.text == *text,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        match self {
            Self::Text(text) if text.trim().is_empty() => {
                Err(AppError::validation("text is required"))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Text(text) => write!(f, "text '{text}'"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(AppError::validation(format!("unknown filter '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

/// What a mutating call did to the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    Created { id: u64 },
    Updated { id: u64 },
    Deleted { ids: Vec<u64> },
    Toggled { id: u64, completed: bool },
    Unchanged,
}

/// Result of a mutating call together with the event describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change<T> {
    pub value: T,
    pub event: StoreEvent,
}

impl<T> Change<T> {
    fn new(value: T, event: StoreEvent) -> Self {
        Self { value, event }
    }

    pub fn is_unchanged(&self) -> bool {
        self.event == StoreEvent::Unchanged
    }
}

/// Owns the task collection. Each operation reads the whole collection,
/// mutates it and writes it back while holding the store lock.
#[derive(Debug)]
pub struct TaskStore<B> {
    backend: B,
    insert_order: InsertOrder,
    lock: Mutex<()>,
}

impl TaskStore<JsonFileBackend> {
    /// Opens the file-backed store described by `config`.
    pub fn open(config: &Config) -> Result<Self, AppError> {
        let path = json_store::store_path(config.store_path.as_deref())?;
        Ok(Self::open_at(path, config))
    }

    /// Opens the store at an already resolved `path`, taking the rest of
    /// the settings from `config`.
    pub fn open_at(path: PathBuf, config: &Config) -> Self {
        tracing::debug!(path = %path.display(), "opening task store");
        Self::new(JsonFileBackend::new(path)).with_insert_order(config.insert_order)
    }
}

impl<B: Backend> TaskStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            insert_order: InsertOrder::default(),
            lock: Mutex::new(()),
        }
    }

    pub fn with_insert_order(mut self, insert_order: InsertOrder) -> Self {
        self.insert_order = insert_order;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn locked(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Result<Vec<Task>, AppError> {
        let _guard = self.locked();
        self.backend.load()
    }

    pub fn list_filtered(&self, filter: TaskFilter) -> Result<Vec<Task>, AppError> {
        let tasks = self.list()?;
        Ok(tasks.into_iter().filter(|task| filter.matches(task)).collect())
    }

    pub fn get(&self, id: u64) -> Result<Task, AppError> {
        self.list()?
            .into_iter()
            .find(|task| task.id == id)
            .ok_or_else(|| AppError::not_found(format!("task {id} not found")))
    }

    pub fn summary(&self) -> Result<Summary, AppError> {
        let tasks = self.list()?;
        let completed = tasks.iter().filter(|task| task.completed).count();
        Ok(Summary {
            total: tasks.len(),
            completed,
            active: tasks.len() - completed,
        })
    }

    pub fn create(&self, draft: TaskDraft) -> Result<Change<Task>, AppError> {
        let fields = draft.into_fields()?;

        let _guard = self.locked();
        let mut tasks = self.backend.load()?;
        let id = next_id(&tasks)?;
        let task = Task::new(id, now_rfc3339()?, fields);

        match self.insert_order {
            InsertOrder::Append => tasks.push(task.clone()),
            InsertOrder::Prepend => tasks.insert(0, task.clone()),
        }
        self.persist(&tasks)?;

        tracing::info!(id, "task created");
        Ok(Change::new(task, StoreEvent::Created { id }))
    }

    /// Replaces every mutable field of the first task matching
    /// `identifier`. Nothing is written when no task matches.
    pub fn update(
        &self,
        identifier: &Identifier,
        draft: TaskDraft,
    ) -> Result<Change<Task>, AppError> {
        identifier.validate()?;
        let fields = draft.into_fields()?;

        let _guard = self.locked();
        let mut tasks = self.backend.load()?;
        let task = tasks
            .iter_mut()
            .find(|task| identifier.matches(task))
            .ok_or_else(|| AppError::not_found(format!("no task with {identifier}")))?;

        task.replace_fields(fields);
        let updated = task.clone();
        self.persist(&tasks)?;

        tracing::info!(id = updated.id, "task updated");
        Ok(Change::new(
            updated.clone(),
            StoreEvent::Updated { id: updated.id },
        ))
    }

    /// Removes every task matching `identifier` and returns them. Missing
    /// matches are not an error.
    pub fn delete(&self, identifier: &Identifier) -> Result<Change<Vec<Task>>, AppError> {
        identifier.validate()?;

        let _guard = self.locked();
        let tasks = self.backend.load()?;
        let (removed, kept): (Vec<Task>, Vec<Task>) =
            tasks.into_iter().partition(|task| identifier.matches(task));

        if removed.is_empty() {
            tracing::debug!(%identifier, "delete matched nothing");
            return Ok(Change::new(removed, StoreEvent::Unchanged));
        }

        self.persist(&kept)?;

        let ids: Vec<u64> = removed.iter().map(|task| task.id).collect();
        tracing::info!(?ids, "tasks deleted");
        Ok(Change::new(removed, StoreEvent::Deleted { ids }))
    }

    /// Flips `completed`. Returns `None` (and writes nothing) when `id` is
    /// unknown.
    pub fn toggle_completed(&self, id: u64) -> Result<Change<Option<Task>>, AppError> {
        let _guard = self.locked();
        let mut tasks = self.backend.load()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            tracing::debug!(id, "toggle matched nothing");
            return Ok(Change::new(None, StoreEvent::Unchanged));
        };

        task.completed = !task.completed;
        let toggled = task.clone();
        self.persist(&tasks)?;

        tracing::info!(id, completed = toggled.completed, "task toggled");
        let event = StoreEvent::Toggled {
            id,
            completed: toggled.completed,
        };
        Ok(Change::new(Some(toggled), event))
    }

    fn persist(&self, tasks: &[Task]) -> Result<(), AppError> {
        self.backend.save(tasks).inspect_err(|err| {
            tracing::error!(error = %err, "failed to persist task collection");
        })
    }
}

fn next_id(tasks: &[Task]) -> Result<u64, AppError> {
    match tasks.iter().map(|task| task.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| AppError::persistence("task id space exhausted")),
    }
}

fn now_rfc3339() -> Result<String, AppError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| AppError::persistence(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{Identifier, InsertOrder, StoreEvent, Summary, TaskFilter, TaskStore};
    use crate::config::Config;
    use crate::error::AppError;
    use crate::model::{Category, Priority, Task, TaskDraft};
    use crate::storage::{Backend, JsonFileBackend, MemoryBackend};
    use std::sync::Arc;
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    fn memory_store() -> TaskStore<MemoryBackend> {
        TaskStore::new(MemoryBackend::new())
    }

    struct FailingBackend {
        seeded: Vec<Task>,
    }

    impl FailingBackend {
        fn empty() -> Self {
            Self { seeded: Vec::new() }
        }

        fn with_task(text: &str) -> Self {
            let task: Task = serde_json::from_value(serde_json::json!({
                "id": 1,
                "text": text,
                "createdAt": "2025-12-20T00:00:00Z"
            }))
            .unwrap();
            Self { seeded: vec![task] }
        }
    }

    impl Backend for FailingBackend {
        fn load(&self) -> Result<Vec<Task>, AppError> {
            Ok(self.seeded.clone())
        }

        fn save(&self, _tasks: &[Task]) -> Result<(), AppError> {
            Err(AppError::persistence("disk full"))
        }
    }

    #[test]
    fn list_is_empty_before_any_data_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(JsonFileBackend::new(dir.path().join("tasks.json")));

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn create_assigns_id_and_created_at() {
        let store = memory_store();
        let change = store
            .create(
                TaskDraft::new("Buy milk")
                    .category(Category::Shopping)
                    .priority(Priority::Low),
            )
            .unwrap();
        let task = change.value;

        assert_eq!(change.event, StoreEvent::Created { id: 1 });
        assert_eq!(task.id, 1);
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.category, Category::Shopping);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.due_date, None);
        assert!(!task.completed);
        assert!(OffsetDateTime::parse(&task.created_at, &Rfc3339).is_ok());
        assert_eq!(store.list().unwrap(), vec![task]);
    }

    #[test]
    fn create_adds_exactly_one_task() {
        let store = memory_store();
        store.create(TaskDraft::new("first")).unwrap();
        let before = store.list().unwrap().len();

        store.create(TaskDraft::new("second")).unwrap();

        assert_eq!(store.list().unwrap().len(), before + 1);
    }

    #[test]
    fn create_rejects_blank_text_without_writing() {
        let store = memory_store();
        let err = store.create(TaskDraft::new("  \t ")).unwrap_err();

        assert_eq!(err.code(), "validation_error");
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn ids_stay_unique_after_deletes() {
        let store = memory_store();
        store.create(TaskDraft::new("one")).unwrap();
        let two = store.create(TaskDraft::new("two")).unwrap().value;
        store.delete(&Identifier::Id(two.id)).unwrap();
        store.create(TaskDraft::new("three")).unwrap();
        let four = store.create(TaskDraft::new("four")).unwrap().value;

        let mut ids: Vec<u64> = store.list().unwrap().iter().map(|task| task.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(four.id, 3);
    }

    #[test]
    fn prepend_order_puts_new_tasks_first() {
        let store = memory_store().with_insert_order(InsertOrder::Prepend);
        store.create(TaskDraft::new("older")).unwrap();
        store.create(TaskDraft::new("newer")).unwrap();

        let texts: Vec<String> = store.list().unwrap().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["newer", "older"]);
    }

    #[test]
    fn append_order_preserves_insertion_order() {
        let store = memory_store();
        for text in ["a", "b", "c"] {
            store.create(TaskDraft::new(text)).unwrap();
        }

        let texts: Vec<String> = store.list().unwrap().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn update_replaces_mutable_fields_and_keeps_identity() {
        let store = memory_store();
        let original = store.create(TaskDraft::new("draft report")).unwrap().value;

        let change = store
            .update(
                &Identifier::Id(original.id),
                TaskDraft::new("final report")
                    .category(Category::Work)
                    .priority(Priority::High)
                    .due_date("2026-02-01")
                    .completed(true),
            )
            .unwrap();
        let updated = change.value;

        assert_eq!(change.event, StoreEvent::Updated { id: original.id });
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.text, "final report");
        assert_eq!(updated.category, Category::Work);
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.due_date.as_deref(), Some("2026-02-01"));
        assert!(updated.completed);
        assert_eq!(store.list().unwrap(), vec![updated]);
    }

    #[test]
    fn update_is_a_full_replace() {
        let store = memory_store();
        let original = store
            .create(
                TaskDraft::new("gym")
                    .category(Category::Health)
                    .priority(Priority::High)
                    .due_date("2026-03-01"),
            )
            .unwrap()
            .value;

        let updated = store
            .update(&Identifier::Id(original.id), TaskDraft::new("gym"))
            .unwrap()
            .value;

        assert_eq!(updated.category, Category::Personal);
        assert_eq!(updated.priority, Priority::Medium);
        assert_eq!(updated.due_date, None);
    }

    #[test]
    fn update_missing_id_is_not_found_and_leaves_collection() {
        let store = memory_store();
        store.create(TaskDraft::new("keep me")).unwrap();
        let before = store.list().unwrap();

        let err = store
            .update(&Identifier::Id(99), TaskDraft::new("replacement"))
            .unwrap_err();

        assert_eq!(err.code(), "not_found");
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn update_by_text_replaces_first_match() {
        let store = memory_store();
        let first = store.create(TaskDraft::new("duplicate")).unwrap().value;
        let second = store.create(TaskDraft::new("duplicate")).unwrap().value;

        let updated = store
            .update(
                &Identifier::Text("duplicate".to_string()),
                TaskDraft::new("renamed"),
            )
            .unwrap()
            .value;

        assert_eq!(updated.id, first.id);
        let tasks = store.list().unwrap();
        assert_eq!(tasks[0].text, "renamed");
        assert_eq!(tasks[1], second);
    }

    #[test]
    fn update_rejects_blank_text_identifier() {
        let store = memory_store();
        let err = store
            .update(&Identifier::Text("  ".into()), TaskDraft::new("x"))
            .unwrap_err();
        assert_eq!(err.code(), "validation_error");
    }

    #[test]
    fn update_rejects_invalid_replacement_before_lookup() {
        let store = memory_store();
        let task = store.create(TaskDraft::new("x")).unwrap().value;

        let err = store
            .update(&Identifier::Id(task.id), TaskDraft::new(""))
            .unwrap_err();

        assert_eq!(err.code(), "validation_error");
        assert_eq!(store.list().unwrap(), vec![task]);
    }

    #[test]
    fn delete_existing_id_removes_exactly_one() {
        let store = memory_store();
        let a = store.create(TaskDraft::new("a")).unwrap().value;
        let b = store.create(TaskDraft::new("b")).unwrap().value;

        let change = store.delete(&Identifier::Id(a.id)).unwrap();

        assert_eq!(change.value, vec![a.clone()]);
        assert_eq!(change.event, StoreEvent::Deleted { ids: vec![a.id] });
        assert_eq!(store.list().unwrap(), vec![b]);
    }

    #[test]
    fn delete_missing_id_is_a_noop() {
        let store = memory_store();
        store.create(TaskDraft::new("a")).unwrap();
        let before = store.list().unwrap();

        let change = store.delete(&Identifier::Id(42)).unwrap();

        assert!(change.is_unchanged());
        assert!(change.value.is_empty());
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn delete_by_text_removes_every_match() {
        let store = memory_store();
        store.create(TaskDraft::new("spam")).unwrap();
        let keep = store.create(TaskDraft::new("ham")).unwrap().value;
        store.create(TaskDraft::new("spam")).unwrap();

        let change = store.delete(&Identifier::Text("spam".into())).unwrap();

        assert_eq!(change.event, StoreEvent::Deleted { ids: vec![1, 3] });
        assert_eq!(store.list().unwrap(), vec![keep]);
    }

    #[test]
    fn toggle_twice_restores_completed() {
        let store = memory_store();
        let task = store.create(TaskDraft::new("laundry")).unwrap().value;

        let first = store.toggle_completed(task.id).unwrap();
        assert_eq!(
            first.event,
            StoreEvent::Toggled {
                id: task.id,
                completed: true
            }
        );
        let second = store.toggle_completed(task.id).unwrap();

        assert_eq!(second.value.map(|t| t.completed), Some(false));
        assert_eq!(store.list().unwrap(), vec![task]);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let store = memory_store();
        store.create(TaskDraft::new("a")).unwrap();
        let before = store.list().unwrap();

        let change = store.toggle_completed(7).unwrap();

        assert!(change.is_unchanged());
        assert_eq!(change.value, None);
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn filter_and_summary_follow_completed_flag() {
        let store = memory_store();
        let a = store.create(TaskDraft::new("a")).unwrap().value;
        store.create(TaskDraft::new("b")).unwrap();
        store.create(TaskDraft::new("c").completed(true)).unwrap();
        store.toggle_completed(a.id).unwrap();

        let active = store.list_filtered(TaskFilter::Active).unwrap();
        let completed = store.list_filtered(TaskFilter::Completed).unwrap();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "b");
        assert_eq!(completed.len(), 2);
        assert_eq!(store.list_filtered(TaskFilter::All).unwrap().len(), 3);
        assert_eq!(
            store.summary().unwrap(),
            Summary {
                total: 3,
                completed: 2,
                active: 1
            }
        );
    }

    #[test]
    fn get_returns_task_or_not_found() {
        let store = memory_store();
        let task = store.create(TaskDraft::new("a")).unwrap().value;

        assert_eq!(store.get(task.id).unwrap(), task);
        assert_eq!(store.get(task.id + 1).unwrap_err().code(), "not_found");
    }

    #[test]
    fn write_failures_surface_as_persistence_errors() {
        let store = TaskStore::new(FailingBackend::empty());

        let err = store.create(TaskDraft::new("a")).unwrap_err();

        assert_eq!(err, AppError::persistence("disk full"));
    }

    #[test]
    fn every_mutation_surfaces_write_failures() {
        let store = TaskStore::new(FailingBackend::with_task("laundry"));

        let update = store
            .update(&Identifier::Id(1), TaskDraft::new("folded laundry"))
            .unwrap_err();
        let delete = store.delete(&Identifier::Text("laundry".into())).unwrap_err();
        let toggle = store.toggle_completed(1).unwrap_err();

        assert_eq!(update.code(), "persistence_error");
        assert_eq!(delete.code(), "persistence_error");
        assert_eq!(toggle.code(), "persistence_error");
    }

    #[test]
    fn file_store_round_trips_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let store = TaskStore::new(JsonFileBackend::new(&path));
        store
            .create(TaskDraft::new("Buy milk").category(Category::Shopping))
            .unwrap();
        store
            .create(TaskDraft::new("Run").category(Category::Health).due_date("2026-04-01"))
            .unwrap();
        let written = store.list().unwrap();

        let reopened = TaskStore::new(JsonFileBackend::new(&path));

        assert_eq!(reopened.list().unwrap(), written);
    }

    #[test]
    fn open_at_applies_configured_insert_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("configured.json");
        let config = Config {
            store_path: None,
            bind: None,
            insert_order: InsertOrder::Prepend,
        };

        let store = TaskStore::open_at(path.clone(), &config);
        store.create(TaskDraft::new("older")).unwrap();
        store.create(TaskDraft::new("newer")).unwrap();

        assert_eq!(store.backend().path(), path.as_path());
        assert!(path.exists());
        let texts: Vec<String> = store.list().unwrap().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["newer", "older"]);
    }

    #[test]
    fn text_lookup_matches_stored_text_exactly() {
        let untrimmed: Task = serde_json::from_value(serde_json::json!({
            "id": 1,
            "text": " Buy milk ",
            "createdAt": "2025-12-20T00:00:00Z"
        }))
        .unwrap();
        let store = TaskStore::new(MemoryBackend::with_tasks(vec![untrimmed]));

        let trimmed = store
            .update(&Identifier::Text("Buy milk".into()), TaskDraft::new("x"))
            .unwrap_err();
        assert_eq!(trimmed.code(), "not_found");

        let updated = store
            .update(
                &Identifier::Text(" Buy milk ".into()),
                TaskDraft::new(" Buy oat milk ").category(Category::Shopping),
            )
            .unwrap()
            .value;
        assert_eq!(updated.id, 1);
        assert_eq!(updated.text, "Buy oat milk");

        let reseeded: Task = serde_json::from_value(serde_json::json!({
            "id": 2,
            "text": " call mom",
            "createdAt": "2025-12-20T00:00:00Z"
        }))
        .unwrap();
        let store = TaskStore::new(MemoryBackend::with_tasks(vec![updated, reseeded]));

        let change = store.delete(&Identifier::Text(" call mom".into())).unwrap();

        assert_eq!(change.event, StoreEvent::Deleted { ids: vec![2] });
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn concurrent_creates_do_not_lose_updates() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(TaskStore::new(JsonFileBackend::new(
            dir.path().join("tasks.json"),
        )));

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for n in 0..5 {
                        store
                            .create(TaskDraft::new(format!("worker {worker} task {n}")))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let tasks = store.list().unwrap();
        let mut ids: Vec<u64> = tasks.iter().map(|task| task.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=40).collect::<Vec<u64>>());
    }

    #[test]
    fn filter_parses_from_query_values() {
        assert_eq!("".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!("Active".parse::<TaskFilter>().unwrap(), TaskFilter::Active);
        assert_eq!(
            "done".parse::<TaskFilter>().unwrap_err().code(),
            "validation_error"
        );
    }
}
