use crate::error::AppError;
use crate::model::Task;
use crate::storage::Backend;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "tasks.json";
pub const STORE_ENV_VAR: &str = "TASKLIST_STORE_PATH";

/// Default location of the store file when neither the environment nor
/// the config file names one.
pub fn default_store_path() -> Result<PathBuf, AppError> {
    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::persistence("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata).join("tasklist").join(STORE_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::persistence("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("tasklist")
            .join(STORE_FILE_NAME))
    }
}

/// Resolves the store file: `$TASKLIST_STORE_PATH`, then `configured`,
/// then [`default_store_path`].
pub fn store_path(configured: Option<&Path>) -> Result<PathBuf, AppError> {
    resolve_store_path(std::env::var(STORE_ENV_VAR).ok(), configured)
}

fn resolve_store_path(
    from_env: Option<String>,
    configured: Option<&Path>,
) -> Result<PathBuf, AppError> {
    if let Some(path) = from_env
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    match configured {
        Some(path) => Ok(path.to_path_buf()),
        None => default_store_path(),
    }
}

/// Persists the collection as one pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Task>, AppError> {
        load_tasks(&self.path)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), AppError> {
        save_tasks(&self.path, tasks)
    }
}

pub fn load_tasks(path: &Path) -> Result<Vec<Task>, AppError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::persistence(format!("{}: {}", path.display(), err)))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|err| {
        AppError::persistence(format!("invalid JSON in {}: {}", path.display(), err))
    })
}

pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|err| AppError::persistence(format!("{}: {}", parent.display(), err)))?;
    }

    let content = serde_json::to_string_pretty(tasks)
        .map_err(|err| AppError::persistence(err.to_string()))?;
    std::fs::write(path, content)
        .map_err(|err| AppError::persistence(format!("{}: {}", path.display(), err)))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions)
            .map_err(|err| AppError::persistence(format!("{}: {}", path.display(), err)))?;
    }

    Ok(())
}
