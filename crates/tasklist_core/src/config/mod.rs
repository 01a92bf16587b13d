use crate::error::AppError;
use crate::task_api::InsertOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_ENV_VAR: &str = "TASKLIST_CONFIG_PATH";
const BIND_ENV_VAR: &str = "TASKLIST_BIND";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    #[serde(default)]
    pub bind: Option<String>,
    #[serde(default)]
    pub insert_order: InsertOrder,
}

impl Config {
    /// `$TASKLIST_BIND`, then the configured address, then [`DEFAULT_BIND`].
    pub fn bind_address(&self) -> String {
        if let Ok(bind) = std::env::var(BIND_ENV_VAR)
            && !bind.trim().is_empty()
        {
            return bind.trim().to_string();
        }

        self.bind
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<AppError>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub store_path: Option<PathBuf>,
    pub bind: Option<String>,
    pub insert_order: Option<InsertOrder>,
}

impl ConfigOverrides {
    /// Builds overrides from raw `KEY=VALUE` strings.
    pub fn from_args<I, S>(raw: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut overrides = Self::default();
        for entry in raw {
            overrides.apply(entry.as_ref())?;
        }
        Ok(overrides)
    }

    pub fn apply(&mut self, raw: &str) -> Result<(), AppError> {
        let (key_raw, value_raw) = raw
            .trim()
            .split_once('=')
            .ok_or_else(|| AppError::validation("override must be in KEY=VALUE format"))?;
        let value = value_raw.trim();
        let key = canonical_key(key_raw)
            .ok_or_else(|| AppError::validation("override key cannot be empty"))?;

        match key.as_str() {
            "store_path" | "store" => self.store_path = Some(PathBuf::from(value)),
            "bind" => self.bind = Some(value.to_string()),
            "insert_order" => self.insert_order = Some(value.parse()?),
            other => return Err(AppError::validation(format!("unknown config field '{other}'"))),
        }

        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::persistence("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join("tasklist")
            .join(CONFIG_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::persistence("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("tasklist")
            .join(CONFIG_FILE_NAME))
    }
}

pub fn load_config_with_fallback() -> ConfigLoad {
    match config_path() {
        Ok(path) => load_config_with_fallback_from_path(&path),
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_with_fallback_from_path(path: &Path) -> ConfigLoad {
    if !path.exists() {
        return ConfigLoad {
            config: Config::default(),
            error: None,
        };
    }

    match load_config_from_path(path) {
        Ok(config) => ConfigLoad {
            config,
            error: None,
        },
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<Config, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::persistence(format!("{}: {}", path.display(), err)))?;
    serde_json::from_str(&content).map_err(|err| {
        AppError::validation(format!("invalid JSON in {}: {}", path.display(), err))
    })
}

pub fn merge_overrides(base: &Config, overrides: &ConfigOverrides) -> Config {
    let mut merged = base.clone();
    if let Some(store_path) = overrides.store_path.as_ref() {
        merged.store_path = Some(store_path.clone());
    }
    if let Some(bind) = overrides.bind.as_ref() {
        merged.bind = Some(bind.clone());
    }
    if let Some(insert_order) = overrides.insert_order {
        merged.insert_order = insert_order;
    }
    merged
}

fn canonical_key(raw: &str) -> Option<String> {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
