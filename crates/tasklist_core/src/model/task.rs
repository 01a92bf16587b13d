use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, with = "due_date")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    pub fn new(id: u64, created_at: String, fields: TaskFields) -> Self {
        Self {
            id,
            text: fields.text,
            category: fields.category,
            priority: fields.priority,
            due_date: fields.due_date,
            completed: fields.completed,
            created_at,
        }
    }

    /// Replaces every mutable field; `id` and `created_at` stay as they were.
    pub fn replace_fields(&mut self, fields: TaskFields) {
        self.text = fields.text;
        self.category = fields.category;
        self.priority = fields.priority;
        self.due_date = fields.due_date;
        self.completed = fields.completed;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Shopping,
    Health,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Personal,
        Category::Work,
        Category::Shopping,
        Category::Health,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Work => "work",
            Self::Shopping => "shopping",
            Self::Health => "health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let cleaned = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == cleaned)
            .ok_or_else(|| AppError::validation(format!("unknown category '{}'", raw.trim())))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let cleaned = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == cleaned)
            .ok_or_else(|| AppError::validation(format!("unknown priority '{}'", raw.trim())))
    }
}

/// Caller-supplied part of a task. Anything the store assigns (`id`,
/// `createdAt`) is ignored when present in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default, with = "due_date")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl TaskDraft {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn due_date<D: Into<String>>(mut self, due_date: D) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Validates the draft and fills in defaults.
    pub fn into_fields(self) -> Result<TaskFields, AppError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(AppError::validation("text is required"));
        }

        let due_date = match self.due_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                validate_due_date(raw)?;
                Some(raw.to_string())
            }
        };

        Ok(TaskFields {
            text: text.to_string(),
            category: self.category.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            due_date,
            completed: self.completed.unwrap_or(false),
        })
    }
}

/// A validated draft with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub text: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<String>,
    pub completed: bool,
}

fn validate_due_date(raw: &str) -> Result<(), AppError> {
    let calendar_date = format_description!("[year]-[month]-[day]");
    if Date::parse(raw, calendar_date).is_ok() || OffsetDateTime::parse(raw, &Rfc3339).is_ok() {
        return Ok(());
    }

    Err(AppError::validation(format!(
        "dueDate '{raw}' is not an ISO 8601 date"
    )))
}

/// An absent due date is written as `""`; `""`, `null` and a missing key
/// all read back as `None`.
mod due_date {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|value| !value.trim().is_empty()))
    }
}
