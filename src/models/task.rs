use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OwnerGroup;

/// Workflow label that marks a task as finished.
pub const COMPLETED_LABEL: &str = "Concluída";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    Task,
    Subtask,
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Task => "Tarefa",
            Self::Subtask => "Subtarefa",
        }
    }

    /// Reads the raw `tipo` marker. Anything other than a subtask marker,
    /// including an absent one, is a plain task.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker.map(|m| m.trim().to_lowercase()) {
            Some(m) if m == "subtarefa" || m == "subtask" => Self::Subtask,
            _ => Self::Task,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTask {
    pub client: Option<String>,
    pub project: Option<String>,
    pub name: Option<String>,
    pub responsible: Option<String>,
    pub kind: TaskKind,
    pub start_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status_label: Option<String>,
    pub priority: Priority,
    pub owner_group: OwnerGroup,
    pub owner_full_path: String,
}

impl NormalizedTask {
    pub fn is_completed(&self) -> bool {
        self.status_label.as_deref() == Some(COMPLETED_LABEL)
    }

    /// Path segments 2..N joined with `" / "`, as shown in exports.
    pub fn subgroup_display(&self) -> Option<String> {
        let segments: Vec<&str> = self.owner_full_path.split('/').map(str::trim).collect();
        if segments.len() > 1 {
            let rest = segments[1..].join(" / ");
            if !rest.is_empty() {
                return Some(rest);
            }
        }
        None
    }
}
