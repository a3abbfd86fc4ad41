use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NormalizedTask, OwnerGroup, Priority};

/// Shown as the main responsible of a project nobody is assigned to.
pub const UNASSIGNED: &str = "Não atribuído";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    Delayed,
    InProgress,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Concluído",
            Self::Delayed => "Atrasado",
            Self::InProgress => "Em andamento",
        }
    }
}

/// Rollup of every task sharing a `(client, project)` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    pub tasks: Vec<NormalizedTask>,
    pub responsibles: Vec<String>,
    /// Distinct groups of the member tasks, in taxonomy order (not by label).
    pub groups: Vec<OwnerGroup>,
    pub main_responsible: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub progress: u8,
    pub status: ProjectStatus,
    pub priority: Priority,
}

impl Project {
    pub fn key(client: &str, project: &str) -> String {
        format!("{client}::{project}")
    }
}
