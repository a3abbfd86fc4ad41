use serde::Serialize;
use serde_json::{json, Value};

use crate::error::BoardError;
use crate::models::{OwnerGroup, Project};
use crate::pipeline::kanban::KanbanColumn;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &BoardError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Project without its member list, for board columns.
pub fn project_card(p: &Project) -> Value {
    json!({
        "id": p.id,
        "name": p.name,
        "client": p.client,
        "start": p.start,
        "end": p.end,
        "mainResponsible": p.main_responsible,
        "priority": p.priority,
        "status": p.status,
        "progress": p.progress,
        "taskCount": p.tasks.len()
    })
}

pub fn kanban_json(columns: &[KanbanColumn]) -> Value {
    let columns: Vec<Value> = columns
        .iter()
        .map(|c| {
            json!({
                "group": c.group,
                "label": c.group.label(),
                "count": c.projects.len(),
                "projects": c.projects.iter().map(project_card).collect::<Vec<_>>()
            })
        })
        .collect();
    json!({ "columns": columns })
}

pub fn options_json(clients: &[String], groups: &[OwnerGroup]) -> Value {
    json!({
        "clients": clients,
        "groups": groups
    })
}

pub fn print(value: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    );
}
