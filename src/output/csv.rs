//! CSV rendering for exports: a header row plus one quoted row per item.

use crate::models::{NormalizedTask, Project};

use super::text::date;

const MISSING: &str = "N/A";

/// Column headers plus the function turning one item into its cells.
pub struct CsvLayout<T> {
    pub headers: &'static [&'static str],
    pub row: fn(&T) -> Vec<String>,
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

pub fn render<T>(items: &[T], layout: &CsvLayout<T>) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(layout.headers.join(","));
    for item in items {
        let cells: Vec<String> = (layout.row)(item).iter().map(|c| quote(c)).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

fn task_row(t: &NormalizedTask) -> Vec<String> {
    vec![
        or_missing(t.client.as_deref()),
        or_missing(t.project.as_deref()),
        t.name.clone().unwrap_or_else(|| "Sem título".to_string()),
        t.kind.label().to_string(),
        date(&t.start_date),
        date(&t.due_date),
        or_missing(t.responsible.as_deref()),
        t.owner_group.label().to_string(),
        t.subgroup_display().unwrap_or_else(|| MISSING.to_string()),
        t.priority.as_str().to_string(),
        or_missing(t.status_label.as_deref()),
    ]
}

fn project_row(p: &Project) -> Vec<String> {
    let groups: Vec<&str> = p.groups.iter().map(|g| g.label()).collect();
    vec![
        p.client.clone(),
        p.name.clone(),
        date(&p.start),
        date(&p.end),
        if p.responsibles.is_empty() {
            MISSING.to_string()
        } else {
            p.responsibles.join(", ")
        },
        groups.join(", "),
        p.status.label().to_string(),
        format!("{}%", p.progress),
        p.priority.as_str().to_string(),
        p.tasks.len().to_string(),
    ]
}

pub const TASK_LAYOUT: CsvLayout<NormalizedTask> = CsvLayout {
    headers: &[
        "Cliente",
        "Projeto",
        "Tarefa",
        "Tipo",
        "Data Início",
        "Data Fim",
        "Responsável",
        "Grupo",
        "Subgrupo",
        "Prioridade",
        "Status",
    ],
    row: task_row,
};

pub const PROJECT_LAYOUT: CsvLayout<Project> = CsvLayout {
    headers: &[
        "Cliente",
        "Projeto",
        "Data Início",
        "Data Fim",
        "Responsáveis",
        "Equipes",
        "Status",
        "Progresso",
        "Prioridade",
        "Qtd. Tarefas",
    ],
    row: project_row,
};
