use chrono::{DateTime, Utc};

use crate::models::{NormalizedTask, OwnerGroup, Project};
use crate::pipeline::kanban::KanbanColumn;
use crate::pipeline::SubgroupListing;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn date(d: &DateTime<Utc>) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn print_task_list(tasks: &[NormalizedTask]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for t in tasks {
        let responsible = t.responsible.as_deref().unwrap_or("");
        println!(
            "  [{}] {} ({} / {}) {} - {} p={} {}{}",
            t.owner_group.label(),
            t.name.as_deref().unwrap_or("Sem título"),
            t.client.as_deref().unwrap_or("N/A"),
            t.project.as_deref().unwrap_or("N/A"),
            date(&t.start_date),
            date(&t.due_date),
            t.priority.as_str(),
            if responsible.is_empty() { String::new() } else { format!("@{responsible}") },
            if t.kind == crate::models::TaskKind::Subtask { " (subtarefa)" } else { "" }
        );
    }
}

pub fn print_project(p: &Project) {
    println!("Project: {} ({})", p.name, p.client);
    println!("  Period: {} - {}", date(&p.start), date(&p.end));
    println!("  Status: {} ({}%)", p.status.label(), p.progress);
    println!("  Priority: {}", p.priority.as_str());
    println!("  Responsible: {}", p.main_responsible);
    let groups: Vec<&str> = p.groups.iter().map(|g| g.label()).collect();
    println!("  Groups: {}", groups.join(", "));
    println!("  Tasks: {}", p.tasks.len());
}

pub fn print_project_list(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects found.");
        return;
    }
    for (i, p) in projects.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_project(p);
    }
}

pub fn print_kanban(columns: &[KanbanColumn]) {
    if columns.is_empty() {
        println!("No projects found.");
        return;
    }
    for column in columns {
        println!("{} ({})", column.group.label(), column.projects.len());
        for p in &column.projects {
            println!(
                "  - {} [{}] {} - {} @{} ({} tarefas)",
                p.name,
                p.client,
                date(&p.start),
                date(&p.end),
                p.main_responsible,
                p.tasks.len()
            );
        }
    }
}

pub fn print_subgroups(group: OwnerGroup, listing: &SubgroupListing) {
    println!("Group: {}", group.label());
    if listing.is_empty() {
        println!("  No subgroups found.");
        return;
    }
    if !listing.subgroups.is_empty() {
        println!("--- Subgrupos ---");
        for sub in &listing.subgroups {
            println!("  {sub}");
        }
    }
    if !listing.direct_members.is_empty() {
        println!("--- Membros Diretos ---");
        for member in &listing.direct_members {
            println!("  {member}");
        }
    }
}

pub fn print_options(clients: &[String], groups: &[OwnerGroup]) {
    println!("Clients:");
    for c in clients {
        println!("  {c}");
    }
    println!("Groups:");
    for g in groups {
        println!("  {}", g.label());
    }
}
