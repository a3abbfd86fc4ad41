use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};

use crate::models::{NormalizedTask, OwnerGroup, Priority, Project, ProjectStatus, UNASSIGNED};

/// Running state of one project while tasks are folded in.
struct Accumulator {
    client: String,
    name: String,
    tasks: Vec<NormalizedTask>,
    responsibles: BTreeSet<String>,
    groups: BTreeSet<OwnerGroup>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    priority: Priority,
}

impl Accumulator {
    fn open(client: &str, name: &str, first: &NormalizedTask) -> Self {
        Self {
            client: client.to_string(),
            name: name.to_string(),
            tasks: Vec::new(),
            responsibles: BTreeSet::new(),
            groups: BTreeSet::new(),
            start: first.start_date,
            end: first.due_date,
            priority: first.priority,
        }
    }

    fn fold(mut self, task: &NormalizedTask) -> Self {
        if let Some(ref responsible) = task.responsible {
            self.responsibles.insert(responsible.clone());
        }
        self.groups.insert(task.owner_group);
        self.start = self.start.min(task.start_date);
        self.end = self.end.max(task.due_date);
        self.priority = self.priority.max(task.priority);
        self.tasks.push(task.clone());
        self
    }

    fn finish(self, now: DateTime<Utc>) -> Project {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.is_completed()).count();
        let progress = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        } else {
            0
        };

        let status = if progress == 100 {
            ProjectStatus::Completed
        } else if self
            .tasks
            .iter()
            .any(|t| !t.is_completed() && t.due_date < now)
        {
            ProjectStatus::Delayed
        } else {
            ProjectStatus::InProgress
        };

        let responsibles: Vec<String> = self.responsibles.into_iter().collect();
        let main_responsible = responsibles
            .first()
            .cloned()
            .unwrap_or_else(|| UNASSIGNED.to_string());

        Project {
            id: Project::key(&self.client, &self.name),
            name: self.name,
            client: self.client,
            tasks: self.tasks,
            responsibles,
            groups: self.groups.into_iter().collect(),
            main_responsible,
            start: self.start,
            end: self.end,
            progress,
            status,
            priority: self.priority,
        }
    }
}

/// Roll tasks up into projects keyed by `(client, project)`, in order of
/// first appearance. Tasks missing either key are left out.
///
/// Status depends on `now`: a project with an overdue unfinished task is
/// delayed, so the same input can yield a different status later.
pub fn aggregate(tasks: &[NormalizedTask], now: DateTime<Utc>) -> Vec<Project> {
    let (order, mut open) = tasks.iter().fold(
        (Vec::<String>::new(), HashMap::<String, Accumulator>::new()),
        |(mut order, mut open), task| {
            let (Some(client), Some(project)) = (task.client.as_deref(), task.project.as_deref())
            else {
                return (order, open);
            };
            let key = Project::key(client, project);
            let acc = match open.remove(&key) {
                Some(acc) => acc,
                None => {
                    order.push(key.clone());
                    Accumulator::open(client, project, task)
                }
            };
            open.insert(key, acc.fold(task));
            (order, open)
        },
    );

    order
        .into_iter()
        .filter_map(|key| open.remove(&key))
        .map(|acc| acc.finish(now))
        .collect()
}
