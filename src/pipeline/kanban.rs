use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{OwnerGroup, Project};

/// One board column: every project a group takes part in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanbanColumn {
    pub group: OwnerGroup,
    pub projects: Vec<Project>,
}

/// Arrange projects into one column per owning group. A project shared by
/// several groups shows up in each of their columns. Columns follow the
/// taxonomy order and cards are sorted by project name.
pub fn board_columns(projects: &[Project]) -> Vec<KanbanColumn> {
    let mut columns: BTreeMap<OwnerGroup, Vec<Project>> = BTreeMap::new();
    for project in projects {
        for group in &project.groups {
            columns.entry(*group).or_default().push(project.clone());
        }
    }

    columns
        .into_iter()
        .map(|(group, mut projects)| {
            projects.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.client.cmp(&b.client)));
            KanbanColumn { group, projects }
        })
        .collect()
}
