//! Composable filters shared by the task and project views.
//!
//! Every `by_*` function returns a predicate. A selection of "all" (or an
//! absent selection in [`apply_all`]) yields a predicate that keeps
//! everything; no filter ever fails.

use chrono::{DateTime, Duration, Utc};

use crate::models::{NormalizedTask, OwnerGroup, Project, TaskKind};

use super::ownership;
use super::Selection;

/// What the filters need to know about an item.
pub trait Filterable {
    fn start(&self) -> DateTime<Utc>;
    fn client(&self) -> Option<&str>;
    fn in_group(&self, group: OwnerGroup) -> bool;
    fn in_subgroup(&self, group: OwnerGroup, subgroup: &str) -> bool;
    fn has_kind(&self, include_tasks: bool, include_subtasks: bool) -> bool;
}

impl Filterable for NormalizedTask {
    fn start(&self) -> DateTime<Utc> {
        self.start_date
    }

    fn client(&self) -> Option<&str> {
        self.client.as_deref()
    }

    fn in_group(&self, group: OwnerGroup) -> bool {
        self.owner_group == group
    }

    fn in_subgroup(&self, group: OwnerGroup, subgroup: &str) -> bool {
        ownership::path_in_subgroup(&self.owner_full_path, group, subgroup)
    }

    fn has_kind(&self, include_tasks: bool, include_subtasks: bool) -> bool {
        match self.kind {
            TaskKind::Task => include_tasks,
            TaskKind::Subtask => include_subtasks,
        }
    }
}

/// Projects match group, subgroup and kind filters through their members.
impl Filterable for Project {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn client(&self) -> Option<&str> {
        Some(&self.client)
    }

    fn in_group(&self, group: OwnerGroup) -> bool {
        self.groups.contains(&group)
    }

    fn in_subgroup(&self, group: OwnerGroup, subgroup: &str) -> bool {
        self.tasks.iter().any(|t| t.in_subgroup(group, subgroup))
    }

    fn has_kind(&self, include_tasks: bool, include_subtasks: bool) -> bool {
        self.tasks
            .iter()
            .any(|t| t.has_kind(include_tasks, include_subtasks))
    }
}

pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

fn keep_all<'a, T: 'a>() -> Predicate<'a, T> {
    Box::new(|_: &T| true)
}

/// Items starting on or after `now - window_days`. A window reaching past
/// the earliest representable instant keeps everything.
pub fn by_recency<'a, T: Filterable + 'a>(window_days: u32, now: DateTime<Utc>) -> Predicate<'a, T> {
    let cutoff = now
        .checked_sub_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    Box::new(move |item: &T| item.start() >= cutoff)
}

pub fn by_client<'a, T: Filterable + 'a>(client: &'a Selection<String>) -> Predicate<'a, T> {
    match client {
        Selection::All => keep_all(),
        Selection::Only(wanted) => Box::new(move |item: &T| item.client() == Some(wanted.as_str())),
    }
}

pub fn by_group<'a, T: Filterable + 'a>(group: Selection<OwnerGroup>) -> Predicate<'a, T> {
    match group {
        Selection::All => keep_all(),
        Selection::Only(wanted) => Box::new(move |item: &T| item.in_group(wanted)),
    }
}

/// Subgroups only mean something under one group, so selecting every
/// group disables this filter too.
pub fn by_subgroup<'a, T: Filterable + 'a>(
    group: Selection<OwnerGroup>,
    subgroup: &'a Selection<String>,
) -> Predicate<'a, T> {
    match (group, subgroup) {
        (Selection::Only(group), Selection::Only(sub)) => {
            Box::new(move |item: &T| item.in_subgroup(group, sub))
        }
        _ => keep_all(),
    }
}

pub fn by_kind<'a, T: Filterable + 'a>(include_tasks: bool, include_subtasks: bool) -> Predicate<'a, T> {
    if include_tasks && include_subtasks {
        return keep_all();
    }
    Box::new(move |item: &T| item.has_kind(include_tasks, include_subtasks))
}

/// The filter choices currently selected; `None` means "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelections {
    pub days: Option<u32>,
    pub client: Option<Selection<String>>,
    pub group: Option<Selection<OwnerGroup>>,
    pub subgroup: Option<Selection<String>>,
    pub show_tasks: Option<bool>,
    pub show_subtasks: Option<bool>,
}

impl FilterSelections {
    /// Predicates in application order: recency, client, group, subgroup,
    /// kind. The order only narrows the population early.
    pub fn predicates<'a, T: Filterable + 'a>(&'a self, now: DateTime<Utc>) -> Vec<Predicate<'a, T>> {
        let mut predicates = Vec::new();
        if let Some(days) = self.days.filter(|d| *d > 0) {
            predicates.push(by_recency(days, now));
        }
        if let Some(ref client) = self.client {
            predicates.push(by_client(client));
        }
        if let Some(ref group) = self.group {
            predicates.push(by_group(*group));
        }
        if let (Some(group), Some(subgroup)) = (&self.group, &self.subgroup) {
            predicates.push(by_subgroup(*group, subgroup));
        }
        if self.show_tasks.is_some() || self.show_subtasks.is_some() {
            predicates.push(by_kind(
                self.show_tasks.unwrap_or(true),
                self.show_subtasks.unwrap_or(true),
            ));
        }
        predicates
    }
}

/// Filter `items` through every selected predicate, returning new owned items.
pub fn apply_all<T: Filterable + Clone>(
    items: &[T],
    selections: &FilterSelections,
    now: DateTime<Utc>,
) -> Vec<T> {
    let predicates = selections.predicates::<T>(now);
    predicates
        .iter()
        .fold(items.to_vec(), |remaining, keep| {
            remaining.into_iter().filter(|item| keep(item)).collect()
        })
}

/// Distinct clients, sorted: the choices for a client selector.
pub fn client_options<T: Filterable>(items: &[T]) -> Vec<String> {
    let clients: std::collections::BTreeSet<&str> = items.iter().filter_map(|i| i.client()).collect();
    clients.into_iter().map(str::to_string).collect()
}

/// Groups that own at least one item, in taxonomy order.
pub fn group_options<T: Filterable>(items: &[T]) -> Vec<OwnerGroup> {
    OwnerGroup::ALL
        .into_iter()
        .filter(|g| items.iter().any(|i| i.in_group(*g)))
        .collect()
}
