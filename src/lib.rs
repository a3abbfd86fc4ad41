//! Read-only dashboard pipeline over a task snapshot: normalize raw task
//! records, resolve their ownership taxonomy, roll them up into projects
//! and filter the result for team, client and Kanban views.

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod source;
