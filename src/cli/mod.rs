pub mod commands;
pub mod tasks;
pub mod projects;
pub mod subgroups;
pub mod options;
pub mod export;

pub use commands::*;

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::BoardError;
use crate::models::{NormalizedTask, OwnerGroup};
use crate::output;
use crate::pipeline::normalize::parse_timestamp;
use crate::pipeline::{is_all_sentinel, FilterSelections, Selection};
use crate::source::{self, BoardConfig};

/// Everything a command needs besides its own arguments.
pub struct Context {
    pub json: bool,
    pub data_path: PathBuf,
    pub now: DateTime<Utc>,
    pub config: BoardConfig,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self, BoardError> {
        let config = source::load_config(cli.config.as_deref())?;
        let now = match cli.now.as_deref() {
            Some(s) => parse_timestamp(s)
                .ok_or_else(|| BoardError::invalid_argument(format!("Invalid --now value: {s}")))?,
            None => Utc::now(),
        };
        Ok(Self {
            json: cli.json,
            data_path: config.resolve_data_path(cli.data.as_deref()),
            now,
            config,
        })
    }

    pub fn load_tasks(&self) -> Result<Vec<NormalizedTask>, BoardError> {
        source::load_tasks(&self.data_path, self.now)
    }

    pub fn selections(&self, filters: &FilterArgs) -> Result<FilterSelections, BoardError> {
        filters.to_selections(self.config.default_days)
    }
}

pub fn parse_group(value: &str) -> Result<Selection<OwnerGroup>, BoardError> {
    if is_all_sentinel(value) {
        return Ok(Selection::All);
    }
    OwnerGroup::from_str(value)
        .map(Selection::Only)
        .ok_or_else(|| BoardError::unknown_group(value))
}

impl FilterArgs {
    pub fn to_selections(&self, default_days: Option<u32>) -> Result<FilterSelections, BoardError> {
        Ok(FilterSelections {
            days: self.days.or(default_days),
            client: self.client.as_deref().map(Selection::parse),
            group: self.group.as_deref().map(parse_group).transpose()?,
            subgroup: self.subgroup.as_deref().map(Selection::parse),
            show_tasks: self.no_tasks.then_some(false),
            show_subtasks: self.no_subtasks.then_some(false),
        })
    }
}

/// Turn a command result into an exit code, reporting any error.
pub fn finish(result: Result<i32, BoardError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => report_error(&e, json_output),
    }
}

pub fn report_error(e: &BoardError, json_output: bool) -> i32 {
    if json_output {
        output::json::print(&output::json::error(e));
    } else {
        eprintln!("Error: {}", e.message);
    }
    1
}
