use serde_json::json;

use crate::cli::{finish, Context, FilterArgs};
use crate::error::BoardError;
use crate::models::Project;
use crate::output;
use crate::pipeline::{aggregate, apply_all, kanban};

/// Aggregate the snapshot into projects, then filter the projects.
pub fn filtered_projects(ctx: &Context, filters: &FilterArgs) -> Result<Vec<Project>, BoardError> {
    let selections = ctx.selections(filters)?;
    let tasks = ctx.load_tasks()?;
    let projects = aggregate(&tasks, ctx.now);
    Ok(apply_all(&projects, &selections, ctx.now))
}

pub fn run(ctx: &Context, filters: &FilterArgs) -> i32 {
    finish(run_projects(ctx, filters), ctx.json)
}

pub fn run_kanban(ctx: &Context, filters: &FilterArgs) -> i32 {
    finish(run_board(ctx, filters), ctx.json)
}

fn run_projects(ctx: &Context, filters: &FilterArgs) -> Result<i32, BoardError> {
    let projects = filtered_projects(ctx, filters)?;

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "projects": output::json::to_value(&projects),
            "count": projects.len()
        })));
    } else {
        output::text::print_project_list(&projects);
    }
    Ok(0)
}

fn run_board(ctx: &Context, filters: &FilterArgs) -> Result<i32, BoardError> {
    let projects = filtered_projects(ctx, filters)?;
    let columns = kanban::board_columns(&projects);

    if ctx.json {
        output::json::print(&output::json::success(output::json::kanban_json(&columns)));
    } else {
        output::text::print_kanban(&columns);
    }
    Ok(0)
}
