use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tracing::warn;

use crate::cli::projects::filtered_projects;
use crate::cli::{finish, Context, ExportTarget, FilterArgs};
use crate::error::BoardError;
use crate::output;
use crate::output::csv::{render, PROJECT_LAYOUT, TASK_LAYOUT};
use crate::pipeline::apply_all;

pub fn run(
    ctx: &Context,
    target: ExportTarget,
    filters: &FilterArgs,
    output_path: Option<&str>,
    to_stdout: bool,
) -> i32 {
    finish(run_inner(ctx, target, filters, output_path, to_stdout), ctx.json)
}

fn build_document(ctx: &Context, target: ExportTarget, filters: &FilterArgs) -> Result<(String, usize), BoardError> {
    let (document, rows) = match target {
        ExportTarget::Tasks => {
            let selections = ctx.selections(filters)?;
            let tasks = apply_all(&ctx.load_tasks()?, &selections, ctx.now);
            (render(&tasks, &TASK_LAYOUT), tasks.len())
        }
        ExportTarget::Projects => {
            let projects = filtered_projects(ctx, filters)?;
            (render(&projects, &PROJECT_LAYOUT), projects.len())
        }
    };
    if rows == 0 {
        warn!(target = target.file_stem(), "nothing to export");
        return Err(BoardError::no_data());
    }
    Ok((document, rows))
}

fn default_path(ctx: &Context, target: ExportTarget) -> PathBuf {
    PathBuf::from(format!("{}_{}.csv", target.file_stem(), ctx.now.format("%Y-%m-%d")))
}

fn run_inner(
    ctx: &Context,
    target: ExportTarget,
    filters: &FilterArgs,
    output_path: Option<&str>,
    to_stdout: bool,
) -> Result<i32, BoardError> {
    let (document, rows) = build_document(ctx, target, filters)?;

    if to_stdout {
        println!("{document}");
        return Ok(0);
    }

    let path = output_path.map(PathBuf::from).unwrap_or_else(|| default_path(ctx, target));
    fs::write(&path, format!("{document}\n"))
        .map_err(|e| BoardError::export_failed(format!("Cannot write {}: {e}", path.display())))?;

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "path": path.to_string_lossy(),
            "rows": rows
        })));
    } else {
        println!("Exported {rows} rows to {}", path.display());
    }
    Ok(0)
}
