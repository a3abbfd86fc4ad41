use serde_json::json;

use crate::cli::{finish, Context, FilterArgs};
use crate::error::BoardError;
use crate::output;
use crate::pipeline::apply_all;

pub fn run(ctx: &Context, filters: &FilterArgs) -> i32 {
    finish(run_inner(ctx, filters), ctx.json)
}

fn run_inner(ctx: &Context, filters: &FilterArgs) -> Result<i32, BoardError> {
    let selections = ctx.selections(filters)?;
    let tasks = ctx.load_tasks()?;
    let filtered = apply_all(&tasks, &selections, ctx.now);

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "tasks": output::json::to_value(&filtered),
            "count": filtered.len(),
            "total": tasks.len()
        })));
    } else {
        output::text::print_task_list(&filtered);
        println!("\n{} of {} tasks", filtered.len(), tasks.len());
    }
    Ok(0)
}
