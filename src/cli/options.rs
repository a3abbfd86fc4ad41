use crate::cli::{finish, Context};
use crate::error::BoardError;
use crate::output;
use crate::pipeline::filter::{client_options, group_options};

pub fn run(ctx: &Context) -> i32 {
    finish(run_inner(ctx), ctx.json)
}

fn run_inner(ctx: &Context) -> Result<i32, BoardError> {
    let tasks = ctx.load_tasks()?;
    let clients = client_options(&tasks);
    let groups = group_options(&tasks);

    if ctx.json {
        output::json::print(&output::json::success(output::json::options_json(&clients, &groups)));
    } else {
        output::text::print_options(&clients, &groups);
    }
    Ok(0)
}
