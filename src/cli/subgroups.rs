use serde_json::json;

use crate::cli::{finish, parse_group, Context};
use crate::error::BoardError;
use crate::output;
use crate::pipeline::{subgroups_for, Selection};

pub fn run(ctx: &Context, group: &str) -> i32 {
    finish(run_inner(ctx, group), ctx.json)
}

fn run_inner(ctx: &Context, group: &str) -> Result<i32, BoardError> {
    let selection = parse_group(group)?;
    let tasks = ctx.load_tasks()?;
    let listing = subgroups_for(&tasks, selection);

    if ctx.json {
        let group_json = match selection {
            Selection::All => json!(null),
            Selection::Only(g) => json!(g),
        };
        output::json::print(&output::json::success(json!({
            "group": group_json,
            "subgroups": listing.subgroups,
            "directMembers": listing.direct_members
        })));
    } else {
        match selection {
            Selection::All => println!("Select a specific group to list its subgroups."),
            Selection::Only(g) => output::text::print_subgroups(g, &listing),
        }
    }
    Ok(0)
}
