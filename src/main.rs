use clap::Parser;
use std::process;

use taskboard::cli::commands::{Cli, Commands};
use taskboard::cli::{self, Context};
use taskboard::logging;

fn main() {
    logging::init();

    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let ctx = match Context::from_cli(&cli_args) {
        Ok(ctx) => ctx,
        Err(e) => process::exit(cli::report_error(&e, json_output)),
    };

    let exit_code = match cli_args.command {
        Commands::Tasks { filters } => cli::tasks::run(&ctx, &filters),
        Commands::Projects { filters } => cli::projects::run(&ctx, &filters),
        Commands::Kanban { filters } => cli::projects::run_kanban(&ctx, &filters),
        Commands::Subgroups { group } => cli::subgroups::run(&ctx, &group),
        Commands::Options => cli::options::run(&ctx),
        Commands::Export {
            target,
            filters,
            output,
            stdout,
        } => cli::export::run(&ctx, target, &filters, output.as_deref(), stdout),
    };

    process::exit(exit_code);
}
