use clap::{Args, Parser, Subcommand, ValueEnum};

const VERSION: &str = env!("TASKBOARD_VERSION");

#[derive(Parser)]
#[command(
    name = "taskboard",
    version = VERSION,
    about = "Team and client dashboards over a task snapshot",
    after_help = "\
DATA SOURCE:
  --data <path> (or TASKBOARD_DATA), else `data_path` from taskboard.json
  (searched upward from the current directory), else ./dados.json.
  Use `--data -` to read the JSON array from stdin.

SELECTORS:
  `todos` (or `all`) selects everything for --client, --group and --subgroup.
  Groups accept the English name or the Portuguese label (Criação, Mídia,
  Produção, Operações, BI, Estratégia, Outros), case-insensitive.
  --subgroup only applies together with a specific --group.

EXIT CODES:
  0  Success
  1  Error (missing data, invalid JSON, bad argument, export failure)

LOGGING:
  Diagnostics go to stderr. Set TASKBOARD_LOG (e.g. `debug`) to change the level."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task snapshot to read (JSON array of records)
    #[arg(long, global = true, env = "TASKBOARD_DATA")]
    pub data: Option<String>,

    /// Config file (default: nearest taskboard.json)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Evaluate as of this instant instead of the clock (YYYY-MM-DD or RFC 3339)
    #[arg(long, global = true)]
    pub now: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only items starting within the last N days (0 disables)
    #[arg(long)]
    pub days: Option<u32>,

    /// Client name, or `todos`
    #[arg(long)]
    pub client: Option<String>,

    /// Owner group, or `todos`
    #[arg(long)]
    pub group: Option<String>,

    /// Subgroup or direct member under --group, or `todos`
    #[arg(long)]
    pub subgroup: Option<String>,

    /// Leave out plain tasks
    #[arg(long)]
    pub no_tasks: bool,

    /// Leave out subtasks
    #[arg(long)]
    pub no_subtasks: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List normalized tasks (team timeline)
    Tasks {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List projects rolled up by client and project (client timeline)
    #[command(after_help = "\
NOTE:
  Tasks without a client or project are not part of any project.
  Status: Completed at 100% progress, Delayed when an unfinished task is
  past its due date, otherwise InProgress.")]
    Projects {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Projects arranged in one column per owner group
    Kanban {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the subgroups and direct members of a group
    Subgroups {
        /// Owner group
        #[arg(long)]
        group: String,
    },

    /// Show the clients and groups present in the data
    Options,

    /// Export the filtered collection as CSV
    Export {
        /// What to export
        #[arg(value_enum)]
        target: ExportTarget,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output file (default: <name>_<date>.csv in the current directory)
        #[arg(long, conflicts_with = "stdout")]
        output: Option<String>,

        /// Print the CSV instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Tasks,
    Projects,
}

impl ExportTarget {
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Tasks => "tarefas_por_equipe",
            Self::Projects => "projetos_por_cliente",
        }
    }
}
