//! Command implementations for the campsite demand CLI.
//!
//! Every subcommand reads the same JSON document the web chart fetches,
//! either from a local path or an http(s) URL, and runs it through the
//! same validation before doing anything else.

use clap::Subcommand;

pub mod render;
pub mod source;
pub mod summary;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// Parse and validate a campsite dataset, reporting what it holds
    Validate {
        /// Path or http(s) URL of the dataset JSON
        #[arg(short = 's', long)]
        source: String,
    },

    /// Per-park overview: cluster, peak demand week and booking records
    Summary {
        /// Path or http(s) URL of the dataset JSON
        #[arg(short = 's', long)]
        source: String,

        /// Write the overview as CSV to this path instead of printing a table
        #[arg(long)]
        csv: Option<String>,
    },

    /// Render the inset chart for a park (and optionally a camping date) to SVG
    Render {
        /// Path or http(s) URL of the dataset JSON
        #[arg(short = 's', long)]
        source: String,

        /// Park short-name or key, e.g. "Zion" or "SequoiaKings"
        #[arg(short = 'p', long)]
        park: String,

        /// Camping date (YYYY-MM-DD) whose booking curve to overlay
        #[arg(short = 'd', long)]
        date: Option<String>,

        /// Output path for the inset document
        #[arg(short = 'o', long)]
        out: String,

        /// Also write the small-multiples grid to this path
        #[arg(long)]
        panels: Option<String>,

        /// Panels per row in the small-multiples grid
        #[arg(long, default_value_t = 6)]
        columns: usize,

        /// Write the inset scene as JSON instead of SVG
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Validate { source } => validate::run_validate(&source).await,
        Command::Summary { source, csv } => summary::run_summary(&source, csv.as_deref()).await,
        Command::Render {
            source,
            park,
            date,
            out,
            panels,
            columns,
            json,
        } => {
            render::run_render(render::RenderArgs {
                source: &source,
                park: &park,
                date: date.as_deref(),
                out: &out,
                panels: panels.as_deref(),
                columns,
                json,
            })
            .await
        }
    }
}
