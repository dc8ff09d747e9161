use clap::{Parser, Subcommand};
use mastery_core::model::{Category, TopicId};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "react-master")]
#[command(about = "Track progress through the React Master lessons")]
#[command(version)]
pub struct Cli {
    /// SQLite database holding the progress record
    #[arg(
        long,
        global = true,
        env = "MASTERY_DB_URL",
        value_name = "URL",
        default_value = "sqlite://mastery.sqlite3"
    )]
    pub db: String,

    /// Log filter directives; overrides RUST_LOG
    #[arg(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,

    /// Subcommand to execute. Launches the desktop UI when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the desktop UI
    Ui,
    /// Print overall and per-category progress
    Status {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Flip completion of one topic
    Toggle {
        /// Topic id, e.g. `usestate-hook`
        id: TopicId,
    },
    /// Clear all progress and delete the stored record
    Reset,
    /// List topics with their completion marks
    Topics {
        /// Only topics covered by this lesson route, e.g. `/hooks-demo`
        #[arg(long, value_name = "PATH", conflicts_with = "category")]
        route: Option<String>,

        /// Only topics of one category: beginner, intermediate or advanced
        #[arg(long)]
        category: Option<Category>,
    },
}
