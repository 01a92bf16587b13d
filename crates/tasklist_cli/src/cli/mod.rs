use clap::{Parser, Subcommand};
use tasklist_core::{Category, Priority, TaskFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE", global = true)]
    pub config_override: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: tasklist add "Buy milk" --category shopping --priority low
    Add {
        text: Option<String>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        priority: Option<Priority>,
        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(long = "due", value_name = "DATE")]
        due_date: Option<String>,
    },
    /// List tasks
    ///
    /// Example: tasklist list --filter active
    List {
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
    },
    /// Show details of a task
    ///
    /// Example: tasklist show 1
    Show { id: u64 },
    /// Replace a task's fields
    ///
    /// Fields not given fall back to their defaults.
    ///
    /// Example: tasklist edit 1 "Buy oat milk" --category shopping
    Edit {
        id: u64,
        text: String,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long = "due", value_name = "DATE")]
        due_date: Option<String>,
        #[arg(long)]
        completed: bool,
    },
    /// Flip a task between active and completed
    ///
    /// Example: tasklist toggle 1
    Toggle { id: u64 },
    /// Delete a task by id, or every task with the given text
    ///
    /// Example: tasklist delete 1
    /// Example: tasklist delete --text "Buy milk"
    Delete {
        #[arg(conflicts_with = "text", required_unless_present = "text")]
        id: Option<u64>,
        #[arg(long)]
        text: Option<String>,
    },
    /// Show total, completed and active counts
    Summary,
}
