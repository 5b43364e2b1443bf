use clap::{Parser, Subcommand};
use roster::commands::action::parse_action;
use roster::query::StatusFilter;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Contacts and tasks in plain JSON files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage contacts
    #[command(subcommand)]
    Contacts(ContactCommands),

    /// Manage tasks
    #[command(subcommand)]
    Tasks(TaskCommands),

    /// Get or set configuration values
    Config {
        /// Configuration key (contacts-file, tasks-file, duplicate-policy)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },

    /// Create the data directory and a default config
    Init,
}

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// List every contact
    #[command(alias = "ls")]
    List,

    /// Add a contact
    Add {
        name: String,
        /// Exactly 10 digits
        phone: String,
        #[arg(long)]
        email: Option<String>,
    },

    /// Show a contact by id, or every contact with a name
    Show {
        /// Id or name
        #[arg(allow_hyphen_values = true)]
        selector: String,
    },

    /// Search names (default) or phone numbers
    Search {
        query: String,
        /// Search phone numbers instead of names
        #[arg(long)]
        phone: bool,
    },

    /// Update a contact's fields
    Update {
        /// Id or name
        #[arg(allow_hyphen_values = true)]
        selector: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a contact by id or name
    #[command(alias = "rm")]
    Delete {
        /// Id or name
        #[arg(allow_hyphen_values = true)]
        selector: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks
    #[command(alias = "ls")]
    List {
        /// all, completed or incomplete
        #[arg(long, default_value = "all", value_parser = parse_status)]
        status: StatusFilter,
    },

    /// Add a task
    Add {
        /// Description words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
        /// High, Medium or Low
        #[arg(short, long)]
        priority: String,
    },

    /// Mark a task as completed
    #[command(alias = "done")]
    Complete {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// Delete one task, or every completed task
    #[command(alias = "rm")]
    Delete {
        #[arg(
            required_unless_present = "completed",
            conflicts_with = "completed",
            allow_hyphen_values = true
        )]
        id: Option<String>,
        /// Delete all completed tasks
        #[arg(long)]
        completed: bool,
    },
}

fn parse_status(raw: &str) -> Result<StatusFilter, String> {
    parse_action::<StatusFilter>(raw).map_err(|e| e.to_string())
}
