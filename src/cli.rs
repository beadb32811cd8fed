//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::board::model::{Filter, Priority, SortKey};
use crate::timer::Mode;

/// To-do list, pomodoro timer, quotes and search for students.
#[derive(Debug, Parser)]
#[command(name = "studymate", version)]
pub struct Cli {
    /// Directory holding tasks, preferences and `config.yaml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the to-do list.
    Todo {
        /// To-do action.
        #[command(subcommand)]
        action: TodoCommand,
    },
    /// Run pomodoro intervals.
    Timer(TimerArgs),
    /// Show a motivational quote.
    Quote(QuoteArgs),
    /// Search the web for related topics.
    Search {
        /// Search terms.
        #[arg(required = true, num_args = 1.., value_name = "QUERY")]
        query: Vec<String>,
    },
    /// List what StudyMate can do.
    Features,
    /// Study with flashcards.
    Flashcards,
}

/// To-do list actions.
#[derive(Debug, Subcommand)]
pub enum TodoCommand {
    /// Add a task.
    Add {
        /// Task description.
        #[arg(required = true, num_args = 1.., value_name = "TEXT")]
        text: Vec<String>,
        /// Task priority.
        #[arg(long, short, default_value_t = Priority::Medium)]
        priority: Priority,
    },
    /// Show tasks using the saved filter and sort order.
    List,
    /// Toggle a task between done and not done.
    Done {
        /// Task id or unambiguous id prefix.
        id: String,
    },
    /// Delete a task.
    Delete {
        /// Task id or unambiguous id prefix.
        id: String,
    },
    /// Change a task's text or priority.
    Edit {
        /// Task id or unambiguous id prefix.
        id: String,
        /// Replacement text.
        #[arg(long)]
        text: Option<String>,
        /// Replacement priority.
        #[arg(long, short)]
        priority: Option<Priority>,
    },
    /// Choose which tasks `list` shows.
    Filter {
        /// One of all, active, done.
        filter: Filter,
    },
    /// Choose how `list` orders tasks.
    Sort {
        /// One of added, priority.
        sort: SortKey,
    },
    /// Set the name used in the greeting.
    Name {
        /// Name to greet; empty to clear.
        #[arg(num_args = 0.., value_name = "NAME")]
        name: Vec<String>,
    },
}

/// Options for `studymate quote`.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// How many quotes to show. Every quote after the first is a refresh.
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,
}

/// Options for `studymate timer`.
#[derive(Debug, Args)]
pub struct TimerArgs {
    /// Interval to start with.
    #[arg(long, short, default_value_t = Mode::Focus)]
    pub mode: Mode,
    /// Number of intervals to run before exiting.
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub cycles: u32,
    /// Do not play the completion sound.
    #[arg(long, short)]
    pub quiet: bool,
}
