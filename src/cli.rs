use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_FILE: &str = "tasks.json";

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Personal to-do list")]
#[command(version)]
pub struct Cli {
    /// Task list file to work on
    #[arg(long, short, global = true, default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,
    },

    /// List all tasks
    List,

    /// Mark a task as completed
    Done {
        /// Task position (1-based)
        position: usize,
    },

    /// Delete a task
    Delete {
        /// Task position (1-based)
        position: usize,
    },

    /// Append the tasks of another list to the end of the active list
    Merge {
        /// List file whose tasks are appended
        source: PathBuf,
    },

    /// Show the task list files in a directory
    Lists {
        /// Directory to scan
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}
