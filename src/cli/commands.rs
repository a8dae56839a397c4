//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "twolist")]
#[command(about = "Work and Travel to-do lists", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new list root
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Select the active category (work, travel)
    Use { category: String },

    /// Show the items of a category
    #[command(alias = "ls")]
    List {
        /// Category to show (default: the selected one)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add an item
    Add {
        /// Category to add to (default: the selected one)
        #[arg(short, long)]
        category: Option<String>,

        /// Item text; words are joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete an item by id
    #[command(alias = "rm")]
    Remove {
        /// Category to delete from (default: the selected one)
        #[arg(short, long)]
        category: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Item id as shown by `list`
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
