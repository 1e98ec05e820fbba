//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jctl")]
#[command(about = "Personal journal manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log what jctl is doing to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Edit the entry whose name contains every keyword
    #[command(visible_alias = "e")]
    Edit {
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Find entries whose text contains every keyword (ignoring case)
    #[command(visible_alias = "s")]
    Search {
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Create a dated entry from a title
    #[command(visible_alias = "n")]
    New {
        #[arg(required = true)]
        title: Vec<String>,

        /// Layout (built-in: post, note; or a custom template name)
        #[arg(short, long)]
        layout: Option<String>,

        /// Create the entry without opening it
        #[arg(long)]
        no_edit: bool,
    },

    /// Set an entry's date to now
    #[command(visible_alias = "t")]
    Touch {
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Rename an entry to match its title and date
    #[command(visible_alias = "f")]
    Fix {
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// List entries, newest first
    #[command(visible_aliases = ["l", "ls"])]
    List { keywords: Vec<String> },

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
