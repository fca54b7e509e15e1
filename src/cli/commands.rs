//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "metahead")]
#[command(about = "HTML meta tag generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a starter metahead.toml
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Render the meta tag block
    Render {
        /// Config file (default: METAHEAD_CONFIG, then ./metahead.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Set a tag (repeatable)
        #[arg(short, long, value_name = "NAME=CONTENT")]
        tag: Vec<String>,

        /// Append to a tag's current content (repeatable)
        #[arg(short, long, value_name = "NAME=CONTENT")]
        append: Vec<String>,

        /// Add a keyword (repeatable)
        #[arg(short, long, value_name = "WORD")]
        keyword: Vec<String>,

        /// Add a robots rule (repeatable)
        #[arg(short, long, value_name = "RULE")]
        robots: Vec<String>,

        /// Write the block to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the config snapshot a render would start from
    Show {
        /// Config file (default: METAHEAD_CONFIG, then ./metahead.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
