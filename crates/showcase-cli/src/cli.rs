//! Command-line arguments.

use clap::{Parser, Subcommand};
use showcase_core::IdMatching;
use showcase_views::DetailVariant;

/// Showcase - browse a hosted project portfolio from the terminal
#[derive(Parser, Debug)]
#[command(name = "showcase", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "SHOWCASE_CONFIG")]
    pub config: Option<String>,

    /// Read projects from a local JSON document instead of the store
    #[arg(short, long)]
    pub file: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every hosted project
    List,

    /// Show two projects picked at random
    Random,

    /// Show one project by id
    Detail(DetailArgs),

    /// Manage the configuration file
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments of `showcase detail`.
#[derive(clap::Args, Debug)]
pub struct DetailArgs {
    /// Project id as it appears in `/newprojects/{id}`
    pub id: String,

    /// Layout: `full` (comments, link, date) or `compact`
    #[arg(long, default_value = "full")]
    pub variant: DetailVariant,

    /// Override how the id is matched: `numeric`, `exact` or `canonical`
    #[arg(long = "match")]
    pub matching: Option<IdMatching>,

    /// Read commands from stdin after rendering
    #[arg(short, long)]
    pub interactive: bool,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,

    /// Print a value by dotted key, e.g. `store.bin_id`
    Get {
        /// Dotted key
        key: String,
    },

    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value; booleans and numbers are detected
        value: String,
    },

    /// Write a default config file
    Init {
        /// Where to write it instead of the default location
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the config as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}
