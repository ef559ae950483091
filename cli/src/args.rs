use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pinlist")]
#[command(about = "Ordered file bookmarks with named, reloadable lists")]
#[command(version)]
pub struct Args {
    /// Data directory (default: $PINLIST_DATA_DIR, then $XDG_DATA_HOME/pinlist)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Bookmark a path (default: current directory)
    Add { path: Option<PathBuf> },

    /// Print the current list
    List,

    /// Remove the entry at INDEX
    Rm { index: usize },

    /// Move the entry at FROM to TO
    Mv { from: usize, to: usize },

    /// Save the current list under NAME
    SaveAs { name: String },

    /// Load a saved list; without NAME, pick one interactively
    Load { name: Option<String> },

    /// Delete the saved list NAME
    DeleteSaved {
        name: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the names of saved lists
    Saved,

    /// Print the entry bound to TRIGGER
    Nav { trigger: String },

    /// Print the entry at INDEX
    Go { index: usize },

    /// Show the list and edit it interactively
    Ui,
}
