use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "stashit")]
#[command(version, about = "Stash files and text, then drop them anywhere in one go", long_about = None)]
pub struct Cli {
    /// Answer "yes" to every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat these paths as the file-manager selection
    #[arg(long = "select", global = true, value_name = "PATH", num_args = 1..)]
    pub select: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add the file-manager selection, or the clipboard, to the stack
    Capture,
    /// Show the stack, newest first
    List {
        /// Print each item's detail block
        #[arg(short, long)]
        detail: bool,
        /// Print the items as JSON
        #[arg(long, conflicts_with = "detail")]
        json: bool,
    },
    /// Put every stashed file on the clipboard
    Copy,
    /// Copy or move the whole stack into a folder
    Drop {
        /// Destination folder; defaults to the file-manager selection
        #[arg(value_name = "DEST")]
        destinations: Vec<String>,
        /// Move files instead of copying them
        #[arg(long = "move")]
        move_items: bool,
    },
    /// Remove every item from the stack
    Clear,
    /// Remove one item from the stack
    Remove {
        /// Item id as shown by `list`
        id: String,
    },
    /// Put a single file item on the clipboard
    CopyItem { id: String },
    /// Copy an item's text, or a file item's path, as plain text
    CopyText { id: String },
    /// Open a file item with its default application
    Open { id: String },
    /// Show a file item in the file manager
    Reveal { id: String },
    /// Show configuration and stack size
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn drop_accepts_several_destinations_and_move() {
        let cli = Cli::try_parse_from(["stashit", "drop", "/a", "/b", "--move"]).unwrap();
        match cli.command {
            Command::Drop {
                destinations,
                move_items,
            } => {
                assert_eq!(destinations, ["/a", "/b"]);
                assert!(move_items);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn open_and_reveal_take_an_id() {
        let cli = Cli::try_parse_from(["stashit", "reveal", "abc"]).unwrap();
        assert!(matches!(cli.command, Command::Reveal { id } if id == "abc"));
        assert!(Cli::try_parse_from(["stashit", "open"]).is_err());
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = Cli::try_parse_from(["stashit", "clear", "--yes"]).unwrap();
        assert!(cli.yes);
        let cli =
            Cli::try_parse_from(["stashit", "capture", "--select", "/x/a.txt", "/x/b.txt"]).unwrap();
        assert_eq!(cli.select, ["/x/a.txt", "/x/b.txt"]);
    }
}
