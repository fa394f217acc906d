//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// revmark - Mark line ranges of source files with review tags
#[derive(Parser, Debug)]
#[command(name = "revmark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Tag settings file (defaults to ./revmark.toml when present)
    #[arg(long, global = true, env = "REVMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Tag a line range of a file
    ///
    /// Lines are 1-based and inclusive. A range that starts or ends inside
    /// a native multi-line comment is widened to enclose the whole comment.
    ///
    /// Examples:
    ///   revmark add src/Main.java r1 12 18   # Tag lines 12 to 18
    ///   revmark add src/Main.java r2 40      # Tag line 40 only
    Add {
        /// File to tag
        file: PathBuf,

        /// Tag identifier
        identifier: String,

        /// First line of the range
        start: usize,

        /// Last line of the range (defaults to the first)
        end: Option<usize>,

        /// Use this language's comment syntax instead of the file extension's
        #[arg(short, long)]
        language: Option<String>,

        /// Print the result without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove the tags with an identifier
    Remove {
        /// File to untag
        file: PathBuf,

        /// Tag identifier
        identifier: String,

        /// Treat the identifier as a regular expression
        #[arg(long)]
        regex: bool,

        /// Use this language's comment syntax instead of the file extension's
        #[arg(short, long)]
        language: Option<String>,

        /// Print the result without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove every tag from a file
    Clear {
        /// File to clear
        file: PathBuf,

        /// Use this language's comment syntax instead of the file extension's
        #[arg(short, long)]
        language: Option<String>,

        /// Print the result without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// List the tagged ranges of a file
    List {
        /// File to inspect
        file: PathBuf,

        /// Use this language's comment syntax instead of the file extension's
        #[arg(short, long)]
        language: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the configured languages and their comment syntax
    Languages {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Write the default settings to revmark.toml
    Init {
        /// Overwrite an existing revmark.toml
        #[arg(long)]
        force: bool,
    },
}
