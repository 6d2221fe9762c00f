use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Debug Sweeper - strip leftover debug statements from PHP and JavaScript sources
#[derive(Parser, Debug)]
#[command(name = "debug-sweeper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print the summary line and keep logging at warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove dump, dd, console statements from PHP/JS files
    #[command(name = "clean:debug")]
    CleanDebug(CleanDebugArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct CleanDebugArgs {
    /// Directory or file path to clean [default: app]
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Show what would be cleaned without making changes
    #[arg(long)]
    pub dry: bool,

    /// Create backup before cleaning
    #[arg(long)]
    pub backup: bool,

    /// Language families to clean (comma-separated: php, js)
    #[arg(short, long, value_delimiter = ',', value_name = "LANGS")]
    pub languages: Option<Vec<String>>,

    /// Include hidden files and directories
    #[arg(long)]
    pub hidden: bool,

    /// Parallel clean jobs
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}
