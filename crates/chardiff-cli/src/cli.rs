use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chardiff",
    about = "Character-level diff of two strings",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with render settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the removed, added, and unchanged runs between two inputs
    Diff(InputArgs),
    /// Show run counts and similarity between two inputs
    Stats(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    pub old: String,
    pub new: String,
    /// Treat OLD and NEW as file paths
    #[arg(long)]
    pub files: bool,
}
