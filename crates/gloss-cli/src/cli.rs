use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `gloss` binary.
#[derive(Debug, Parser)]
#[command(name = "gloss", version, about = "Python source extraction and annotation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract a file's declarations as a JSON document
    Extract(ExtractArgs),
    /// Insert generated docstrings, comments, and a summary, then write
    /// the regenerated file alongside the original
    Annotate(AnnotateArgs),
    /// Print a comment-free structural dump of a file's top level
    Strip(StripArgs),
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Python file to analyze
    pub file: PathBuf,

    /// Write the JSON document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Python file to annotate
    pub file: PathBuf,

    /// Remove previously inserted annotations before annotating
    #[arg(long)]
    pub strip_existing: bool,
}

#[derive(Debug, Args)]
pub struct StripArgs {
    /// Python file to dump
    pub file: PathBuf,
}
