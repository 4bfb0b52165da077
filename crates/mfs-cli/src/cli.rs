use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mfs",
    about = "Multi-file record store: one file per key, one file per array element",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Store configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Record file extension, overriding the configuration
    #[arg(short, long, global = true)]
    pub ext: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the record stored in a directory as JSON
    Read(ReadArgs),
    /// Replace the record stored in a directory
    Write(WriteArgs),
    /// List top-level keys and how they are stored
    Keys(KeysArgs),
    /// Print the effective store configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ReadArgs {
    pub dir: Option<PathBuf>,
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct WriteArgs {
    pub dir: Option<PathBuf>,
    /// JSON document holding the record; stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Remove all record files without writing new ones
    #[arg(long, conflicts_with = "input")]
    pub clear: bool,
    /// Indent the JSON written to each file
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct KeysArgs {
    pub dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigArgs {
    pub dir: Option<PathBuf>,
}
