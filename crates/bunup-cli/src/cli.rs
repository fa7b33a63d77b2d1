use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bunup", version, about = "Official CLI for Bunup")]
pub struct Cli {
    /// Settings file (template source, package manager, steps)
    #[arg(long, global = true, env = "BUNUP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Scaffold a new project with Bunup
    Create,
}
