//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// depcat - Concatenate text files in require-directive dependency order
#[derive(Parser, Debug)]
#[command(name = "depcat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve require dependencies and concatenate files into one output
    Concat(commands::concat::ConcatArgs),

    /// Walk the tree and report the dependency order without writing
    Check(commands::check::CheckArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .try_init()
            .ok();

        match self.command {
            Commands::Concat(args) => commands::concat::execute(args, &self.color),
            Commands::Check(args) => commands::check::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
