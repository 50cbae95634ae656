//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, which runs the
//! discovery and ordering phases without writing any output.
//!
//! ## Functionality
//!
//! - **Root Validation**: Verifies the root path exists and is a directory.
//! - **Cycle Detection**: Checks for circular dependencies among files.
//! - **Order Preview**: Prints the resolved dependency order.
//! - **Diagnostics**: Reports dangling references and unreadable files.
//!
//! This command is a safe, read-only operation that does not modify any
//! files.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use depcat::output::{emoji, OutputConfig};
use depcat::phases::orchestrator;

/// Check dependency resolution without writing an output file
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Root directory to scan for .txt files
    #[arg(short, long, value_name = "DIR")]
    pub root: PathBuf,

    /// Use strict checking (fail on warnings)
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `check` command.
///
/// Walks the tree, builds the graph, and verifies acyclicity, reporting
/// the resolved order and every non-fatal diagnostic.
pub fn execute(args: CheckArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    println!(
        "{} Checking dependencies under: {}",
        emoji(&out, "🔍", "[SCAN]"),
        args.root.display()
    );

    let report = match orchestrator::execute_concat(&args.root, None) {
        Ok(report) => report,
        Err(e) => {
            println!("{} Check failed: {}", emoji(&out, "❌", "[ERR]"), e);
            return Err(e.into());
        }
    };

    println!(
        "{} No circular dependencies detected",
        emoji(&out, "✅", "[OK]")
    );
    println!("   {} files in dependency order:", report.file_count());
    for (index, file) in report.files.iter().enumerate() {
        println!("   {:>3}. {}", index + 1, file);
    }

    if !report.diagnostics.is_empty() {
        println!(
            "\n{} {} warning(s):",
            emoji(&out, "⚠️", "[WARN]"),
            report.diagnostics.len()
        );
        for diagnostic in &report.diagnostics {
            println!("   {}", diagnostic);
        }
        if args.strict {
            anyhow::bail!("check failed: {} warning(s) in strict mode", report.diagnostics.len());
        }
    }

    Ok(())
}
