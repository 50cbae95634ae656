//! Concat command implementation
//!
//! The concat command executes the full pipeline:
//! 1. Validate the root directory and build the dependency graph
//! 2. Detect cycles and compute the dependency order
//! 3. Concatenate the ordered files into the output file
//!
//! Non-fatal diagnostics (dangling references, unreadable files) are
//! printed as warnings; any fatal condition fails the command without
//! touching a pre-existing output file.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use depcat::output::{emoji, OutputConfig};
use depcat::phases::orchestrator;

/// Arguments for the concat command
#[derive(Args, Debug)]
pub struct ConcatArgs {
    /// Root directory to scan for .txt files
    #[arg(short, long, value_name = "DIR")]
    pub root: PathBuf,

    /// Path of the output file (fully overwritten)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Show the resolved order before writing
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the concat command
pub fn execute(args: ConcatArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let start_time = Instant::now();

    if !args.quiet {
        println!(
            "{} Resolving dependencies under: {}",
            emoji(&out, "🔍", "[SCAN]"),
            args.root.display()
        );
    }

    let result = orchestrator::execute_concat(&args.root, Some(&args.output));

    match result {
        Ok(report) => {
            if !args.quiet {
                for diagnostic in &report.diagnostics {
                    println!("{} {}", emoji(&out, "⚠️", "[WARN]"), diagnostic);
                }

                if args.verbose {
                    for (index, file) in report.files.iter().enumerate() {
                        println!("   {:>3}. {}", index + 1, file);
                    }
                }

                let duration = start_time.elapsed();
                println!(
                    "{} Concatenated {} files in {:.2}s",
                    emoji(&out, "✅", "[OK]"),
                    report.file_count(),
                    duration.as_secs_f64()
                );
                println!("   Output written to: {}", args.output.display());
            }
            Ok(())
        }
        Err(e) => {
            if !args.quiet {
                println!("{} Concat failed", emoji(&out, "❌", "[ERR]"));
            }
            Err(e.into())
        }
    }
}
