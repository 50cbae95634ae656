//! Orchestrator for the complete concat operation
//!
//! This module coordinates all phases to provide a clean API for the
//! complete concat operation: validate root → walk and build the graph →
//! check acyclicity → sort → write.

use std::path::Path;

use super::{discovery, ordering, write, ConcatReport};
use crate::error::Result;

/// Execute the complete concat operation.
///
/// This orchestrates the full pipeline:
/// 1. Validate the root and build the dependency graph (discovery)
/// 2. Reject cycles and compute the dependency order (ordering)
/// 3. Concatenate the ordered files into the output (write)
///
/// If `output` is `None`, phases 1-2 run but nothing is written — this is
/// the read-only check mode. Any fatal condition surfaces as an `Err` and
/// leaves a pre-existing output file untouched, because the output is
/// only ever opened in the final phase.
pub fn execute_concat(root: &Path, output: Option<&Path>) -> Result<ConcatReport> {
    // Phase 1: Discovery (validates the root, builds the frozen graph)
    let walk = discovery::execute(root)?;

    // Phase 2: Ordering (cycle detection, then topological sort)
    let files = ordering::execute(&walk.graph)?;

    // Phase 3: Write to disk (if an output path was provided)
    if let Some(output) = output {
        write::execute(&files, output)?;
    }

    Ok(ConcatReport {
        files,
        diagnostics: walk.diagnostics,
    })
}
