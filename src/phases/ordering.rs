//! Phase 2: Ordering
//!
//! This is the second phase of the `depcat` execution pipeline. Its main
//! responsibility is to reject cyclic dependency graphs and produce the
//! deterministic topological order used for concatenation.
//!
//! ## Process
//!
//! 1.  **Cycle Detection**: A depth-first walk over the frozen graph. Any
//!     cycle — including a file that requires itself — aborts the whole
//!     run before the output file is touched.
//!
//! 2.  **Topological Sort**: With acyclicity confirmed, a second
//!     depth-first pass produces the order: every required file strictly
//!     before every file that requires it, with a fixed lexicographic
//!     tie-break among unconstrained files.
//!
//! This phase produces the ordered list of canonical paths, ready for the
//! write phase.

use crate::error::{Error, Result};
use crate::graph::DependencyGraph;

/// Execute Phase 2: Verify acyclicity and sort the graph.
///
/// Returns the vertices in dependency order, or [`Error::CycleDetected`]
/// naming the file at which a cycle was observed.
pub fn execute(graph: &DependencyGraph) -> Result<Vec<String>> {
    if let Some(vertex) = graph.find_cycle() {
        return Err(Error::CycleDetected { vertex });
    }

    // Acyclicity was just confirmed, so the sort always yields an order.
    Ok(graph.topological_sort().unwrap_or_default())
}
