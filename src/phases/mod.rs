//! Implementation of the phases of the depcat concat operation.
//!
//! ## Overview
//!
//! The concat operation follows 3 phases after root validation:
//! 1. Discovery - Walk the root directory tree, parse `require` directives,
//!    and build the dependency graph (collecting non-fatal diagnostics)
//! 2. Ordering - Reject cyclic graphs, then topologically sort the vertices
//! 3. Writing to Disk - Concatenate the ordered files into the output file
//!
//! Each phase depends only on the previous phases. Fatal conditions (invalid
//! root, cycle, output write failure) abort the pipeline; per-file conditions
//! (a dangling reference, an unreadable file) are recorded as [`Diagnostic`]
//! values alongside the graph and never stop the run.

use std::fmt;
use std::path::PathBuf;

use crate::graph::DependencyGraph;

// Phase modules
pub mod discovery;
pub mod orchestrator;
pub mod ordering;
pub mod write;

/// A non-fatal condition encountered while building the graph.
///
/// Diagnostics are accumulated alongside the graph rather than interleaved
/// into traversal control flow, so callers can render them however they
/// like after the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A `require` reference resolved to a path that does not exist or is
    /// not a regular file. The edge is dropped; everything else proceeds.
    InvalidReference {
        /// The file containing the directive.
        file: PathBuf,
        /// The reference string as written.
        reference: String,
        /// The path the reference resolved to.
        resolved: PathBuf,
    },
    /// An eligible file could not be opened or read. The file is skipped.
    UnreadableFile { path: PathBuf, message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidReference {
                file,
                reference,
                resolved,
            } => write!(
                f,
                "invalid reference \"{}\" in {} (resolved to {})",
                reference,
                file.display(),
                resolved.display()
            ),
            Diagnostic::UnreadableFile { path, message } => {
                write!(f, "cannot read file {}: {}", path.display(), message)
            }
        }
    }
}

/// Result of the discovery phase: the dependency graph plus every
/// non-fatal diagnostic collected while building it.
#[derive(Debug, Default)]
pub struct WalkReport {
    /// The full dependency graph over canonical absolute paths.
    pub graph: DependencyGraph,
    /// Non-fatal conditions, in the order they were encountered.
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of a successful concat run.
#[derive(Debug)]
pub struct ConcatReport {
    /// Canonical paths of the concatenated files, in dependency order.
    pub files: Vec<String>,
    /// Non-fatal conditions encountered during discovery.
    pub diagnostics: Vec<Diagnostic>,
}

impl ConcatReport {
    /// Number of files written to the output.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
