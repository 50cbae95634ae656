//! Phase 1: Discovery
//!
//! This is the first phase of the `depcat` execution pipeline. Its main
//! responsibility is to walk the root directory tree, discover eligible
//! `.txt` files, parse their `require` directives, and build the full
//! dependency graph.
//!
//! ## Process
//!
//! 1.  **Validate Root**: The root path must exist and be a directory;
//!     anything else aborts the whole run with no partial graph.
//!
//! 2.  **Walk the Tree**: `walkdir` visits every entry under the root,
//!     name-sorted and contents-first, so the traversal is stable within
//!     and across runs.
//!
//! 3.  **Parse Directives**: Each eligible file is read whole and handed
//!     to the directive parser. Every reference is resolved by joining it
//!     onto the *run root* — never onto the requiring file's own
//!     directory. This root-relative rule is deliberate and kept for
//!     compatibility with the directive format as shipped; see the tests.
//!
//! 4.  **Build the Graph**: Every resolved, existing reference becomes an
//!     edge from the required file to the requiring file. References that
//!     do not resolve to a regular file, and files that cannot be read,
//!     are recorded as diagnostics and skipped; the walk continues.
//!
//! This phase produces a [`WalkReport`] holding the frozen graph and the
//! collected diagnostics, ready for the ordering phase.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use walkdir::WalkDir;

use super::{Diagnostic, WalkReport};
use crate::directive;
use crate::error::{Error, Result};

/// File extension that marks a file as eligible for directive parsing.
const ELIGIBLE_EXTENSION: &str = "txt";

/// Execute Phase 1: Walk the tree under `root` and build the dependency
/// graph.
///
/// Fails only if `root` does not exist or is not a directory. Per-file
/// and per-reference problems are collected as diagnostics in the
/// returned report and logged as warnings.
pub fn execute(root: &Path) -> Result<WalkReport> {
    let root = fs::canonicalize(root).map_err(|_| Error::InvalidRoot {
        path: root.to_path_buf(),
    })?;
    if !root.is_dir() {
        return Err(Error::InvalidRoot { path: root });
    }

    let mut report = WalkReport::default();

    for entry in WalkDir::new(&root)
        .sort_by_file_name()
        .contents_first(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // A directory that cannot be listed skips its files, not
                // the rest of the walk.
                let path = e.path().unwrap_or(&root).to_path_buf();
                let diagnostic = Diagnostic::UnreadableFile {
                    path,
                    message: e.to_string(),
                };
                warn!("{}", diagnostic);
                report.diagnostics.push(diagnostic);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some(ELIGIBLE_EXTENSION) {
            continue;
        }

        process_file(&root, entry.path(), &mut report);
    }

    Ok(report)
}

/// Process one eligible file: read it, parse its directives, and insert
/// its vertex and edges into the graph.
fn process_file(root: &Path, file: &Path, report: &mut WalkReport) {
    let canonical = match fs::canonicalize(file) {
        Ok(path) => path,
        Err(e) => {
            record_unreadable(report, file, &e);
            return;
        }
    };

    let content = match fs::read_to_string(&canonical) {
        Ok(content) => content,
        Err(e) => {
            record_unreadable(report, &canonical, &e);
            return;
        }
    };

    let identity = canonical.to_string_lossy().into_owned();
    report.graph.add_vertex(&identity);
    debug!("discovered {}", identity);

    for reference in directive::references(&content) {
        // References resolve against the run root, not the requiring
        // file's directory. The reference is always appended: a leading
        // separator does not replace the root.
        let candidate = root.join(reference.trim_start_matches('/'));
        if !candidate.is_file() {
            let diagnostic = Diagnostic::InvalidReference {
                file: canonical.clone(),
                reference: reference.to_string(),
                resolved: candidate,
            };
            warn!("{}", diagnostic);
            report.diagnostics.push(diagnostic);
            continue;
        }

        let required = match fs::canonicalize(&candidate) {
            Ok(path) => path,
            Err(e) => {
                record_unreadable(report, &candidate, &e);
                continue;
            }
        };

        report
            .graph
            .add_edge(&required.to_string_lossy(), &identity);
    }
}

fn record_unreadable(report: &mut WalkReport, path: &Path, e: &std::io::Error) {
    let diagnostic = Diagnostic::UnreadableFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    warn!("{}", diagnostic);
    report.diagnostics.push(diagnostic);
}
