//! # depcat Library
//!
//! This library provides the core functionality for resolving textual
//! `require` dependencies among `.txt` files in a directory tree and
//! concatenating them into a single output file in dependency order. It
//! is designed to be used by the `depcat` command-line tool but can also
//! be embedded in other applications.
//!
//! ## Quick Example
//!
//! ```no_run
//! use std::path::Path;
//! use depcat::phases::orchestrator;
//!
//! let report = orchestrator::execute_concat(
//!     Path::new("project/texts"),
//!     Some(Path::new("bundle.txt")),
//! )?;
//! println!("{} files concatenated", report.file_count());
//! for diagnostic in &report.diagnostics {
//!     eprintln!("warning: {}", diagnostic);
//! }
//! # Ok::<(), depcat::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Directives (`directive`)**: A file declares a dependency with a
//!   `require "path"` line; the reference resolves against the *run root*
//!   directory, never against the requiring file's own location.
//! - **Dependency Graph (`graph`)**: A directed graph keyed by canonical
//!   absolute path, with edges from required files to their dependents,
//!   cycle detection, and a deterministic topological sort.
//! - **Phases (`phases`)**: The pipeline — discovery (walk + graph
//!   build), ordering (cycle check + sort), and writing — sequenced by
//!   `phases::orchestrator`.
//!
//! ## Failure Policy
//!
//! An invalid root directory, a dependency cycle, or an unwritable output
//! file aborts the run ([`error::Error`]). A dangling reference or an
//! unreadable input file only produces a [`phases::Diagnostic`]; the rest
//! of the tree still resolves.

pub mod directive;
pub mod error;
pub mod graph;
pub mod output;
pub mod phases;
