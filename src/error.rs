//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `depcat` application. It uses the `thiserror` library to create an
//! `Error` enum that covers the fatal failure modes of the pipeline,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all fatal errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures.
//!
//! Only *fatal* conditions are represented here: an invalid root directory,
//! a cyclic dependency graph, a failure to create or write the output file,
//! and wrapped I/O errors. Non-fatal, per-file conditions (a dangling
//! reference, an unreadable file) are not errors at all — they are recorded
//! as [`crate::phases::Diagnostic`] values and the run continues.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for depcat operations
#[derive(Error, Debug)]
pub enum Error {
    /// The root directory path does not exist or is not a directory.
    ///
    /// This aborts the whole run before any graph is built and before the
    /// output file is touched.
    #[error("Invalid root directory path: {}", path.display())]
    InvalidRoot { path: PathBuf },

    /// A circular dependency was detected among the discovered files.
    ///
    /// Includes the file at which the cycle was observed during the
    /// depth-first walk.
    #[error("Cyclic dependency detected at: {vertex}")]
    CycleDetected { vertex: String },

    /// The output file could not be created or written.
    #[error("Failed to write output file '{}': {message}", path.display())]
    OutputWrite { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
