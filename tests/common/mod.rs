//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_chain();
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// A temporary directory tree of `.txt` files with `require` directives.
pub struct TestFixture {
    temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create an empty fixture directory.
    pub fn new() -> Self {
        Self {
            temp: assert_fs::TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write a file (creating parent directories) under the fixture root.
    pub fn write(self, relative: &str, content: &str) -> Self {
        self.temp
            .child(relative)
            .write_str(content)
            .expect("failed to write fixture file");
        self
    }

    /// The standard three-file chain: `a.txt` <- `b.txt` <- `c.txt`.
    pub fn with_chain(self) -> Self {
        self.write("a.txt", "alpha\n")
            .write("b.txt", "require \"a.txt\"\nbeta\n")
            .write("c.txt", "require \"b.txt\"\ngamma\n")
    }

    /// A two-file cycle: `x.txt` and `y.txt` require each other.
    pub fn with_cycle(self) -> Self {
        self.write("x.txt", "require \"y.txt\"\nex\n")
            .write("y.txt", "require \"x.txt\"\nwhy\n")
    }

    /// The fixture root directory.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// A path under the fixture root (not created).
    pub fn path(&self, relative: &str) -> std::path::PathBuf {
        self.temp.path().join(relative)
    }
}
