//! Phase 3: Writing to Disk
//!
//! This is the final phase of the `depcat` execution pipeline. Its main
//! responsibility is to concatenate the ordered input files into the
//! single output file.
//!
//! ## Process
//!
//! 1.  **Truncate-Create**: The output file is created fresh; any
//!     pre-existing content at the output path is discarded before
//!     writing begins.
//!
//! 2.  **Stream Lines**: Every line of every input file is appended in
//!     order, each terminated by a single newline.
//!
//! A failure to create or write the output is fatal and surfaces to the
//! caller; content already written by then is left in a partial state
//! (best-effort overwrite, not transactional).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Execute Phase 3: Concatenate `files` (in order) into `output`.
pub fn execute(files: &[String], output: &Path) -> Result<()> {
    let out = File::create(output).map_err(|e| Error::OutputWrite {
        path: output.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut writer = BufWriter::new(out);

    for path in files {
        let content = fs::read_to_string(path)?;
        for line in content.lines() {
            write_line(&mut writer, line, output)?;
        }
    }

    writer.flush().map_err(|e| Error::OutputWrite {
        path: output.to_path_buf(),
        message: e.to_string(),
    })
}

fn write_line(writer: &mut impl Write, line: &str, output: &Path) -> Result<()> {
    writer
        .write_all(line.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .map_err(|e| Error::OutputWrite {
            path: output.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture(temp: &TempDir, name: &str, content: &str) -> String {
        let path = temp.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_concatenates_in_given_order() {
        let temp = TempDir::new().unwrap();
        let a = fixture(&temp, "a.txt", "alpha\n");
        let b = fixture(&temp, "b.txt", "beta one\nbeta two\n");
        let output = temp.path().join("out.txt");

        execute(&[a, b], &output).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "alpha\nbeta one\nbeta two\n"
        );
    }

    #[test]
    fn test_missing_trailing_newline_is_added() {
        let temp = TempDir::new().unwrap();
        let a = fixture(&temp, "a.txt", "no trailing newline");
        let output = temp.path().join("out.txt");

        execute(&[a], &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "no trailing newline\n");
    }

    #[test]
    fn test_previous_output_is_fully_replaced() {
        let temp = TempDir::new().unwrap();
        let a = fixture(&temp, "a.txt", "new\n");
        let output = temp.path().join("out.txt");
        fs::write(&output, "old content that is much longer than the new one\n").unwrap();

        execute(&[a], &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "new\n");
    }

    #[test]
    fn test_empty_input_produces_empty_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.txt");

        execute(&[], &output).unwrap();
        assert!(output.exists());
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_uncreatable_output_is_fatal() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("no/such/dir/out.txt");

        let result = execute(&[], &output);
        assert!(matches!(result, Err(Error::OutputWrite { .. })));
    }
}
