//! Shared results file handling.
//!
//! All three solvers funnel their results into one text file. Append-mode
//! solvers get a labeled separator line before their section; takaken74
//! rewrites the file itself and the runner only reads it back afterwards.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Placeholder recorded when a solver exits cleanly without printing anything.
pub const NO_OUTPUT_PLACEHOLDER: &str = "No output received.";

/// How a solver's results reach the shared output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// The solver truncates and rewrites the file through its own flag.
    Overwrite,
    /// The runner appends a labeled section containing the solver's stdout.
    Append,
}

/// Appends a labeled results section to the output file.
///
/// The section is preceded by a blank line and the literal separator
/// `--- <label> Results ---`. Empty stdout is recorded as
/// [`NO_OUTPUT_PLACEHOLDER`]. The file handle is opened and closed within
/// this call; nothing is held across invocations.
pub fn append_section(path: &Path, label: &str, stdout: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "\n--- {} Results ---\n", label)?;
    if stdout.is_empty() {
        writeln!(file, "{}", NO_OUTPUT_PLACEHOLDER)?;
    } else {
        file.write_all(stdout.as_bytes())?;
    }
    Ok(())
}

/// Reads back the full contents of the output file.
pub fn read_contents(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_section_exact_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("results.txt");
        fs::write(&path, "prior content\n").unwrap();

        append_section(&path, "YASS Solver", "pushed 3 boxes\n").unwrap();

        let contents = read_contents(&path).unwrap();
        assert_eq!(
            contents,
            "prior content\n\n--- YASS Solver Results ---\npushed 3 boxes\n"
        );
    }

    #[test]
    fn test_append_section_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fresh.txt");

        append_section(&path, "Sokoban Solver Two", "solution: LURD\n").unwrap();

        let contents = read_contents(&path).unwrap();
        assert_eq!(contents, "\n--- Sokoban Solver Two Results ---\nsolution: LURD\n");
    }

    #[test]
    fn test_append_section_placeholder_on_empty_stdout() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("results.txt");

        append_section(&path, "Sokoban Solver Two", "").unwrap();

        let contents = read_contents(&path).unwrap();
        assert_eq!(
            contents,
            "\n--- Sokoban Solver Two Results ---\nNo output received.\n"
        );
    }

    #[test]
    fn test_sections_accumulate_in_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("results.txt");

        append_section(&path, "Sokoban Solver Two", "first\n").unwrap();
        append_section(&path, "YASS Solver", "second\n").unwrap();

        let contents = read_contents(&path).unwrap();
        let two_at = contents.find("--- Sokoban Solver Two Results ---").unwrap();
        let yass_at = contents.find("--- YASS Solver Results ---").unwrap();
        assert!(two_at < yass_at);
        assert!(contents.contains("first\n"));
        assert!(contents.contains("second\n"));
    }

    #[test]
    fn test_read_contents_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        assert!(read_contents(&temp.path().join("absent.txt")).is_err());
    }
}
