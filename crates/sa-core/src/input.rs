//! Input source resolution: a file path or standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Where the series is read from.
///
/// The reader handed out by [`InputSource::open`] is scoped to the read:
/// dropping it releases the underlying file handle on every exit path.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Read from standard input.
    Stdin,
    /// Read from a file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Resolve from an optional CLI path; absence means standard input.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Open the source for buffered line-by-line reading.
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            InputSource::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn absent_path_resolves_to_stdin() {
        assert!(matches!(InputSource::from_arg(None), InputSource::Stdin));
        assert_eq!(InputSource::Stdin.name(), "<stdin>");
    }

    #[test]
    fn file_name_is_the_path() {
        let source = InputSource::from_arg(Some(PathBuf::from("data/series.txt")));
        assert_eq!(source.name(), "data/series.txt");
    }

    #[test]
    fn opening_a_missing_file_fails() {
        let source = InputSource::File(PathBuf::from("/nonexistent/series.txt"));
        assert!(source.open().is_err());
    }

    #[test]
    fn opening_an_existing_file_reads_its_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "1.5").expect("write temp file");

        let source = InputSource::File(file.path().to_path_buf());
        let mut lines = source.open().expect("open temp file").lines();
        assert_eq!(lines.next().expect("one line").expect("valid utf-8"), "1.5");
    }
}
