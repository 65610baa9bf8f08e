use crate::utils::error::{PuzzleError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// All lines of `path`, in order, without line terminators.
/// The file is closed before this returns, on success and on error.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PuzzleError::MissingInputFile {
            path: path.display().to_string(),
        },
        _ => PuzzleError::IoError(e),
    })?;

    tracing::debug!("Opened input file: {}", path.display());
    lines_from_reader(BufReader::new(file))
}

pub fn lines_from_reader(input: impl BufRead) -> Result<Vec<String>> {
    input
        .lines()
        .map(|line| line.map_err(PuzzleError::from))
        .collect()
}
