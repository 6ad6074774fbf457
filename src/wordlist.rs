use crate::error::{HashcrackError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load a candidate list written by `save_candidates` (or any newline separated file)
/// Lines are taken verbatim, so an empty file yields one empty candidate
pub fn load_candidates(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| HashcrackError::Preload {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.split('\n').map(str::to_string).collect())
}

/// Write candidates separated by newlines, without a trailing newline
/// Returns the number of candidates written
pub fn save_candidates(path: &Path, candidates: &[String]) -> Result<usize> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for (i, candidate) in candidates.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(candidate.as_bytes())?;
    }
    writer.flush()?;
    Ok(candidates.len())
}
