use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptReadError {
    #[error("failed to read transcript {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("transcript {path} contains no utterances")]
    Empty { path: PathBuf },
}

/// Load expected utterances from a plain-text transcript file.
///
/// One utterance per line. Lines are trimmed; blank lines and lines
/// starting with `#` are skipped.
pub fn load_utterances(path: &Path) -> Result<Vec<String>, TranscriptReadError> {
    let contents = fs::read_to_string(path).map_err(|source| TranscriptReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let utterances: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if utterances.is_empty() {
        return Err(TranscriptReadError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::debug!(
        "Loaded {} utterances from {}",
        utterances.len(),
        path.display()
    );
    Ok(utterances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn transcript_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_loads_one_utterance_per_line() {
        let file = transcript_file("hello world\ngoodnight moon\n");
        let utterances = load_utterances(file.path()).unwrap();
        assert_eq!(utterances, vec!["hello world", "goodnight moon"]);
    }

    #[test]
    fn test_skips_blank_lines_and_comments() {
        let file = transcript_file("# recorded 2024-03-01\n\nhello world\n\n  \n");
        let utterances = load_utterances(file.path()).unwrap();
        assert_eq!(utterances, vec!["hello world"]);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let file = transcript_file("  hello world  \n");
        let utterances = load_utterances(file.path()).unwrap();
        assert_eq!(utterances, vec!["hello world"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_utterances(Path::new("/nonexistent/transcript.txt")).unwrap_err();
        assert!(matches!(err, TranscriptReadError::Io { .. }));
    }

    #[test]
    fn test_file_without_utterances_is_empty_error() {
        let file = transcript_file("# only a comment\n\n");
        let err = load_utterances(file.path()).unwrap_err();
        assert!(matches!(err, TranscriptReadError::Empty { .. }));
    }
}
