//! Text acquisition: clipboard, file, or stdin.
//!
//! Failures here never reach the reader core. The clipboard path degrades
//! to a placeholder sentence; file and stdin problems surface as
//! [`SourceError`] before the UI starts.

use std::{
    env, fs,
    io::{self, Read},
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use thiserror::Error;
use tracing::{debug, warn};

/// Shown (and read) instead of an empty clipboard.
pub const CLIPBOARD_PLACEHOLDER: &str = "No text found in clipboard";

const PASTE_STEM_CHARS: usize = 40;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("{0} is a directory, expected a text file")]
    IsDirectory(PathBuf),
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("reading stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

pub fn acquire(file: Option<&Path>, paste: bool) -> Result<String, SourceError> {
    if paste {
        return paste_text();
    }
    match file {
        Some(path) => read_file(path),
        None => read_stdin(),
    }
}

/// Per-user cache directory, shared by paste archives and the log file.
pub fn app_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("focal")
}

fn paste_text() -> Result<String, SourceError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|error| SourceError::Clipboard(error.to_string()))?;
    let text = clipboard.get_text().unwrap_or_default();
    let text = text.trim();

    if text.is_empty() {
        warn!("clipboard is empty, falling back to placeholder text");
        return Ok(CLIPBOARD_PLACEHOLDER.to_owned());
    }

    if let Err(error) = archive_paste(text) {
        warn!(%error, "could not archive pasted text");
    }
    Ok(text.to_owned())
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    let metadata = fs::metadata(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound(path.to_owned())
        } else {
            SourceError::Io {
                path: path.to_owned(),
                source: error,
            }
        }
    })?;
    if metadata.is_dir() {
        return Err(SourceError::IsDirectory(path.to_owned()));
    }

    fs::read_to_string(path).map_err(|error| SourceError::Io {
        path: path.to_owned(),
        source: error,
    })
}

fn read_stdin() -> Result<String, SourceError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(SourceError::Stdin)?;
    Ok(text)
}

/// Keep a copy of what was pasted so the session can be re-read later.
fn archive_paste(text: &str) -> io::Result<PathBuf> {
    let dir = app_cache_dir().join("pastes");
    fs::create_dir_all(&dir)?;
    let path = dir.join(paste_file_name(text));
    fs::write(&path, text)?;
    debug!(path = %path.display(), "archived pasted text");
    Ok(path)
}

/// File stem from the leading characters of the paste, non-alphanumerics
/// folded to `-`, with a timestamp suffix to keep names unique.
fn paste_file_name(text: &str) -> String {
    let stem: String = text
        .chars()
        .take(PASTE_STEM_CHARS)
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '-' })
        .collect();
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    format!("{stem}-{stamp}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_file_name_folds_symbols_and_truncates() {
        let name = paste_file_name("Hello, world! This is a much longer paste than forty chars.");
        assert!(name.starts_with("Hello--world--This-is-a-much-longer-past"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let error = read_file(Path::new("/no/such/focal-file.txt")).unwrap_err();
        assert!(matches!(error, SourceError::NotFound(_)));
    }

    #[test]
    fn directory_paths_are_rejected() {
        let error = read_file(&env::temp_dir()).unwrap_err();
        assert!(matches!(error, SourceError::IsDirectory(_)));
    }
}
