// crates/text_patcher/src/lib.rs

//! Inserts a literal block of text directly before the first occurrence of a
//! marker string inside a file. The file is treated as an opaque string.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

pub use error::PatchError;

/// What to patch. Every field is taken literally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchConfig {
    /// File to read and overwrite.
    pub path: PathBuf,
    /// Text that must already be present in the file.
    pub marker: String,
    /// Text inserted immediately before the first `marker`.
    pub addition: String,
}

impl PatchConfig {
    pub fn new<P: AsRef<Path>>(path: P, marker: &str, addition: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            marker: marker.to_string(),
            addition: addition.to_string(),
        }
    }
}

/// Summary of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    /// Byte offset of the first marker in the original content; the addition
    /// now starts here.
    pub offset: usize,
    /// Marker occurrences in the original content.
    pub occurrences: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

/// Counts non-overlapping occurrences of `marker` in `content`.
pub fn count_occurrences(content: &str, marker: &str) -> usize {
    content.matches(marker).count()
}

/// Returns `content` with `addition` spliced in directly before the first
/// occurrence of `marker`. Later occurrences are left alone.
///
/// # Errors
///
/// Returns [`PatchError::MarkerAbsent`] if `marker` is not a substring of
/// `content`. An empty marker matches at offset 0.
pub fn insert_before_marker(content: &str, marker: &str, addition: &str) -> Result<String, PatchError> {
    let idx = content.find(marker).ok_or(PatchError::MarkerAbsent)?;

    let mut patched = String::with_capacity(content.len() + addition.len());
    patched.push_str(&content[..idx]);
    patched.push_str(addition);
    patched.push_str(&content[idx..]);
    Ok(patched)
}

/// Reads `config.path`, checks for the marker, splices in the addition and
/// writes the file back.
///
/// The file is only written when the marker was found; on
/// [`PatchError::MarkerNotFound`] it is left untouched.
///
/// Running this twice on the same file inserts the addition twice whenever
/// the marker itself survives the first run. There is no deduplication.
pub fn run(config: &PatchConfig) -> Result<PatchOutcome, PatchError> {
    let path = &config.path;
    let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.clone(),
        source,
    })?;

    let patched = insert_before_marker(&content, &config.marker, &config.addition).map_err(|err| {
        log::debug!("marker ({} bytes) not present in {}", config.marker.len(), path.display());
        err.in_file(path)
    })?;

    // The addition starts where the first marker used to.
    let offset = content.find(&config.marker).unwrap_or_default();
    let occurrences = count_occurrences(&content, &config.marker);
    log::debug!(
        "found {} marker occurrence(s) in {}; first at byte {}",
        occurrences,
        path.display(),
        offset
    );

    fs::write(path, &patched).map_err(|source| PatchError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {} bytes to {}", patched.len(), path.display());

    Ok(PatchOutcome {
        path: path.clone(),
        offset,
        occurrences,
        bytes_before: content.len(),
        bytes_after: patched.len(),
    })
}
