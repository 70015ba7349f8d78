//! Transcript file discovery.
//!
//! The CLI feeds the extractor from a directory of plain-text transcripts,
//! one file per recording session. The file stem doubles as the session
//! identifier, so `output/` citations can point back at the recording.
//!
//! Expected layout: `{root}/*.txt`, or one level of per-speaker
//! subdirectories: `{root}/{speaker}/*.txt`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A transcript file discovered under the corpus root.
#[derive(Debug)]
pub struct TranscriptFile {
    /// Derived from the file stem, e.g. "session_03"
    pub session_id: String,
    pub path: PathBuf,
}

/// Discover all transcript files under `root`, sorted by path so batch
/// extraction order is deterministic across runs.
pub fn scan_transcripts(root: &Path) -> Vec<TranscriptFile> {
    let mut results: Vec<TranscriptFile> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let path = e.path();
            if path.extension().and_then(|x| x.to_str()) != Some("txt") {
                return None;
            }
            let stem = path.file_stem().and_then(|s| s.to_str())?;
            if stem.starts_with('.') || stem.is_empty() {
                return None;
            }
            Some(TranscriptFile {
                session_id: stem.to_string(),
                path: path.to_path_buf(),
            })
        })
        .collect();

    results.sort_by(|a, b| a.path.cmp(&b.path));
    results
}
