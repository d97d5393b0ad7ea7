//! Candidate texture discovery

use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use mu_scene::CandidateSet;
use mu_tex::TEXTURE_EXTENSIONS;

/// Scan depth used when none is given on the command line.
pub const DEFAULT_SCAN_DEPTH: usize = 8;

/// Walk a directory tree and group texture files by base name.
///
/// Only the allow-listed extensions are collected. Entries are visited in
/// file-name order so repeated scans produce the same candidate order.
pub fn discover_textures(root: &Path, max_depth: usize) -> Result<CandidateSet> {
    let mut candidates = CandidateSet::new();

    for entry in WalkDir::new(root).max_depth(max_depth).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let ext = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        if TEXTURE_EXTENSIONS.contains(&ext.as_str()) {
            candidates.insert(entry.into_path());
        }
    }

    Ok(candidates)
}
