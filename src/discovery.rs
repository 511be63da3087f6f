//! Discovery Module for the JSX tagger
//!
//! Recursively scans a directory for files the tagger would accept, and tags
//! a whole tree in one call.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::TaggerOptions;
use crate::eligibility::matches_path;
use crate::report::BuildStats;
use crate::transform::{Tagger, TransformOutput};

/// All files under `dir` matching the include/exclude rules, sorted by path.
///
/// Excluded directories are not descended into.
pub fn discover_sources(dir: &Path, options: &TaggerOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            !entry.file_type().is_dir() || !is_excluded_dir(entry.path(), options)
        });

    for entry in walker.flatten() {
        let path = entry.path();
        if path.is_file() && matches_path(&path.to_string_lossy(), options) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}

fn is_excluded_dir(path: &Path, options: &TaggerOptions) -> bool {
    let path = path.to_string_lossy();
    options
        .exclude
        .iter()
        .any(|pattern| path.contains(pattern.as_str()))
}

/// Discover and tag every eligible file under `dir`, in parallel.
///
/// Nothing is written back; outputs pair each path with its transform result.
pub fn tag_directory(
    tagger: &Tagger,
    dir: &Path,
    stats: &BuildStats,
) -> Vec<(PathBuf, TransformOutput)> {
    use rayon::prelude::*;

    discover_sources(dir, tagger.options())
        .into_par_iter()
        .map(|path| {
            let output = tagger.transform_file(&path);
            stats.record(&output.report);
            (path, output)
        })
        .collect()
}
