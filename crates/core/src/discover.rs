use crate::error::SortError;
use crate::naming::NameRules;
use crate::planner::SortStats;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn discover_candidates(
    root: &Path,
    rules: &NameRules,
    stats: &mut SortStats,
) -> Result<Vec<PathBuf>, SortError> {
    debug!("discover_candidates: {}", root.display());

    if !root.exists() {
        return Err(SortError::RootNotFound(root.to_path_buf()));
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        stats.scanned_files += 1;

        let path = entry.path();
        if !rules.is_supported(path) {
            stats.skipped_unsupported += 1;
            continue;
        }
        if !rules.has_default_name(path) {
            stats.skipped_named += 1;
            continue;
        }
        stats.candidates += 1;
        out.push(path.to_path_buf());
    }

    out.sort();
    Ok(out)
}
