use crate::error::SortError;
use crate::planner::{RenameEntry, RenamePlan};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct MoveOutcome {
    pub moved: usize,
    pub empty_dirs: Vec<PathBuf>,
}

pub fn apply_plan(plan: &RenamePlan) -> Result<MoveOutcome, SortError> {
    debug!("apply_plan: {}件", plan.entries.len());

    let nr_width = plan.entries.len().to_string().len();
    let mut outcome = MoveOutcome::default();

    for entry in &plan.entries {
        move_entry(entry, outcome.moved + 1, nr_width, &mut outcome)?;
    }

    Ok(outcome)
}

fn move_entry(
    entry: &RenameEntry,
    nr: usize,
    nr_width: usize,
    outcome: &mut MoveOutcome,
) -> Result<(), SortError> {
    if let Some(parent) = entry.target.parent() {
        fs::create_dir_all(parent).map_err(|source| SortError::Filesystem {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    if entry.target.exists() {
        return Err(SortError::TargetExists(entry.target.clone()));
    }

    info!(
        "[{:>width$}] 移動 {} -> {}",
        nr,
        entry.source.display(),
        entry.target.display(),
        width = nr_width
    );

    fs::rename(&entry.source, &entry.target).map_err(|source| SortError::Filesystem {
        path: entry.source.clone(),
        source,
    })?;
    outcome.moved += 1;

    if let Some(parent) = entry.source.parent() {
        if dir_is_empty(parent) {
            outcome.empty_dirs.push(parent.to_path_buf());
        }
    }

    Ok(())
}

fn dir_is_empty(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
