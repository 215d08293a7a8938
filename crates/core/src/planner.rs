use crate::capture::{read_capture_date, CaptureDate};
use crate::discover::discover_candidates;
use crate::error::SortError;
use crate::mover::apply_plan;
use crate::naming::{normalize_base_name, NameRules, DEFAULT_EXTENSIONS, DEFAULT_PREFIXES};
use chrono::{DateTime, Datelike, Local, Timelike};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SIDECAR_SUFFIXES: &[&str] = &[".xmp", ".XMP"];

#[derive(Debug, Clone)]
pub struct SortOptions {
    pub source: PathBuf,
    pub extensions: Vec<String>,
    pub prefixes: Vec<String>,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|v| v.to_string()).collect(),
            prefixes: DEFAULT_PREFIXES.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameEntry {
    pub source: PathBuf,
    pub target: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortStats {
    pub scanned_files: usize,
    pub candidates: usize,
    pub skipped_unsupported: usize,
    pub skipped_named: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    pub root: PathBuf,
    pub entries: Vec<RenameEntry>,
    pub stats: SortStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortSummary {
    pub moved: usize,
    pub empty_dirs: Vec<PathBuf>,
    pub stats: SortStats,
}

pub fn generate_plan(options: &SortOptions) -> Result<RenamePlan, SortError> {
    debug!("generate_plan: {}", options.source.display());

    let rules = NameRules::new(&options.prefixes, &options.extensions);
    let mut stats = SortStats::default();
    let candidates = discover_candidates(&options.source, &rules, &mut stats)?;

    let mut entries = Vec::with_capacity(candidates.len());
    for photo in candidates {
        entries.extend(propose_renames(&options.source, &photo, &rules)?);
    }

    Ok(RenamePlan {
        root: options.source.clone(),
        entries,
        stats,
    })
}

pub fn sort_photos(options: &SortOptions) -> Result<SortSummary, SortError> {
    let plan = generate_plan(options)?;
    let outcome = apply_plan(&plan)?;
    Ok(SortSummary {
        moved: outcome.moved,
        empty_dirs: outcome.empty_dirs,
        stats: plan.stats,
    })
}

fn propose_renames(
    root: &Path,
    photo: &Path,
    rules: &NameRules,
) -> Result<Vec<RenameEntry>, SortError> {
    debug!("propose_renames: {}", photo.display());

    let taken = match read_capture_date(photo) {
        CaptureDate::Resolved(taken) => taken,
        CaptureDate::Unresolved { reason } => {
            return Err(SortError::Metadata {
                path: photo.to_path_buf(),
                reason,
            })
        }
    };

    let file_name = photo
        .file_name()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_else(|| "untitled".to_string());
    let target = root.join(relative_destination(&taken, &file_name, rules));

    let mut entries = vec![RenameEntry {
        source: photo.to_path_buf(),
        target: target.clone(),
    }];

    for suffix in SIDECAR_SUFFIXES {
        let sidecar = append_suffix(photo, suffix);
        if sidecar.exists() {
            entries.push(RenameEntry {
                source: sidecar,
                target: append_suffix(&target, ".xmp"),
            });
            // A case-insensitive filesystem reports the second spelling as
            // existing too; registering the same file under two source keys
            // would corrupt the plan.
            break;
        }
    }

    Ok(entries)
}

fn relative_destination(taken: &DateTime<Local>, file_name: &str, rules: &NameRules) -> PathBuf {
    let base = normalize_base_name(file_name, rules);
    let year_dir = format!("{:04}", taken.year());
    let day_dir = format!("{:04}-{:02}-{:02}", taken.year(), taken.month(), taken.day());
    let stamped = format!(
        "{:04}{:02}{:02}-{:02}{:02}{:02}_{}",
        taken.year(),
        taken.month(),
        taken.day(),
        taken.hour(),
        taken.minute(),
        taken.second(),
        base
    );
    PathBuf::from(year_dir).join(day_dir).join(stamped)
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
