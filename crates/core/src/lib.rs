mod capture;
mod config;
mod discover;
mod error;
mod mover;
mod naming;
mod planner;
#[cfg(test)]
mod testfix;

pub use capture::{read_capture_date, sentinel_date, CaptureDate};
pub use config::{app_paths, load_config, save_config, AppConfig, AppPaths};
pub use discover::discover_candidates;
pub use error::SortError;
pub use mover::{apply_plan, MoveOutcome};
pub use naming::{normalize_base_name, NameRules, DEFAULT_EXTENSIONS, DEFAULT_PREFIXES};
pub use planner::{
    generate_plan, sort_photos, RenameEntry, RenamePlan, SortOptions, SortStats, SortSummary,
};
