use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use exif::{In, Reader, Tag};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const DATE_TAG_PRIORITY: &[Tag] = &[Tag::DateTimeOriginal, Tag::DateTimeDigitized, Tag::DateTime];

#[derive(Debug, Clone, PartialEq)]
pub enum CaptureDate {
    Resolved(DateTime<Local>),
    Unresolved { reason: String },
}

impl CaptureDate {
    pub fn is_resolved(&self) -> bool {
        matches!(self, CaptureDate::Resolved(_))
    }

    pub fn or_sentinel(&self) -> DateTime<Local> {
        match self {
            CaptureDate::Resolved(taken) => *taken,
            CaptureDate::Unresolved { .. } => sentinel_date(),
        }
    }
}

pub fn sentinel_date() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2020, 6, 1, 0, 0, 0)
        .earliest()
        .unwrap_or_else(Local::now)
}

pub fn read_capture_date(path: &Path) -> CaptureDate {
    debug!("read_capture_date: {}", path.display());

    match read_embedded_datetime(path) {
        Ok(taken) => CaptureDate::Resolved(taken),
        Err(reason) => CaptureDate::Unresolved { reason },
    }
}

fn read_embedded_datetime(path: &Path) -> Result<DateTime<Local>, String> {
    let file = File::open(path)
        .map_err(|err| format!("開けませんでした: {} ({err})", path.display()))?;
    let mut buf = BufReader::new(file);
    let exif = Reader::new()
        .read_from_container(&mut buf)
        .map_err(|err| format!("EXIFを解析できませんでした: {} ({err})", path.display()))?;

    let field = DATE_TAG_PRIORITY
        .iter()
        .find_map(|tag| exif.get_field(*tag, In::PRIMARY))
        .ok_or_else(|| format!("撮影日時タグがありません: {}", path.display()))?;

    let raw = field.display_value().to_string();
    parse_exif_datetime(&raw)
        .ok_or_else(|| format!("撮影日時を解釈できませんでした: {} ({raw})", path.display()))
}

fn parse_exif_datetime(input: &str) -> Option<DateTime<Local>> {
    let normalized = input.trim();

    let candidates = [
        "%Y:%m:%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%:z",
        "%Y-%m-%dT%H:%M:%S%.f%:z",
    ];

    for fmt in candidates {
        if let Ok(dt) = DateTime::parse_from_str(normalized, fmt) {
            return Some(dt.with_timezone(&Local));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(normalized, fmt) {
            if let Some(local) = Local.from_local_datetime(&naive).single() {
                return Some(local);
            }
        }
    }

    None
}
