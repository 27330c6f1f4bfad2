use crate::mediasort_core::date::{CaptureDate, DateLookup};
use crate::mediasort_core::error::{MediasortError, Result};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use time::PrimitiveDateTime;

/// Date format used in EXIF data.
const EXIF_DATE_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]:[month]:[day] [hour]:[minute]:[second]");

/// Something that can tell when a photo was taken.
pub trait CaptureTimeReader {
    fn capture_time(&self, path: &Path) -> DateLookup;
}

/// Reads `DateTimeOriginal` from JPEG, PNG, TIFF-based RAW, HEIF and WebP containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifReader;

impl CaptureTimeReader for ExifReader {
    fn capture_time(&self, path: &Path) -> DateLookup {
        match read_date_time_original(path) {
            Ok(date) => DateLookup::Found(date),
            Err(e) => {
                log::debug!("No capture time for {}: {}", path.display(), e);
                DateLookup::Unavailable
            }
        }
    }
}

fn read_date_time_original(path: &Path) -> Result<CaptureDate> {
    let file = File::open(path)?;
    let exif = Reader::new()
        .read_from_container(&mut BufReader::new(file))
        .map_err(|e| MediasortError::MetadataExtraction {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .ok_or_else(|| MediasortError::MetadataExtraction {
            path: path.to_path_buf(),
            reason: "DateTimeOriginal not present".to_string(),
        })?;

    match &field.value {
        Value::Ascii(parts) => {
            let raw = parts.first().map(Vec::as_slice).unwrap_or_default();
            let text = std::str::from_utf8(raw)
                .map_err(|e| MediasortError::InvalidDateFormat(e.to_string()))?;
            parse_exif_date(text)
        }
        other => Err(MediasortError::InvalidDateFormat(format!(
            "unexpected DateTimeOriginal value {:?}",
            other
        ))),
    }
}

/// Parse an EXIF date string, which must be exactly `YYYY:MM:DD HH:MM:SS`.
pub fn parse_exif_date(date_str: &str) -> Result<CaptureDate> {
    if date_str.is_empty() {
        return Err(MediasortError::InvalidDateFormat("empty date".to_string()));
    }

    PrimitiveDateTime::parse(date_str, EXIF_DATE_FORMAT)
        .map(CaptureDate::new)
        .map_err(|e| MediasortError::InvalidDateFormat(e.to_string()))
}
