use crate::mediasort_core::error::{MediasortError, Result};
use std::fs;
use std::path::Path;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Date a media file is bucketed by. Only year and month reach the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CaptureDate(PrimitiveDateTime);

impl CaptureDate {
    pub fn new(date_time: PrimitiveDateTime) -> Self {
        CaptureDate(date_time)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    pub fn date_time(&self) -> PrimitiveDateTime {
        self.0
    }

    /// Bucket folder names, e.g. `("2023", "07")`.
    pub fn bucket(&self) -> (String, String) {
        (format!("{:04}", self.year()), format!("{:02}", self.month()))
    }
}

impl From<OffsetDateTime> for CaptureDate {
    fn from(dt: OffsetDateTime) -> Self {
        CaptureDate(PrimitiveDateTime::new(dt.date(), dt.time()))
    }
}

/// Outcome of looking for an embedded capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLookup {
    Found(CaptureDate),
    Unavailable,
}

/// Where the bucketing date of a file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Metadata,
    ModifiedTime,
}

/// Local timezone offset, UTC when it cannot be determined.
pub fn get_local_offset() -> UtcOffset {
    OffsetDateTime::now_local()
        .map(|dt| dt.offset())
        .unwrap_or_else(|_| {
            log::debug!("Failed to get local offset, using UTC instead.");
            UtcOffset::UTC
        })
}

/// Last-modified time of `path`, expressed in `offset`.
pub fn modified_date(path: &Path, offset: UtcOffset) -> Result<CaptureDate> {
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| MediasortError::ModifiedTime {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(OffsetDateTime::from(modified).to_offset(offset).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mediasort_core::test_support::write_with_mtime;
    use assert_fs::prelude::*;
    use std::time::{Duration, SystemTime};
    use time::macros::{datetime, offset};

    #[test]
    fn test_bucket_is_zero_padded() {
        let day = time::Date::from_calendar_date(987, time::Month::March, 1).unwrap();
        let date = CaptureDate::new(day.midnight());
        assert_eq!(date.bucket(), ("0987".to_string(), "03".to_string()));

        let date = CaptureDate::new(datetime!(2023-11-30 23:59:59));
        assert_eq!(date.bucket(), ("2023".to_string(), "11".to_string()));
    }

    #[test]
    fn test_from_offset_date_time_keeps_wall_clock() {
        let date: CaptureDate = datetime!(2024-01-31 23:30:00 +02:00).into();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
    }

    #[test]
    fn test_modified_date_in_offset() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("clip.mp4");
        // 2024-01-31 23:00:00 UTC
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_706_742_000);
        write_with_mtime(&file, b"video", mtime);

        let utc = modified_date(file.path(), UtcOffset::UTC).unwrap();
        assert_eq!((utc.year(), utc.month()), (2024, 1));

        let ahead = modified_date(file.path(), offset!(+02:00)).unwrap();
        assert_eq!((ahead.year(), ahead.month()), (2024, 2));
    }

    #[test]
    fn test_modified_date_missing_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let result = modified_date(&temp.path().join("gone.mp4"), UtcOffset::UTC);
        assert!(matches!(result, Err(MediasortError::ModifiedTime { .. })));
    }
}
