use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use std::fs::File;
use std::time::{Duration, SystemTime};

/// JPEG whose only content is an APP1 segment carrying `DateTimeOriginal`.
pub fn jpeg_with_capture_time(date: &str) -> Vec<u8> {
    let mut value = date.as_bytes().to_vec();
    value.push(0);

    // Little-endian TIFF: IFD0 at 8 points to the Exif IFD at 26, string at 44
    let mut tiff = b"II\x2a\x00".to_vec();
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x8769u16.to_le_bytes());
    tiff.extend_from_slice(&4u16.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&26u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x9003u16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&(value.len() as u32).to_le_bytes());
    tiff.extend_from_slice(&44u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    tiff.extend_from_slice(&value);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&((tiff.len() + 8) as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// Noon UTC keeps the month stable for any local offset.
pub fn noon_utc(year: i32, month: u8, day: u8) -> SystemTime {
    let month = time::Month::try_from(month).unwrap();
    let date = time::Date::from_calendar_date(year, month, day).unwrap();
    let ts = date.with_hms(12, 0, 0).unwrap().assume_utc().unix_timestamp();
    SystemTime::UNIX_EPOCH + Duration::from_secs(ts as u64)
}

pub fn write_with_mtime(child: &ChildPath, body: &[u8], mtime: SystemTime) {
    child.write_binary(body).unwrap();
    File::options()
        .write(true)
        .open(child.path())
        .unwrap()
        .set_modified(mtime)
        .unwrap();
}
