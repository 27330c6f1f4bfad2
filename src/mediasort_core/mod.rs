pub mod cli;
pub mod config;
pub mod date;
pub mod error;
pub mod exif;
pub mod media;
pub mod organize;
pub mod transfer;

#[cfg(test)]
mod test_support;

pub use cli::Cli;
pub use config::{CollisionPolicy, SortConfig};
pub use date::{CaptureDate, DateLookup, DateSource};
pub use error::{MediasortError, Result};
pub use self::exif::{CaptureTimeReader, ExifReader};
pub use media::{MediaFile, MediaKind};
pub use organize::{MoveOutcome, Organizer, PlannedMove, SortStats};
