use crate::mediasort_core::config::CollisionPolicy;
use crate::mediasort_core::error::{MediasortError, Result};
use filetime::FileTime;
use std::ffi::OsString;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Where a file may go once the collision policy has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Move here.
    Free(PathBuf),
    /// Occupied and the policy says to leave the source alone.
    Occupied(PathBuf),
}

/// Apply `policy` to a computed destination path.
pub fn resolve_destination(dest: &Path, policy: CollisionPolicy) -> Result<Destination> {
    let existing = match fs::symlink_metadata(dest) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(Destination::Free(dest.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if existing.is_dir() {
        return Err(MediasortError::DestinationIsDirectory(dest.to_path_buf()));
    }

    match policy {
        CollisionPolicy::Skip => Ok(Destination::Occupied(dest.to_path_buf())),
        CollisionPolicy::Overwrite => Ok(Destination::Free(dest.to_path_buf())),
        CollisionPolicy::Rename => next_free_name(dest).map(Destination::Free),
    }
}

/// First `<stem>_<n>.<ext>` next to `dest` that does not exist yet.
fn next_free_name(dest: &Path) -> Result<PathBuf> {
    let stem = dest
        .file_stem()
        .ok_or_else(|| MediasortError::MissingFileName(dest.to_path_buf()))?;
    let extension = dest.extension();

    for n in 1..=u32::MAX {
        let mut name = OsString::from(stem);
        name.push(format!("_{}", n));
        if let Some(ext) = extension {
            name.push(".");
            name.push(ext);
        }

        let candidate = dest.with_file_name(name);
        match fs::symlink_metadata(&candidate) {
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(candidate),
            Err(e) => return Err(e.into()),
            Ok(_) => continue,
        }
    }

    Err(MediasortError::NoFreeName(dest.to_path_buf()))
}

/// Move a file, falling back to copy-then-delete across filesystems.
pub fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            log::debug!(
                "{} and {} are on different devices, copying instead",
                source.display(),
                destination.display()
            );
            copy_then_remove(source, destination)
        }
        Err(e) => Err(e),
    }
}

/// Copy keeping the modification time, then delete the source.
///
/// The copy is removed again if the timestamp cannot be carried over.
pub fn copy_then_remove(source: &Path, destination: &Path) -> io::Result<()> {
    let modified = FileTime::from_last_modification_time(&fs::metadata(source)?);
    fs::copy(source, destination)?;

    if let Err(e) = filetime::set_file_mtime(destination, modified) {
        fs::remove_file(destination).ok();
        return Err(e);
    }

    fs::remove_file(source)
}
