use crate::mediasort_core::config::SortConfig;
use crate::mediasort_core::date::{
    CaptureDate, DateLookup, DateSource, get_local_offset, modified_date,
};
use crate::mediasort_core::error::{MediasortError, Result};
use crate::mediasort_core::exif::{CaptureTimeReader, ExifReader};
use crate::mediasort_core::media::{MediaFile, MediaKind};
use crate::mediasort_core::transfer::{Destination, move_file, resolve_destination};
use std::fs;
use std::path::{Path, PathBuf};
use time::UtcOffset;
use walkdir::WalkDir;

/// A recognized file together with its bucketing date and destination.
#[derive(Debug, Clone)]
pub struct PlannedMove {
    pub file: MediaFile,
    pub date: CaptureDate,
    pub date_source: DateSource,
    pub destination: PathBuf,
}

/// What happened to a single planned move.
#[derive(Debug)]
pub enum MoveOutcome {
    Moved { destination: PathBuf },
    /// The file already sits at its computed destination.
    InPlace,
    DryRun { destination: PathBuf },
    Collision { destination: PathBuf },
    Failed { error: MediasortError },
}

/// Counters for a sorting run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortStats {
    pub photos_moved: usize,
    pub videos_moved: usize,
    pub planned: usize,
    pub already_in_place: usize,
    pub collisions_skipped: usize,
    pub failed: usize,
    pub ignored: usize,
}

impl std::fmt::Display for SortStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} photos, {} videos moved, {} planned, {} already in place ({} collisions skipped, {} failed, {} ignored)",
            self.photos_moved,
            self.videos_moved,
            self.planned,
            self.already_in_place,
            self.collisions_skipped,
            self.failed,
            self.ignored
        )
    }
}

/// Moves media from an unsorted source tree into `<dest>/<kind>/<YYYY>/<MM>/`.
pub struct Organizer<R = ExifReader> {
    config: SortConfig,
    reader: R,
    offset: UtcOffset,
}

impl Organizer<ExifReader> {
    /// Organizer reading capture times with kamadak-exif.
    pub fn new(config: SortConfig) -> Result<Self> {
        Self::with_reader(config, ExifReader)
    }
}

impl<R: CaptureTimeReader> Organizer<R> {
    /// Fails if the source root is missing or not a directory.
    pub fn with_reader(mut config: SortConfig, reader: R) -> Result<Self> {
        if !config.source_root.exists() {
            return Err(MediasortError::PathNotFound(config.source_root));
        }
        if !config.source_root.is_dir() {
            return Err(MediasortError::NotADirectory(config.source_root));
        }

        config.source_root = config.source_root.canonicalize()?;
        config.dest_root = match config.dest_root.canonicalize() {
            Ok(dest) => dest,
            Err(_) => std::path::absolute(&config.dest_root)?,
        };

        Ok(Organizer {
            config,
            reader,
            offset: get_local_offset(),
        })
    }

    /// Interpret modification times in `offset` instead of the local zone.
    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Every regular file under the source root, in file-name order.
    ///
    /// A destination strictly inside the source tree is not descended into.
    pub fn discover(&self) -> Vec<PathBuf> {
        let source_root = self.config.source_root.as_path();
        let dest_root = self.config.dest_root.as_path();
        let dest_nested = dest_root != source_root && dest_root.starts_with(source_root);

        WalkDir::new(source_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !(dest_nested && e.depth() > 0 && e.path().starts_with(dest_root)))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", MediasortError::from(e));
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .collect()
    }

    /// Classify, date and place a file. `Ok(None)` for unrecognized extensions.
    pub fn plan(&self, path: &Path) -> Result<Option<PlannedMove>> {
        let Some(file) = MediaFile::classify(path, &self.config) else {
            return Ok(None);
        };

        let lookup = match file.kind {
            MediaKind::Photo => self.reader.capture_time(&file.path),
            MediaKind::Video => DateLookup::Unavailable,
        };
        let (date, date_source) = match lookup {
            DateLookup::Found(date) => (date, DateSource::Metadata),
            DateLookup::Unavailable => (
                modified_date(&file.path, self.offset)?,
                DateSource::ModifiedTime,
            ),
        };

        let file_name = file
            .path
            .file_name()
            .ok_or_else(|| MediasortError::MissingFileName(file.path.clone()))?;
        let (year, month) = date.bucket();
        let destination = self
            .config
            .dest_root
            .join(file.kind.folder_name())
            .join(year)
            .join(month)
            .join(file_name);

        log::debug!(
            "{} {} dated {} from {:?}",
            file.kind,
            file.path.display(),
            date.date_time(),
            date_source
        );

        Ok(Some(PlannedMove {
            file,
            date,
            date_source,
            destination,
        }))
    }

    /// Create the bucket, apply the collision policy, announce and move.
    pub fn relocate(&self, plan: &PlannedMove) -> MoveOutcome {
        let source = &plan.file.path;

        if is_same_file(source, &plan.destination) {
            log::debug!("{} is already sorted", source.display());
            return MoveOutcome::InPlace;
        }

        if self.config.dry_run {
            return match resolve_destination(&plan.destination, self.config.collision) {
                Ok(Destination::Free(destination)) => {
                    println!(
                        "[DRY RUN] Would move: {} → {}",
                        source.display(),
                        destination.display()
                    );
                    MoveOutcome::DryRun { destination }
                }
                Ok(Destination::Occupied(destination)) => {
                    println!("[SKIP] {}: {} already exists", source.display(), destination.display());
                    MoveOutcome::Collision { destination }
                }
                Err(error) => self.report_failure(source, error),
            };
        }

        if let Some(parent) = plan.destination.parent() {
            if let Err(source_err) = fs::create_dir_all(parent) {
                let error = MediasortError::CreateDir {
                    path: parent.to_path_buf(),
                    source: source_err,
                };
                return self.report_failure(source, error);
            }
        }

        let destination = match resolve_destination(&plan.destination, self.config.collision) {
            Ok(Destination::Free(destination)) => destination,
            Ok(Destination::Occupied(destination)) => {
                println!("[SKIP] {}: {} already exists", source.display(), destination.display());
                return MoveOutcome::Collision { destination };
            }
            Err(error) => return self.report_failure(source, error),
        };

        println!("Moving: {} → {}", source.display(), destination.display());

        match move_file(source, &destination) {
            Ok(()) => MoveOutcome::Moved { destination },
            Err(e) => self.report_failure(source, e.into()),
        }
    }

    fn report_failure(&self, source: &Path, error: MediasortError) -> MoveOutcome {
        println!("[ERROR] moving {}: {}", source.display(), error);
        log::debug!("Move of {} failed: {:?}", source.display(), error);
        MoveOutcome::Failed { error }
    }

    /// Sort every file under the source root, one at a time.
    pub fn run(&self) -> Result<SortStats> {
        if !self.config.source_root.is_dir() {
            return Err(MediasortError::NotADirectory(self.config.source_root.clone()));
        }

        log::info!("Scanning source directory {}", self.config.source_root.display());
        let files = self.discover();
        log::info!("Found {} files", files.len());

        let mut stats = SortStats::default();

        for path in files {
            let plan = match self.plan(&path) {
                Ok(Some(plan)) => plan,
                Ok(None) => {
                    log::debug!("Ignoring {}", path.display());
                    stats.ignored += 1;
                    continue;
                }
                Err(error) => {
                    self.report_failure(&path, error);
                    stats.failed += 1;
                    continue;
                }
            };

            match self.relocate(&plan) {
                MoveOutcome::Moved { .. } => match plan.file.kind {
                    MediaKind::Photo => stats.photos_moved += 1,
                    MediaKind::Video => stats.videos_moved += 1,
                },
                MoveOutcome::DryRun { .. } => stats.planned += 1,
                MoveOutcome::InPlace => stats.already_in_place += 1,
                MoveOutcome::Collision { .. } => stats.collisions_skipped += 1,
                MoveOutcome::Failed { .. } => stats.failed += 1,
            }
        }

        log::info!("Sort complete: {}", stats);
        Ok(stats)
    }
}

/// Whether both paths name the same existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
