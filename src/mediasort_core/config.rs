use clap::ValueEnum;
use std::path::PathBuf;

/// Photo extensions recognized by default (lowercase, no dot).
pub const DEFAULT_PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "raw", "pef"];

/// Video extensions recognized by default (lowercase, no dot).
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mp4"];

/// What to do when the destination bucket already holds a file with the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CollisionPolicy {
    /// Leave the source file where it is
    #[default]
    Skip,
    /// Move under the first free `<stem>_<n>.<ext>` name
    Rename,
    /// Replace the existing destination file
    Overwrite,
}

/// Everything a sorting run needs to know.
#[derive(Debug, Clone)]
pub struct SortConfig {
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
    pub photo_extensions: Vec<String>,
    pub video_extensions: Vec<String>,
    pub collision: CollisionPolicy,
    pub dry_run: bool,
}

impl SortConfig {
    /// Config with the default allow-lists, `skip` on collision and real moves.
    pub fn new(source_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            photo_extensions: to_owned_list(DEFAULT_PHOTO_EXTENSIONS),
            video_extensions: to_owned_list(DEFAULT_VIDEO_EXTENSIONS),
            collision: CollisionPolicy::default(),
            dry_run: false,
        }
    }

    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_photo_extensions<S: AsRef<str>>(mut self, exts: &[S]) -> Self {
        self.photo_extensions = normalize_extensions(exts);
        self
    }

    pub fn with_video_extensions<S: AsRef<str>>(mut self, exts: &[S]) -> Self {
        self.video_extensions = normalize_extensions(exts);
        self
    }
}

fn to_owned_list(exts: &[&str]) -> Vec<String> {
    exts.iter().map(|e| e.to_string()).collect()
}

/// Lowercase, strip leading dots and drop empty entries.
pub fn normalize_extensions<S: AsRef<str>>(exts: &[S]) -> Vec<String> {
    exts.iter()
        .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Split a comma-separated extension list like `"jpg, .HEIC,png"`.
pub fn parse_extension_list(list: &str) -> Vec<String> {
    normalize_extensions(list.split(',').collect::<Vec<_>>().as_slice())
}
