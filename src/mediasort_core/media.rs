use crate::mediasort_core::config::SortConfig;
use std::path::{Path, PathBuf};

/// Kind of media a file is sorted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
        }
    }

    pub fn folder_name(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photos",
            MediaKind::Video => "videos",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A file whose extension is on one of the allow-lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    /// Lowercased extension without the dot.
    pub extension: String,
    pub kind: MediaKind,
}

impl MediaFile {
    /// Classify `path` by extension, `None` when it is not a recognized media file.
    pub fn classify(path: &Path, config: &SortConfig) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();

        let kind = if config.photo_extensions.contains(&extension) {
            MediaKind::Photo
        } else if config.video_extensions.contains(&extension) {
            MediaKind::Video
        } else {
            return None;
        };

        Some(MediaFile {
            path: path.to_path_buf(),
            extension,
            kind,
        })
    }
}
