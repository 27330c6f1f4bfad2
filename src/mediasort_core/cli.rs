use crate::mediasort_core::config::{CollisionPolicy, SortConfig, parse_extension_list};
use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sort photos and videos into <kind>/<year>/<month> folders")]
pub struct Cli {
    /// Directory containing unsorted media
    #[arg(required = true)]
    pub source_dir: PathBuf,

    /// Root of the sorted tree (photos/ and videos/ are created inside it)
    #[arg(required = true)]
    pub dest_dir: PathBuf,

    /// Show what would be moved without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// What to do when a file with the same name is already in the target folder
    #[arg(long, value_enum, default_value_t = CollisionPolicy::Skip)]
    pub on_collision: CollisionPolicy,

    /// Photo extensions, comma-separated (default: "jpg,jpeg,png,raw,pef")
    #[arg(long)]
    pub photo_ext: Option<String>,

    /// Video extensions, comma-separated (default: "mp4")
    #[arg(long)]
    pub video_ext: Option<String>,

    /// Enable file logging to mediasort.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Build the run configuration from the parsed arguments.
    pub fn to_config(&self) -> SortConfig {
        let mut config = SortConfig::new(&self.source_dir, &self.dest_dir)
            .with_collision(self.on_collision)
            .with_dry_run(self.dry_run);

        if let Some(list) = &self.photo_ext {
            config = config.with_photo_extensions(parse_extension_list(list).as_slice());
        }
        if let Some(list) = &self.video_ext {
            config = config.with_video_extensions(parse_extension_list(list).as_slice());
        }

        config
    }
}
