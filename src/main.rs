use anyhow::Result;
use clap::Parser;
use mediasort::mediasort_core::{Cli, Organizer};
use simplelog::{CombinedLogger, Config, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        simplelog::LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create("mediasort.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let organizer = Organizer::new(cli.to_config())?;
    let stats = organizer.run()?;

    if stats.failed > 0 {
        log::warn!("{} files could not be moved", stats.failed);
    }

    Ok(())
}
