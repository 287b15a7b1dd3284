//! Logger setup shared by both binaries.

use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use simplelog::{
    ColorChoice, CombinedLogger, Config as LogConfig, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};

/// `<tool>_<YYYYmmdd_HHMMSS>.log`
pub fn log_file_name(tool: &str, at: DateTime<Local>) -> String {
    format!("{tool}_{}.log", at.format("%Y%m%d_%H%M%S"))
}

/// Log to stderr, and also to a timestamped file when `log_dir` is given.
///
/// Returns the log file path, if one was opened.
pub fn init_logging(tool: &str, log_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let log_path = match log_dir {
        Some(dir) => {
            create_dir_all(dir).with_context(|| format!("creating log dir {}", dir.display()))?;
            let path = dir.join(log_file_name(tool, Local::now()));
            let file = File::create(&path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            loggers.push(WriteLogger::new(LevelFilter::Info, LogConfig::default(), file));
            Some(path)
        }
        None => None,
    };

    CombinedLogger::init(loggers).context("logger already initialised")?;
    Ok(log_path)
}
