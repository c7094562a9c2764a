//! File-backed `log` sink for the terminal binary.
//!
//! Stdout belongs to the renderer, so records go to a file, one line each,
//! flushed immediately so a crash still leaves a complete log behind.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
    started: Instant,
}

impl FileLogger {
    /// Create (or truncate) `path` and log records up to `level` into it.
    pub fn create(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;

        Ok(Self {
            file: Mutex::new(file),
            level,
            started: Instant::now(),
        })
    }

    fn format(&self, record: &Record) -> String {
        let elapsed = self.started.elapsed();
        format!(
            "[{:>4}.{:03}] {:<5} {}: {}",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
            let _ = file.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Level used for `--verbose` and for the default run.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install a [`FileLogger`] as the global logger.
///
/// Without a log file nothing is installed and every record is discarded.
pub fn init(path: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let level = level_for(verbose);
    let logger = FileLogger::create(path, level)?;
    log::set_boxed_logger(Box::new(logger)).context("install logger")?;
    log::set_max_level(level);
    Ok(())
}
