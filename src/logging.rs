use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not create log file {}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    SetLogger(#[from] SetLoggerError),
}

/// Sends `log` records at or above `level` to the terminal, and everything at debug level
/// or above to `log_file` if one is given.
///
/// Rebalances are reported at debug level and structural steps at trace level.
pub fn initialize_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggingError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
    ];
    if let Some(path) = log_file {
        let file = File::create(path).map_err(|source| LoggingError::LogFile { path: path.to_owned(), source })?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

/// Captures everything in the test harness output. Safe to call from every test.
#[cfg(test)]
pub(crate) fn initialize_test_logging() {
    // only the first call in a test binary can install a logger
    let _ = simplelog::TestLogger::init(LevelFilter::Trace, Config::default());
}
