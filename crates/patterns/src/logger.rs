//! Loggers sharing one line format and a process-wide instance.
//!
//! Every sink writes lines of the form
//!
//! ```text
//! 2026-01-30 14:03:07 [INFO]: message
//! ```
//!
//! using local time. `ConsoleLogger` prints to stdout, `FileLogger` appends
//! to a file, and `TeeLogger` does both. Write failures never panic; they
//! are reported as `tracing` warnings and the line is dropped.

use std::fmt;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::LineWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use chrono::Local;
use chrono::NaiveDateTime;
use parking_lot::Mutex;

use crate::singleton::Singleton;

/// File used by `FileLogger::global`, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "application.log";

/// Timestamp layout for every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Severity of a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Normal progress.
    Info,
    /// Something looks wrong but execution continues.
    Warn,
    /// An operation failed.
    Error,
}

impl LogLevel {
    /// The tag written between brackets.
    pub fn as_str(&self) -> &'static str {
        return match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.as_str());
    }
}

/// Errors raised while setting up or tearing down a file sink.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Buffered lines could not be flushed on close.
    #[error("failed to flush log file: {0}")]
    Flush(#[from] io::Error),
}

/// Format a line stamped with the given time.
pub fn format_line_at(timestamp: NaiveDateTime, level: LogLevel, message: &str) -> String {
    return format!("{} [{}]: {}", timestamp.format(TIMESTAMP_FORMAT), level, message);
}

/// Format a line stamped with the current local time.
pub fn format_line(level: LogLevel, message: &str) -> String {
    return format_line_at(Local::now().naive_local(), level, message);
}

/// A sink for leveled log lines.
pub trait Logger: Send + Sync {
    /// Write one line at the given level.
    fn log(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }
}

fn write_console(line: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{}", line) {
        tracing::warn!(error = %err, "failed to write log line to stdout");
    }
}

// =============================================================================
// Console
// =============================================================================

/// Logs to standard output.
#[derive(Debug)]
pub struct ConsoleLogger {
    _private: (),
}

static CONSOLE_LOGGER: Singleton<ConsoleLogger> = Singleton::new();

impl ConsoleLogger {
    /// The process-wide console logger.
    pub fn global() -> &'static ConsoleLogger {
        return CONSOLE_LOGGER.get_or_init(|| ConsoleLogger { _private: () });
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        write_console(&format_line(level, message));
    }
}

// =============================================================================
// File
// =============================================================================

/// Appends lines to a file, flushing after each one.
///
/// Writers are serialized, so lines from concurrent callers never interleave.
pub struct FileLogger {
    path: PathBuf,
    writer: Mutex<Option<LineWriter<File>>>,
}

static FILE_LOGGER: Singleton<FileLogger> = Singleton::new();

impl FileLogger {
    /// Open `path` for appending, creating it if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<FileLogger, LogError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "opened log file");
        return Ok(FileLogger {
            path,
            writer: Mutex::new(Some(LineWriter::new(file))),
        });
    }

    /// The process-wide file logger, writing to [`DEFAULT_LOG_PATH`].
    ///
    /// The file is opened on first use. If that fails the error is returned
    /// and a later call tries again.
    pub fn global() -> Result<&'static FileLogger, LogError> {
        return FILE_LOGGER.get_or_try_init(|| FileLogger::open(DEFAULT_LOG_PATH));
    }

    /// The file this logger appends to.
    pub fn path(&self) -> &Path {
        return &self.path;
    }

    /// Return true until `close` has been called.
    pub fn is_open(&self) -> bool {
        return self.writer.lock().is_some();
    }

    /// Flush and release the file. Later lines are dropped.
    pub fn close(&self) -> Result<(), LogError> {
        if let Some(mut writer) = self.writer.lock().take() {
            writer.flush()?;
        }
        return Ok(());
    }

    fn write_line(&self, line: &str) {
        let mut guard = self.writer.lock();
        let Some(writer) = guard.as_mut() else {
            tracing::warn!(path = %self.path.display(), "log line dropped, file logger is closed");
            return;
        };
        if let Err(err) = writeln!(writer, "{}", line) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to write log line");
        }
    }
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("FileLogger")
            .field("path", &self.path)
            .field("open", &self.is_open())
            .finish();
    }
}

impl Logger for FileLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.write_line(&format_line(level, message));
    }
}

// =============================================================================
// Tee
// =============================================================================

/// Writes every line to a file and echoes it to standard output.
#[derive(Debug)]
pub struct TeeLogger {
    file: FileLogger,
}

impl TeeLogger {
    /// Open `path` for appending and echo to stdout.
    pub fn open(path: impl AsRef<Path>) -> Result<TeeLogger, LogError> {
        return Ok(TeeLogger {
            file: FileLogger::open(path)?,
        });
    }

    /// The file half of this logger.
    pub fn file(&self) -> &FileLogger {
        return &self.file;
    }

    /// Flush and release the file. Console output continues.
    pub fn close(&self) -> Result<(), LogError> {
        return self.file.close();
    }
}

impl Logger for TeeLogger {
    fn log(&self, level: LogLevel, message: &str) {
        // Both sinks get the same timestamp.
        let line = format_line(level, message);
        self.file.write_line(&line);
        write_console(&line);
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Where log lines go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogSink {
    #[default]
    Console,
    File,
    Tee,
}

/// Settings for building a logger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    pub path: PathBuf,
    pub sink: LogSink,
}

impl Default for LoggerConfig {
    fn default() -> LoggerConfig {
        return LoggerConfig {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            sink: LogSink::Console,
        };
    }
}

impl LoggerConfig {
    /// Build the configured logger.
    ///
    /// The console sink and a file sink on [`DEFAULT_LOG_PATH`] hand out the
    /// shared global instances; any other path gets its own file.
    pub fn build(&self) -> Result<Box<dyn Logger>, LogError> {
        let logger: Box<dyn Logger> = match self.sink {
            LogSink::Console => Box::new(ConsoleLogger::global()),
            LogSink::File if self.path == Path::new(DEFAULT_LOG_PATH) => {
                Box::new(FileLogger::global()?)
            }
            LogSink::File => Box::new(FileLogger::open(&self.path)?),
            LogSink::Tee => Box::new(TeeLogger::open(&self.path)?),
        };
        return Ok(logger);
    }
}
