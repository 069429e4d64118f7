//! Educational implementations of creational patterns.
//!
//! This crate shows how the classic Singleton pattern maps onto Rust:
//!
//! - `Singleton<T>`: a lazily initialized, thread-safe cell meant to live
//!   in a `static`.
//! - `Logger`: the usual "one shared logger" example, with console, file
//!   and tee sinks. The console and file loggers expose a process-wide
//!   instance through `global()`.
//!
//! # Example
//!
//! ```
//! use patterns::logger::{ConsoleLogger, Logger};
//!
//! let logger = ConsoleLogger::global();
//! logger.info("service started");
//! assert!(std::ptr::eq(logger, ConsoleLogger::global()));
//! ```

pub mod logger;
pub mod singleton;

pub use logger::ConsoleLogger;
pub use logger::FileLogger;
pub use logger::LogError;
pub use logger::LogLevel;
pub use logger::LogSink;
pub use logger::Logger;
pub use logger::LoggerConfig;
pub use logger::TeeLogger;
pub use singleton::Singleton;
