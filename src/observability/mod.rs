//! Observability for passport scans
//!
//! Structured JSON-lines logging on stderr and the typed lifecycle events
//! a scan emits.
//!
//! # Usage
//!
//! ```ignore
//! use passport_scan::observability::{log_event, Event, Logger, Severity};
//!
//! let logger = Logger::new(Severity::Info);
//! log_event(&logger, Event::ScanComplete, &[("valid", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its own severity
pub fn log_event(logger: &Logger, event: Event, fields: &[(&str, &str)]) {
    logger.log(event.severity(), event.as_str(), fields);
}
