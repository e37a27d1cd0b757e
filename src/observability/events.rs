//! Lifecycle events of a passport scan

use std::fmt;

use super::logger::Severity;

/// Observable events during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Scan begins; input path and policy known
    ScanStart,
    /// Batch file read and split into blocks
    InputLoaded,
    /// One record failed the policy
    RecordRejected,
    /// Count produced
    ScanComplete,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ScanStart => "SCAN_START",
            Event::InputLoaded => "INPUT_LOADED",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::ScanComplete => "SCAN_COMPLETE",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordRejected => Severity::Trace,
            Event::ScanStart | Event::InputLoaded | Event::ScanComplete => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::ScanStart.as_str(), "SCAN_START");
        assert_eq!(Event::RecordRejected.to_string(), "RECORD_REJECTED");
    }

    #[test]
    fn test_rejections_are_trace_only() {
        assert_eq!(Event::RecordRejected.severity(), Severity::Trace);
        assert_eq!(Event::ScanComplete.severity(), Severity::Info);
    }
}
