//! Observability subsystem
//!
//! Structured JSON logging with typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on compile/encode/decode results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use bqs_adapter::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::TermDropped, &[("attribute", "dateTimeModified")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event at the severity its kind implies
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields at the severity its kind implies
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

/// Log a per-node traversal event at TRACE level
pub fn trace_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(Severity::Trace, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::SchemaBuilt);
        log_event(Event::QueryCompiled);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::TermDropped, &[("reason", "unparseable date")]);
        trace_event(Event::AttributeUnhandled, &[("entity", "relation")]);
    }
}
