//! Observable events
//!
//! Events are explicit and typed; the logger only ever sees their names.

use std::fmt;

/// Observable events in the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,
    /// Schema graph built
    SchemaBuilt,

    // Query compilation
    /// Query compiled into a filter tree
    QueryCompiled,
    /// A term was dropped because its literal could not be read
    TermDropped,
    /// A degrees/minutes/seconds coordinate was encountered
    DmsUnsupported,
    /// Grouping frames did not nest as expected
    GroupMismatch,

    // Record conversion
    /// Record encoded into a graph
    RecordEncoded,
    /// Graph decoded into a record
    RecordDecoded,
    /// Attribute leaf with no handler for its entity
    AttributeUnhandled,
    /// Attribute value had an unexpected scalar kind
    AttributeKindMismatch,
    /// Enumeration wire-name not in the table
    EnumerationUnknown,
    /// Date fields did not form a valid timestamp
    DateInvalid,
}

impl Event {
    /// Returns the event name as it appears in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaBuilt => "SCHEMA_BUILT",
            Event::QueryCompiled => "QUERY_COMPILED",
            Event::TermDropped => "TERM_DROPPED",
            Event::DmsUnsupported => "DMS_UNSUPPORTED",
            Event::GroupMismatch => "GROUP_MISMATCH",
            Event::RecordEncoded => "RECORD_ENCODED",
            Event::RecordDecoded => "RECORD_DECODED",
            Event::AttributeUnhandled => "ATTRIBUTE_UNHANDLED",
            Event::AttributeKindMismatch => "ATTRIBUTE_KIND_MISMATCH",
            Event::EnumerationUnknown => "ENUMERATION_UNKNOWN",
            Event::DateInvalid => "DATE_INVALID",
        }
    }

    /// Returns true for events that report discarded input
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Event::TermDropped
                | Event::DmsUnsupported
                | Event::GroupMismatch
                | Event::AttributeKindMismatch
                | Event::EnumerationUnknown
                | Event::DateInvalid
        )
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
    fn test_event_names_are_upper_snake() {
        for event in [
            Event::ConfigLoaded,
            Event::TermDropped,
            Event::RecordDecoded,
            Event::EnumerationUnknown,
        ] {
            let name = event.as_str();
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_warning_classification() {
        assert!(Event::TermDropped.is_warning());
        assert!(Event::DmsUnsupported.is_warning());
        assert!(!Event::QueryCompiled.is_warning());
        assert!(!Event::AttributeUnhandled.is_warning());
    }
}
