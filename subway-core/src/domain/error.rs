//! Domain error types.
//!
//! These errors represent validation failures and topology inconsistencies
//! in the domain layer. Each variant carries the user-facing message for
//! that failure; boundary layers surface the message as-is.

/// Domain-level errors for validation and topology consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Station name failed validation, or a path query named an
    /// unregistered station
    #[error("{0}")]
    InvalidStationName(String),

    /// Section insertion preconditions were violated, or two registered
    /// stations have no connecting route
    #[error("{0}")]
    InvalidSection(String),

    /// A section distance was not strictly positive, or a split did not
    /// fit inside the existing section
    #[error("{0}")]
    InvalidDistance(String),

    /// Malformed line definition, malformed hydration input, or an
    /// unknown line id
    #[error("{0}")]
    InvalidLine(String),

    /// A station is missing from a line or from the station directory
    #[error("{0}")]
    InvalidStation(String),
}
