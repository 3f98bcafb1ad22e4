use thiserror::Error;

/// Errors raised when a caller opts into strict extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// A value was required but the container was empty
    #[error("Missing value: {what}")]
    Absent { what: String },
}
