//! Domain failures for record-store and enrollment operations.

/// Errors surfaced by the record store and the enrollment rule checker.
///
/// All variants are recoverable and returned synchronously to the immediate
/// caller; no operation leaves partial mutation behind on failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A student with this id is already registered.
    #[error("student id '{0}' already exists")]
    DuplicateId(String),

    /// No student with this id is registered.
    #[error("student '{0}' not found")]
    UnknownStudent(String),

    /// Enrolling would push the projected credit load over the ceiling.
    #[error("max credit limit exceeded: projected load {projected} > {limit}")]
    CreditLimitExceeded { projected: u32, limit: u32 },

    /// Empty course code. This indicates a bug in the caller, not a business
    /// rejection; ordinary handlers should not try to recover from it.
    #[error("course code must be non-empty")]
    EmptyCourseCode,
}
