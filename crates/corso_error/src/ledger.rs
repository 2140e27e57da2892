//! Purchase ledger error types.

/// Kinds of ledger errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LedgerErrorKind {
    /// A status transition outside the allowed edge set was requested.
    ///
    /// The ledger leaves the record untouched; the caller reports this as a
    /// validation fault.
    #[display("Illegal transition {} -> {} for plan {}", from, to, plan)]
    InvalidTransition {
        /// Current status of the `(user, plan)` entry
        from: String,
        /// Status the caller tried to set
        to: String,
        /// Plan the transition targeted
        plan: String,
    },
}

/// Ledger error with location tracking.
///
/// # Examples
///
/// ```
/// use corso_error::{LedgerError, LedgerErrorKind};
///
/// let err = LedgerError::new(LedgerErrorKind::InvalidTransition {
///     from: "none".to_string(),
///     to: "approved".to_string(),
///     plan: "BASIC".to_string(),
/// });
/// assert!(format!("{}", err).contains("none -> approved"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ledger Error: {} at line {} in {}", kind, line, file)]
pub struct LedgerError {
    /// The kind of error that occurred
    pub kind: LedgerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LedgerError {
    /// Create a new ledger error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LedgerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
