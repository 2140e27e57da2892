//! Record store error types.

/// Kinds of record store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// Failed to create the directory holding the store file
    #[display("Failed to create store directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to stage the replacement file
    #[display("Failed to stage store file: {}", _0)]
    Stage(String),
    /// Failed to swap the staged file into place
    #[display("Failed to replace store file: {}", _0)]
    Replace(String),
    /// Failed to serialize the record map
    #[display("Failed to serialize records: {}", _0)]
    Serialize(String),
}

/// Record store error with location tracking.
///
/// # Examples
///
/// ```
/// use corso_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::Stage("/data/users.json.tmp".to_string()));
/// assert!(format!("{}", err).contains("stage"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
