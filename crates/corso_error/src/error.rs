//! Top-level error wrapper types.

use crate::{CommandError, ConfigError, DeliveryError, LedgerError, StoreError};

/// This is the foundation error enum for the Corso workspace.
///
/// # Examples
///
/// ```
/// use corso_error::{ConfigError, CorsoError};
///
/// let cfg_err = ConfigError::new("store path is empty");
/// let err: CorsoError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CorsoErrorKind {
    /// Record store error
    #[from(StoreError)]
    Store(StoreError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Command validation or authorization error
    #[from(CommandError)]
    Command(CommandError),
    /// Purchase ledger error
    #[from(LedgerError)]
    Ledger(LedgerError),
    /// Outbound delivery error
    #[from(DeliveryError)]
    Delivery(DeliveryError),
}

/// Corso error with kind discrimination.
///
/// # Examples
///
/// ```
/// use corso_error::{CommandError, CommandErrorKind, CorsoResult};
///
/// fn authorize(is_operator: bool) -> CorsoResult<()> {
///     if !is_operator {
///         Err(CommandError::new(CommandErrorKind::Unauthorized))?
///     }
///     Ok(())
/// }
///
/// assert!(authorize(false).is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Corso Error: {}", _0)]
pub struct CorsoError(Box<CorsoErrorKind>);

impl CorsoError {
    /// Create a new error from a kind.
    pub fn new(kind: CorsoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CorsoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CorsoErrorKind
impl<T> From<T> for CorsoError
where
    T: Into<CorsoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Corso operations.
///
/// # Examples
///
/// ```
/// use corso_error::{CorsoResult, StoreError, StoreErrorKind};
///
/// fn stage() -> CorsoResult<()> {
///     Err(StoreError::new(StoreErrorKind::Stage("disk full".to_string())))?
/// }
/// ```
pub type CorsoResult<T> = std::result::Result<T, CorsoError>;
