//! Outbound delivery error types.

/// Kinds of delivery errors.
///
/// Delivery is advisory: ledger state is the source of truth and a failed
/// notification never rolls a transition back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DeliveryErrorKind {
    /// The gateway rejected or failed the send
    #[display("Send to user {} failed: {}", user, reason)]
    SendFailed {
        /// Recipient user id
        user: i64,
        /// Gateway-reported reason
        reason: String,
    },
    /// The send did not complete within the delivery timeout
    #[display("Send to user {} timed out after {}s", user, seconds)]
    Timeout {
        /// Recipient user id
        user: i64,
        /// Timeout budget that elapsed
        seconds: u64,
    },
}

/// Delivery error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Delivery Error: {} at line {} in {}", kind, line, file)]
pub struct DeliveryError {
    /// The kind of error that occurred
    pub kind: DeliveryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DeliveryError {
    /// Create a new delivery error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DeliveryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
