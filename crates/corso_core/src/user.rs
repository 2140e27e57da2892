//! Chat user identity.

use serde::{Deserialize, Serialize};

/// Numeric chat user id.
///
/// Persisted as a decimal string key in the record store and rendered the
/// same way in operator command arguments.
///
/// # Examples
///
/// ```
/// use corso_core::UserId;
///
/// let id: UserId = 42.into();
/// assert_eq!(format!("{}", id), "42");
/// assert_eq!("42".parse::<UserId>().unwrap(), id);
/// assert!("forty-two".parse::<UserId>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct UserId(pub i64);

impl UserId {
    /// The raw numeric value.
    pub fn value(&self) -> i64 {
        self.0
    }
}
