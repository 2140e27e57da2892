//! Course-access plans and purchase status.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A course-access tier.
///
/// The plan set is closed: three tiers, each with an immutable price and
/// access-duration descriptor held in the [`PlanCatalog`](crate::PlanCatalog).
/// Plans are reference data, not part of the mutable model.
///
/// # Examples
///
/// ```
/// use corso_core::Plan;
/// use std::str::FromStr;
///
/// assert_eq!(Plan::from_str("VIP").unwrap(), Plan::Vip);
/// assert_eq!(Plan::from_str("basic").unwrap(), Plan::Basic);
/// assert!(Plan::from_str("GOLD").is_err());
/// assert_eq!(format!("{}", Plan::Pro), "PRO");
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
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Plan {
    /// Entry tier: course fundamentals, time-limited access
    Basic,
    /// Mid tier: fundamentals plus practical reviews, permanent access
    Pro,
    /// Top tier: everything plus personal support, permanent access
    Vip,
}

impl Plan {
    /// Privilege order used to pick the highest approved plan, most
    /// privileged first. This is an explicit list, not alphabetic or
    /// declaration order.
    pub const PRECEDENCE: [Plan; 3] = [Plan::Vip, Plan::Pro, Plan::Basic];
}

/// Status of a purchase for one `(user, plan)` pair.
///
/// Absence of an entry is equivalent to [`PurchaseStatus::None`]. The legal
/// edges are `none -> requested`, `requested -> approved`,
/// `requested -> denied`, `denied -> requested` and `approved -> requested`;
/// a same-state transition is accepted as an idempotent re-stamp.
///
/// # Examples
///
/// ```
/// use corso_core::PurchaseStatus;
///
/// assert!(PurchaseStatus::None.can_transition(PurchaseStatus::Requested));
/// assert!(!PurchaseStatus::None.can_transition(PurchaseStatus::Approved));
/// assert!(PurchaseStatus::Denied.can_transition(PurchaseStatus::Requested));
/// assert!(PurchaseStatus::Approved.can_transition(PurchaseStatus::Approved));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    /// No purchase activity for this plan
    #[default]
    None,
    /// User reported a payment; awaiting operator review
    Requested,
    /// Operator confirmed the payment
    Approved,
    /// Operator rejected the payment claim
    Denied,
}

impl PurchaseStatus {
    /// Whether moving from `self` to `to` follows the allowed edge set.
    pub fn can_transition(self, to: PurchaseStatus) -> bool {
        use PurchaseStatus::{Approved, Denied, None, Requested};
        if self == to {
            // Idempotent re-stamp of the current state.
            return true;
        }
        matches!(
            (self, to),
            (None, Requested)
                | (Requested, Approved)
                | (Requested, Denied)
                | (Denied, Requested)
                | (Approved, Requested)
        )
    }
}

// Stored status strings outside the known set coerce to `none` instead of
// poisoning the whole record on read.
impl<'de> Deserialize<'de> for PurchaseStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(PurchaseStatus::from_str(raw.trim()).unwrap_or_default())
    }
}

/// Purchase state for one plan within a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseEntry {
    /// Current status
    pub status: PurchaseStatus,
    /// Unix seconds of the last transition; re-stamped on every transition
    pub updated_at: i64,
}

impl PurchaseEntry {
    /// Create an entry stamped with the given time.
    pub fn new(status: PurchaseStatus, updated_at: i64) -> Self {
        Self { status, updated_at }
    }
}
