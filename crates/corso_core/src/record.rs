//! The persisted per-user record.

use crate::{Plan, PurchaseEntry};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Current time as unix seconds, the stamp format used everywhere in the
/// record model.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Everything Corso knows about one chat user.
///
/// Every field is optional or defaulted so that any well-formed JSON object
/// deserializes; unexpected shapes are coerced at the store boundary rather
/// than propagated. Records are created lazily on first interaction and are
/// never deleted.
///
/// The `locale` field holds the raw stored value; resolution against the
/// supported set happens on read so that an unsupported stored value falls
/// back silently without being rewritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    /// First name from the chat profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name from the chat profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Public handle from the chat profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Unix seconds of the first /start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<i64>,
    /// Raw stored locale; resolved on read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Unix seconds of the last explicit locale choice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_set_at: Option<i64>,
    /// Last free-text message, purely informational
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
    /// Unix seconds of the last free-text message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_at: Option<i64>,
    /// Last plan the user opened details for
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_lenient_plan"
    )]
    pub last_selected_plan: Option<Plan>,
    /// Unix seconds of the last plan selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_selected_plan_at: Option<i64>,
    /// Purchase state per plan; absence of an entry means status `none`
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "de_lenient_purchases"
    )]
    pub purchases: BTreeMap<Plan, PurchaseEntry>,
}

impl UserRecord {
    /// The purchase entry for a plan, if any.
    pub fn purchase(&self, plan: Plan) -> Option<&PurchaseEntry> {
        self.purchases.get(&plan)
    }
}

/// Profile fields patched from inbound chat events.
///
/// Only fields present in the patch overwrite the stored record; everything
/// else is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    /// First name, if the gateway supplied one
    pub first_name: Option<String>,
    /// Last name, if the gateway supplied one
    pub last_name: Option<String>,
    /// Public handle, if the gateway supplied one
    pub handle: Option<String>,
}

impl ProfilePatch {
    /// Shallow-merge the patch into a record.
    pub fn apply(&self, record: &mut UserRecord) {
        if let Some(first_name) = &self.first_name {
            record.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &self.last_name {
            record.last_name = Some(last_name.clone());
        }
        if let Some(handle) = &self.handle {
            record.handle = Some(handle.clone());
        }
    }
}

// A stored plan name outside the known set reads as absent.
fn de_lenient_plan<'de, D>(deserializer: D) -> Result<Option<Plan>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| Plan::from_str(s.trim()).ok()))
}

// Entries keyed by an unknown plan or holding a non-object body are dropped;
// the rest of the map survives.
fn de_lenient_purchases<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<Plan, PurchaseEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    let mut purchases = BTreeMap::new();
    for (key, value) in raw {
        let Ok(plan) = Plan::from_str(key.trim()) else {
            continue;
        };
        let Ok(entry) = serde_json::from_value::<PurchaseEntry>(value) else {
            continue;
        };
        purchases.insert(plan, entry);
    }
    Ok(purchases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PurchaseStatus;

    #[test]
    fn empty_object_deserializes_to_default_record() {
        let record: UserRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, UserRecord::default());
    }

    #[test]
    fn unknown_purchase_keys_are_dropped_without_losing_the_rest() {
        let json = r#"{
            "purchases": {
                "BASIC": {"status": "approved", "updated_at": 100},
                "GOLD": {"status": "approved", "updated_at": 100},
                "PRO": "not an object"
            }
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.purchases.len(), 1);
        assert_eq!(
            record.purchase(Plan::Basic).unwrap().status,
            PurchaseStatus::Approved
        );
    }

    #[test]
    fn stored_unknown_plan_selection_reads_as_absent() {
        let json = r#"{"last_selected_plan": "PLATINUM"}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.last_selected_plan, None);
    }

    #[test]
    fn patch_preserves_unspecified_fields() {
        let mut record = UserRecord {
            first_name: Some("Farrukh".to_string()),
            last_message: Some("hello".to_string()),
            ..UserRecord::default()
        };
        let patch = ProfilePatch {
            handle: Some("farrukh_tj".to_string()),
            ..ProfilePatch::default()
        };
        patch.apply(&mut record);
        assert_eq!(record.first_name.as_deref(), Some("Farrukh"));
        assert_eq!(record.handle.as_deref(), Some("farrukh_tj"));
        assert_eq!(record.last_message.as_deref(), Some("hello"));
    }
}
