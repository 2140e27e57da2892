//! Typed accessors over the record store.

use crate::{RecordStore, RecordMap};
use corso_core::{Locale, Plan, ProfilePatch, UserId, UserRecord, unix_now};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Repository of user records.
///
/// Reads are lock-free and never fail; a never-seen id yields a default
/// record without persisting anything. Mutations to the same user id are
/// serialized through a per-id async mutex held across the whole
/// read-modify-write cycle, so concurrent operations on one id cannot lose
/// updates; mutations to different ids proceed concurrently.
///
/// A failed persist is logged and swallowed: the caller continues on the
/// in-memory result and the store converges on the next successful write.
pub struct UserRepository {
    store: Arc<dyn RecordStore>,
    default_locale: Locale,
    locks: Mutex<HashMap<UserId, Arc<tokio::sync::Mutex<()>>>>,
}

impl UserRepository {
    /// Create a repository over a store.
    pub fn new(store: Arc<dyn RecordStore>, default_locale: Locale) -> Self {
        Self {
            store,
            default_locale,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn lock_for(&self, id: UserId) -> Arc<tokio::sync::Mutex<()>> {
        self.locks.lock().entry(id).or_default().clone()
    }

    /// The stored record for a user, or an empty default if absent. Never
    /// fails and never persists anything.
    pub async fn get(&self, id: UserId) -> UserRecord {
        self.store.read().await.remove(&id).unwrap_or_default()
    }

    /// The full record map, for operations that fan out over every user.
    pub async fn snapshot(&self) -> RecordMap {
        self.store.read().await
    }

    /// Get-or-create the record for a user, apply a fallible mutation, and
    /// persist the result.
    ///
    /// The mutation runs under the user's id lock. When it returns an error
    /// nothing is written and the error is handed back; when it succeeds a
    /// failed persist is logged, not raised.
    pub async fn try_update<F, E>(&self, id: UserId, f: F) -> Result<UserRecord, E>
    where
        F: FnOnce(&mut UserRecord) -> Result<(), E>,
    {
        let lock = self.lock_for(id);
        let _guard = lock.lock().await;

        let mut records = self.store.read().await;
        let record = records.entry(id).or_default();
        f(record)?;
        let updated = record.clone();

        if let Err(e) = self.store.write(&records).await {
            warn!(user = %id, error = %e, "Record write failed, continuing on in-memory state");
        }
        Ok(updated)
    }

    /// Infallible variant of [`try_update`](Self::try_update).
    pub async fn update<F>(&self, id: UserId, f: F) -> UserRecord
    where
        F: FnOnce(&mut UserRecord),
    {
        let result: Result<UserRecord, std::convert::Infallible> = self
            .try_update(id, |record| {
                f(record);
                Ok(())
            })
            .await;
        match result {
            Ok(record) => record,
            Err(never) => match never {},
        }
    }

    /// Merge profile fields and stamp the start of a session.
    #[instrument(skip(self, patch))]
    pub async fn record_start(&self, id: UserId, patch: &ProfilePatch) -> UserRecord {
        self.update(id, |record| {
            patch.apply(record);
            record.started_at = Some(unix_now());
        })
        .await
    }

    /// Merge profile fields and remember the last free-text message.
    #[instrument(skip(self, patch, text))]
    pub async fn record_message(&self, id: UserId, patch: &ProfilePatch, text: &str) -> UserRecord {
        self.update(id, |record| {
            patch.apply(record);
            record.last_message = Some(text.to_string());
            record.last_message_at = Some(unix_now());
        })
        .await
    }

    /// Remember the plan the user last opened details for.
    #[instrument(skip(self))]
    pub async fn record_plan_selection(&self, id: UserId, plan: Plan) -> UserRecord {
        self.update(id, |record| {
            record.last_selected_plan = Some(plan);
            record.last_selected_plan_at = Some(unix_now());
        })
        .await
    }

    /// The user's locale, resolved against the supported set with fallback
    /// to the default. The fallback itself is not persisted.
    pub async fn get_locale(&self, id: UserId) -> Locale {
        let record = self.get(id).await;
        Locale::resolve(record.locale.as_deref(), self.default_locale)
    }

    /// Set the user's locale. Unsupported input is coerced to the default,
    /// never rejected; the canonical value is persisted.
    #[instrument(skip(self))]
    pub async fn set_locale(&self, id: UserId, raw: &str) -> Locale {
        let locale = Locale::resolve(Some(raw), self.default_locale);
        self.update(id, |record| {
            record.locale = Some(locale.to_string());
            record.locale_set_at = Some(unix_now());
        })
        .await;
        locale
    }
}
