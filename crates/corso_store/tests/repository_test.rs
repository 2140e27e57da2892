//! Tests for the user repository.

use corso_core::{Locale, Plan, ProfilePatch, UserId, UserRecord};
use corso_error::{CorsoResult, StoreError, StoreErrorKind};
use corso_store::{JsonFileStore, RecordMap, RecordStore, UserRepository};
use std::sync::Arc;
use tempfile::TempDir;

fn repository_in(dir: &TempDir) -> (UserRepository, std::path::PathBuf) {
    let path = dir.path().join("users.json");
    let store = Arc::new(JsonFileStore::new(path.clone()));
    (UserRepository::new(store, Locale::Ru), path)
}

#[tokio::test]
async fn get_for_unknown_id_returns_default_and_persists_nothing() {
    let dir = TempDir::new().unwrap();
    let (repo, path) = repository_in(&dir);

    let record = repo.get(UserId(1)).await;
    assert_eq!(record, UserRecord::default());
    assert!(!path.exists());
}

#[tokio::test]
async fn update_creates_the_record_lazily_and_persists() {
    let dir = TempDir::new().unwrap();
    let (repo, path) = repository_in(&dir);

    let record = repo
        .update(UserId(2), |record| {
            record.first_name = Some("Dilshod".to_string());
        })
        .await;
    assert_eq!(record.first_name.as_deref(), Some("Dilshod"));
    assert!(path.exists());

    let back = repo.get(UserId(2)).await;
    assert_eq!(back.first_name.as_deref(), Some("Dilshod"));
}

#[tokio::test]
async fn record_message_merges_and_preserves_other_fields() {
    let dir = TempDir::new().unwrap();
    let (repo, _) = repository_in(&dir);
    let id = UserId(3);

    repo.record_start(
        id,
        &ProfilePatch {
            first_name: Some("Madina".to_string()),
            ..ProfilePatch::default()
        },
    )
    .await;
    repo.record_plan_selection(id, Plan::Pro).await;

    let record = repo
        .record_message(id, &ProfilePatch::default(), "how do I start?")
        .await;

    assert_eq!(record.first_name.as_deref(), Some("Madina"));
    assert_eq!(record.last_selected_plan, Some(Plan::Pro));
    assert_eq!(record.last_message.as_deref(), Some("how do I start?"));
    assert!(record.last_message_at.is_some());
    assert!(record.started_at.is_some());
}

#[tokio::test]
async fn locale_defaults_without_persisting_the_fallback() {
    let dir = TempDir::new().unwrap();
    let (repo, path) = repository_in(&dir);

    assert_eq!(repo.get_locale(UserId(4)).await, Locale::Ru);
    assert!(!path.exists());
}

#[tokio::test]
async fn unsupported_locale_set_is_persisted_as_the_explicit_default() {
    let dir = TempDir::new().unwrap();
    let (repo, _) = repository_in(&dir);
    let id = UserId(5);

    let locale = repo.set_locale(id, "xx").await;
    assert_eq!(locale, Locale::Ru);

    let record = repo.get(id).await;
    assert_eq!(record.locale.as_deref(), Some("ru"));
    assert!(record.locale_set_at.is_some());
    assert_eq!(repo.get_locale(id).await, Locale::Ru);
}

#[tokio::test]
async fn supported_locale_set_round_trips() {
    let dir = TempDir::new().unwrap();
    let (repo, _) = repository_in(&dir);
    let id = UserId(6);

    assert_eq!(repo.set_locale(id, "TJ").await, Locale::Tj);
    assert_eq!(repo.get_locale(id).await, Locale::Tj);
    assert_eq!(repo.get(id).await.locale.as_deref(), Some("tj"));
}

#[tokio::test]
async fn stored_unsupported_locale_resolves_to_default_but_stays_raw() {
    let dir = TempDir::new().unwrap();
    let (repo, _) = repository_in(&dir);
    let id = UserId(7);

    repo.update(id, |record| {
        record.locale = Some("zz".to_string());
    })
    .await;

    assert_eq!(repo.get_locale(id).await, Locale::Ru);
    // Resolution on read does not rewrite the stored value.
    assert_eq!(repo.get(id).await.locale.as_deref(), Some("zz"));
}

#[tokio::test]
async fn concurrent_updates_to_one_id_lose_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    let store = Arc::new(JsonFileStore::new(path));
    let repo = Arc::new(UserRepository::new(store, Locale::Ru));
    let id = UserId(8);

    let mut handles = Vec::new();
    for _ in 0..16 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.update(id, |record| {
                let count: i64 = record
                    .last_message
                    .as_deref()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0);
                record.last_message = Some((count + 1).to_string());
            })
            .await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let record = repo.get(id).await;
    assert_eq!(record.last_message.as_deref(), Some("16"));
}

struct WriteFailingStore;

#[async_trait::async_trait]
impl RecordStore for WriteFailingStore {
    async fn read(&self) -> RecordMap {
        RecordMap::new()
    }

    async fn write(&self, _records: &RecordMap) -> CorsoResult<()> {
        Err(StoreError::new(StoreErrorKind::Replace("disk full".to_string())).into())
    }
}

#[tokio::test]
async fn failed_persist_still_returns_the_in_memory_result() {
    let repo = UserRepository::new(Arc::new(WriteFailingStore), Locale::Ru);

    let record = repo
        .update(UserId(9), |record| {
            record.first_name = Some("Surviving".to_string());
        })
        .await;
    assert_eq!(record.first_name.as_deref(), Some("Surviving"));
}
