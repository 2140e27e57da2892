//! Shared test fixture: a recording gateway and a wired storefront.

#![allow(dead_code)]

use corso_bot::{ChatGateway, OutboundMessage, Storefront};
use corso_core::{CorsoConfig, Locale, UserId};
use corso_error::{CorsoResult, DeliveryError, DeliveryErrorKind};
use corso_ledger::PurchaseLedger;
use corso_store::{JsonFileStore, UserRepository};
use parking_lot::Mutex;
use std::sync::Arc;
use tempfile::TempDir;

/// Gateway double that records every send and can fail selected users.
#[derive(Default)]
pub struct MockGateway {
    sent: Mutex<Vec<(UserId, OutboundMessage)>>,
    fail_for: Mutex<Vec<UserId>>,
}

impl MockGateway {
    pub fn fail_user(&self, user: UserId) {
        self.fail_for.lock().push(user);
    }

    /// Every message sent to a user, in order, including failed attempts.
    pub fn attempts_to(&self, user: UserId) -> Vec<OutboundMessage> {
        self.sent
            .lock()
            .iter()
            .filter(|(to, _)| *to == user)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn attempt_count(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait::async_trait]
impl ChatGateway for MockGateway {
    async fn send(&self, user: UserId, message: OutboundMessage) -> CorsoResult<()> {
        self.sent.lock().push((user, message));
        if self.fail_for.lock().contains(&user) {
            return Err(DeliveryError::new(DeliveryErrorKind::SendFailed {
                user: user.value(),
                reason: "unreachable".to_string(),
            })
            .into());
        }
        Ok(())
    }
}

pub const OPERATOR: UserId = UserId(1000);

pub struct Fixture {
    pub storefront: Storefront,
    pub gateway: Arc<MockGateway>,
    pub repository: Arc<UserRepository>,
    pub ledger: PurchaseLedger,
    // Held for the lifetime of the fixture so the store file survives.
    _dir: TempDir,
}

/// A storefront with a configured operator and a BASIC group link.
pub fn fixture() -> Fixture {
    fixture_with(|config| {
        config.operator_id = Some(OPERATOR);
        config.group_links.basic = Some("https://chat.example/basic".to_string());
    })
}

/// A storefront with config tweaks applied on top of the defaults.
pub fn fixture_with(tweak: impl FnOnce(&mut CorsoConfig)) -> Fixture {
    let dir = TempDir::new().unwrap();
    let mut config = CorsoConfig {
        gateway_token: "test-token".to_string(),
        ..CorsoConfig::default()
    };
    tweak(&mut config);
    let config = Arc::new(config);

    let store = Arc::new(JsonFileStore::new(dir.path().join("users.json")));
    let repository = Arc::new(UserRepository::new(store, Locale::Ru));
    let ledger = PurchaseLedger::new(repository.clone());
    let gateway = Arc::new(MockGateway::default());

    let storefront = Storefront::new(
        config,
        repository.clone(),
        PurchaseLedger::new(repository.clone()),
        gateway.clone(),
    );

    Fixture {
        storefront,
        gateway,
        repository,
        ledger,
        _dir: dir,
    }
}
