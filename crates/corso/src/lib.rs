//! Corso - conversational storefront with a manual payment-approval workflow.
//!
//! Corso presents course-access tiers to chat users, tracks per-user locale
//! and purchase state, and mediates approvals between buyers and an operator.
//! The chat transport is an external collaborator behind the [`ChatGateway`]
//! trait; state lives in an atomically-replaced JSON record store.
//!
//! # Architecture
//!
//! The workspace is organized as focused crates, re-exported here:
//!
//! - `corso_error` - foundation error types
//! - `corso_core` - domain model, plan catalog, configuration
//! - `corso_store` - atomic JSON record store and user repository
//! - `corso_ledger` - the purchase state machine and access derivation
//! - `corso_bot` - event routing, operator workflow, localized surface
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use corso::{
//!     CorsoConfig, JsonFileStore, PurchaseLedger, Storefront, UserRepository,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(CorsoConfig::load()?);
//!     config.validate()?;
//!
//!     let store = Arc::new(JsonFileStore::new(config.store_path.clone()));
//!     let repository = Arc::new(UserRepository::new(store, config.default_locale));
//!     let ledger = PurchaseLedger::new(repository.clone());
//!     let gateway = todo!("wire your messaging gateway here");
//!
//!     let storefront = Storefront::new(config, repository, ledger, gateway);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use corso_bot::{
    BroadcastReport, ButtonAction, CallbackToken, ChatGateway, DELIVERY_TIMEOUT, EventKind,
    InboundEvent, InlineButton, Keyboard, OutboundMessage, Storefront, deliver,
};
pub use corso_core::{
    CorsoConfig, GroupLinks, Locale, LocalizedText, Plan, PlanCatalog, PlanOffer, ProfilePatch,
    PurchaseEntry, PurchaseStatus, SupportContacts, UserId, UserRecord, init_tracing, unix_now,
};
pub use corso_error::{
    CommandError, CommandErrorKind, ConfigError, CorsoError, CorsoErrorKind, CorsoResult,
    DeliveryError, DeliveryErrorKind, LedgerError, LedgerErrorKind, StoreError, StoreErrorKind,
};
pub use corso_ledger::PurchaseLedger;
pub use corso_store::{JsonFileStore, RecordMap, RecordStore, UserRepository};
