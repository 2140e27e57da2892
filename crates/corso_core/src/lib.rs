//! Core domain types for the Corso storefront.
//!
//! This crate defines the data model shared across the workspace:
//!
//! - [`UserId`] - numeric chat user identity
//! - [`Plan`] - the closed set of course-access tiers
//! - [`PurchaseStatus`] / [`PurchaseEntry`] - per-plan purchase state
//! - [`Locale`] - supported presentation languages with default fallback
//! - [`UserRecord`] - the persisted per-user record
//! - [`PlanCatalog`] - immutable pricing and access descriptors
//! - [`CorsoConfig`] - runtime configuration loaded once at startup
//!
//! All mutable state lives in [`UserRecord`]; plans and prices are reference
//! data owned by the configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod locale;
mod plan;
mod record;
mod telemetry;
mod user;

pub use catalog::{LocalizedText, PlanCatalog, PlanOffer};
pub use config::{CorsoConfig, GroupLinks, SupportContacts};
pub use locale::Locale;
pub use plan::{Plan, PurchaseEntry, PurchaseStatus};
pub use record::{ProfilePatch, UserRecord, unix_now};
pub use telemetry::init_tracing;
pub use user::UserId;
