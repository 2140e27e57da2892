//! Error types for the Corso workspace.
//!
//! This crate provides the foundation error types used throughout the Corso
//! storefront.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use corso_error::{ConfigError, CorsoResult};
//!
//! fn load_token() -> CorsoResult<String> {
//!     Err(ConfigError::new("CORSO_GATEWAY_TOKEN is not set"))?
//! }
//!
//! match load_token() {
//!     Ok(token) => println!("Got token of length {}", token.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod delivery;
mod error;
mod ledger;
mod store;

pub use command::{CommandError, CommandErrorKind};
pub use config::ConfigError;
pub use delivery::{DeliveryError, DeliveryErrorKind};
pub use error::{CorsoError, CorsoErrorKind, CorsoResult};
pub use ledger::{LedgerError, LedgerErrorKind};
pub use store::{StoreError, StoreErrorKind};
