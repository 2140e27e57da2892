//! Durable persistence for user records.
//!
//! Two layers:
//!
//! - [`RecordStore`] / [`JsonFileStore`] - whole-map persistence with atomic
//!   full-file replacement. Reads never fail: a missing, empty or corrupt
//!   backing file is treated as an empty store.
//! - [`UserRepository`] - typed accessors over the store (profile, locale,
//!   arbitrary record updates) with per-user-id write serialization.
//!
//! There is no in-process caching: every logical operation round-trips
//! through a full read of the store, and every mutation is a full
//! read-modify-write-replace. Record volume is small and operations arrive at
//! chat-interaction rate, so simplicity and crash-safety win over throughput.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json_file;
mod repository;
mod store;

pub use json_file::JsonFileStore;
pub use repository::UserRepository;
pub use store::{RecordMap, RecordStore};
