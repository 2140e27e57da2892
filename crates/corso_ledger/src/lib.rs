//! Purchase ledger: per-user, per-plan status tracking.
//!
//! The ledger owns the purchase state machine. Status moves only along the
//! allowed edges (`none -> requested -> approved | denied`, with re-entry
//! from `denied` and `approved` back to `requested`); access is derived from
//! the stored entries on every read and never cached.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ledger;

pub use ledger::PurchaseLedger;
