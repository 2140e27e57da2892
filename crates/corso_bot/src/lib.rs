//! Chat surface and operator workflow for the Corso storefront.
//!
//! The transport is an external collaborator behind the [`ChatGateway`]
//! trait: this crate consumes inbound events and produces outbound messages,
//! and never speaks a wire protocol itself.
//!
//! [`Storefront`] is the single entry point. It routes user events (menu
//! texts, callback tokens) and operator commands (approve, deny, broadcast),
//! mutating state only through the repository and the purchase ledger.
//! Notifications are best-effort with a bounded timeout: ledger state is the
//! source of truth and a failed delivery never rolls a transition back.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod delivery;
mod event;
mod gateway;
mod keyboard;
mod storefront;
mod texts;
mod workflow;

pub use delivery::{DELIVERY_TIMEOUT, deliver};
pub use event::{CallbackToken, EventKind, InboundEvent};
pub use gateway::{ButtonAction, ChatGateway, InlineButton, Keyboard, OutboundMessage};
pub use storefront::Storefront;
pub use workflow::BroadcastReport;
