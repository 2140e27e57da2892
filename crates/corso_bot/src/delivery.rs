//! Best-effort outbound delivery.

use crate::{ChatGateway, OutboundMessage};
use corso_core::UserId;
use corso_error::{CorsoResult, DeliveryError, DeliveryErrorKind};
use std::time::Duration;
use tracing::warn;

/// Budget for one outbound send. A hung gateway must not wedge a handler.
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Send a message through the gateway under the delivery timeout.
///
/// # Errors
///
/// Returns a delivery error when the gateway fails the send or the timeout
/// elapses. Ledger state is never affected by the outcome.
pub async fn deliver(
    gateway: &dyn ChatGateway,
    user: UserId,
    message: OutboundMessage,
) -> CorsoResult<()> {
    match tokio::time::timeout(DELIVERY_TIMEOUT, gateway.send(user, message)).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(DeliveryError::new(DeliveryErrorKind::SendFailed {
            user: user.value(),
            reason: e.to_string(),
        })
        .into()),
        Err(_) => Err(DeliveryError::new(DeliveryErrorKind::Timeout {
            user: user.value(),
            seconds: DELIVERY_TIMEOUT.as_secs(),
        })
        .into()),
    }
}

/// Send a message, logging a failed delivery instead of propagating it.
/// Returns whether the send succeeded.
pub(crate) async fn deliver_best_effort(
    gateway: &dyn ChatGateway,
    user: UserId,
    message: OutboundMessage,
) -> bool {
    match deliver(gateway, user, message).await {
        Ok(()) => true,
        Err(e) => {
            warn!(%user, error = %e, "Failed to deliver message");
            false
        }
    }
}
