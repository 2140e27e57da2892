//! The purchase state machine over the user repository.

use corso_core::{Plan, PurchaseEntry, PurchaseStatus, UserId, UserRecord, unix_now};
use corso_error::{CorsoResult, LedgerError, LedgerErrorKind};
use corso_store::UserRepository;
use std::sync::Arc;
use tracing::{info, instrument};

/// Tracks purchase status per `(user, plan)` pair and derives access.
///
/// Transitions are guarded: `approve` and `deny` are legal only from
/// `requested` (or as an idempotent re-stamp of the same state), while
/// `request` is the user-initiated edge and is legal from every state. An
/// illegal transition is a recoverable validation fault that leaves the
/// record untouched.
///
/// Derived access is recomputed from the stored entries on every read.
pub struct PurchaseLedger {
    repository: Arc<UserRepository>,
}

impl PurchaseLedger {
    /// Create a ledger over a repository.
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    /// The user's "I paid" action: force-set `requested`.
    ///
    /// Re-requests are always legal, including after a denial or on top of
    /// an earlier approval (re-purchase), so this edge carries no guard.
    #[instrument(skip(self))]
    pub async fn request(&self, user: UserId, plan: Plan) {
        self.repository
            .update(user, |record| {
                record
                    .purchases
                    .insert(plan, PurchaseEntry::new(PurchaseStatus::Requested, unix_now()));
            })
            .await;
        info!(%user, %plan, "Purchase requested");
    }

    /// Operator approval: `requested -> approved`.
    ///
    /// # Errors
    ///
    /// Returns an error when the entry is not in `requested` (repeating an
    /// approval is accepted as an idempotent re-stamp).
    #[instrument(skip(self))]
    pub async fn approve(&self, user: UserId, plan: Plan) -> CorsoResult<()> {
        self.transition(user, plan, PurchaseStatus::Approved).await?;
        info!(%user, %plan, "Purchase approved");
        Ok(())
    }

    /// Operator denial: `requested -> denied`.
    ///
    /// # Errors
    ///
    /// Returns an error when the entry is not in `requested` (repeating a
    /// denial is accepted as an idempotent re-stamp).
    #[instrument(skip(self))]
    pub async fn deny(&self, user: UserId, plan: Plan) -> CorsoResult<()> {
        self.transition(user, plan, PurchaseStatus::Denied).await?;
        info!(%user, %plan, "Purchase denied");
        Ok(())
    }

    async fn transition(&self, user: UserId, plan: Plan, to: PurchaseStatus) -> CorsoResult<()> {
        self.repository
            .try_update(user, |record| -> CorsoResult<()> {
                let from = record
                    .purchase(plan)
                    .map(|entry| entry.status)
                    .unwrap_or_default();
                if !from.can_transition(to) {
                    return Err(LedgerError::new(LedgerErrorKind::InvalidTransition {
                        from: from.to_string(),
                        to: to.to_string(),
                        plan: plan.to_string(),
                    })
                    .into());
                }
                record
                    .purchases
                    .insert(plan, PurchaseEntry::new(to, unix_now()));
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Current status for a `(user, plan)` pair; `none` if absent.
    pub async fn status(&self, user: UserId, plan: Plan) -> PurchaseStatus {
        let record = self.repository.get(user).await;
        record
            .purchase(plan)
            .map(|entry| entry.status)
            .unwrap_or_default()
    }

    /// Whether the user has access: true iff any plan entry is `approved`.
    pub async fn has_access(&self, user: UserId) -> bool {
        let record = self.repository.get(user).await;
        Self::approved_in(&record).is_some()
    }

    /// The highest-precedence approved plan, if any.
    pub async fn approved_plan(&self, user: UserId) -> Option<Plan> {
        let record = self.repository.get(user).await;
        Self::approved_in(&record)
    }

    /// The highest-precedence approved plan within a record snapshot.
    pub fn approved_in(record: &UserRecord) -> Option<Plan> {
        Plan::PRECEDENCE.into_iter().find(|plan| {
            record
                .purchase(*plan)
                .is_some_and(|entry| entry.status == PurchaseStatus::Approved)
        })
    }
}
