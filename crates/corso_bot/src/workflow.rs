//! Operator workflow: approve, deny, broadcast.

use crate::{OutboundMessage, Storefront, keyboard, texts};
use corso_core::{Plan, UserId};
use corso_error::{CommandError, CommandErrorKind, CorsoResult};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// Outcome of a broadcast fan-out. Each delivery is independent;
/// `sent + failed` equals the number of stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Deliveries that succeeded
    pub sent: usize,
    /// Deliveries that failed or timed out
    pub failed: usize,
}

impl Storefront {
    /// Dispatch one of the privileged commands, replying with a usage or
    /// denial message when it is rejected. No rejection mutates state.
    pub(crate) async fn handle_operator_command(
        &self,
        caller: UserId,
        name: &str,
        args: &[String],
    ) {
        let outcome = match name {
            "approve" => self.approve_command(caller, args).await,
            "deny" => self.deny_command(caller, args).await,
            "broadcast" => self.broadcast_command(caller, args).await,
            _ => Err(CommandError::new(CommandErrorKind::UnknownCommand(name.to_string())).into()),
        };

        if let Err(e) = outcome {
            warn!(%caller, command = name, error = %e, "Operator command rejected");
            self.reply(caller, OutboundMessage::text(texts::fault(&e)))
                .await;
        }
    }

    /// `approve <user_id> <plan>`: confirm a payment and open access.
    #[instrument(skip(self, args))]
    async fn approve_command(&self, caller: UserId, args: &[String]) -> CorsoResult<()> {
        self.authorize(caller)?;
        let (user, plan) = parse_target(args, "/approve USER_ID PLAN (BASIC/PRO/VIP)")?;

        self.ledger.approve(user, plan).await?;
        self.reply(
            caller,
            OutboundMessage::text(texts::approve_confirm(user, plan)),
        )
        .await;

        // Notify the buyer on their own locale. Best-effort: the approval
        // above is already durable.
        let record = self.repository.get(user).await;
        let locale = self.locale_of(&record);
        let offer = self.config.plans.offer(plan);
        self.reply(
            user,
            OutboundMessage::markdown(texts::payment_approved(locale, offer.name.get(locale)))
                .with_keyboard(keyboard::main_menu(locale)),
        )
        .await;

        if let Some(link) = self.config.group_links.for_plan(plan) {
            self.reply(
                user,
                OutboundMessage::text(texts::group_invite(locale))
                    .with_keyboard(keyboard::group_invite(locale, plan, link)),
            )
            .await;
        }
        Ok(())
    }

    /// `deny <user_id> <plan>`: reject a payment claim.
    #[instrument(skip(self, args))]
    async fn deny_command(&self, caller: UserId, args: &[String]) -> CorsoResult<()> {
        self.authorize(caller)?;
        let (user, plan) = parse_target(args, "/deny USER_ID PLAN (BASIC/PRO/VIP)")?;

        self.ledger.deny(user, plan).await?;
        self.reply(caller, OutboundMessage::text(texts::deny_confirm(user, plan)))
            .await;

        let record = self.repository.get(user).await;
        let locale = self.locale_of(&record);
        self.reply(
            user,
            OutboundMessage::markdown(texts::payment_denied(locale))
                .with_keyboard(keyboard::main_menu(locale)),
        )
        .await;
        Ok(())
    }

    /// `broadcast <text>`: fan a message out to every stored user.
    #[instrument(skip(self, args))]
    async fn broadcast_command(&self, caller: UserId, args: &[String]) -> CorsoResult<()> {
        self.authorize(caller)?;
        if args.is_empty() {
            Err(CommandError::new(CommandErrorKind::MissingArguments {
                usage: "/broadcast ТЕКСТ".to_string(),
            }))?;
        }
        let text = args.join(" ");

        let report = self.broadcast(&text).await;
        info!(sent = report.sent, failed = report.failed, "Broadcast finished");
        self.reply(
            caller,
            OutboundMessage::text(texts::broadcast_done(report.sent, report.failed)),
        )
        .await;
        Ok(())
    }

    /// Deliver a message to every stored user, isolating per-user failures.
    pub(crate) async fn broadcast(&self, text: &str) -> BroadcastReport {
        let records = self.repository.snapshot().await;
        let mut report = BroadcastReport { sent: 0, failed: 0 };

        for (user, record) in &records {
            let locale = self.locale_of(record);
            let message =
                OutboundMessage::text(text).with_keyboard(keyboard::main_menu(locale));
            if self.reply(*user, message).await {
                report.sent += 1;
            } else {
                report.failed += 1;
            }
        }
        report
    }

    fn authorize(&self, caller: UserId) -> CorsoResult<()> {
        if !self.config.is_operator(caller) {
            Err(CommandError::new(CommandErrorKind::Unauthorized))?;
        }
        Ok(())
    }
}

fn parse_target(args: &[String], usage: &str) -> CorsoResult<(UserId, Plan)> {
    if args.len() < 2 {
        Err(CommandError::new(CommandErrorKind::MissingArguments {
            usage: usage.to_string(),
        }))?;
    }
    let user = args[0]
        .parse::<UserId>()
        .map_err(|_| CommandError::new(CommandErrorKind::InvalidUserId(args[0].clone())))?;
    let plan = Plan::from_str(&args[1])
        .map_err(|_| CommandError::new(CommandErrorKind::UnknownPlan(args[1].clone())))?;
    Ok((user, plan))
}
