//! Inbound event routing.

use crate::delivery::deliver_best_effort;
use crate::event::{CallbackToken, EventKind, InboundEvent};
use crate::{ChatGateway, OutboundMessage, keyboard, texts};
use corso_core::{CorsoConfig, Locale, Plan, UserId, UserRecord};
use corso_error::{CommandError, CommandErrorKind};
use corso_ledger::PurchaseLedger;
use corso_store::UserRepository;
use std::sync::Arc;
use tracing::{info, instrument};

/// The storefront service: routes inbound chat events and operator commands.
///
/// One instance serves every user. Each call to [`handle`](Self::handle) is
/// self-contained: it performs its own read-modify-write cycles against the
/// repository and never caches derived state such as access.
pub struct Storefront {
    pub(crate) config: Arc<CorsoConfig>,
    pub(crate) repository: Arc<UserRepository>,
    pub(crate) ledger: PurchaseLedger,
    pub(crate) gateway: Arc<dyn ChatGateway>,
}

impl Storefront {
    /// Wire the storefront over its collaborators.
    pub fn new(
        config: Arc<CorsoConfig>,
        repository: Arc<UserRepository>,
        ledger: PurchaseLedger,
        gateway: Arc<dyn ChatGateway>,
    ) -> Self {
        Self {
            config,
            repository,
            ledger,
            gateway,
        }
    }

    /// Handle one inbound event.
    ///
    /// Never fails: validation faults are answered with usage text, delivery
    /// faults are logged, storage faults are absorbed by the store layer.
    #[instrument(skip(self, event), fields(user = %event.user))]
    pub async fn handle(&self, event: InboundEvent) {
        match event.kind.clone() {
            EventKind::Command { name, args } => self.handle_command(&event, &name, &args).await,
            EventKind::Text(text) => self.handle_text(&event, &text).await,
            EventKind::Callback(token) => self.handle_callback(&event, &token).await,
        }
    }

    async fn handle_command(&self, event: &InboundEvent, name: &str, args: &[String]) {
        match name {
            "start" => self.on_start(event).await,
            "help" => {
                let locale = self.repository.get_locale(event.user).await;
                self.reply(
                    event.user,
                    OutboundMessage::text(texts::help_text())
                        .with_keyboard(keyboard::main_menu(locale)),
                )
                .await;
            }
            "approve" | "deny" | "broadcast" => {
                self.handle_operator_command(event.user, name, args).await;
            }
            other => {
                let fault =
                    CommandError::new(CommandErrorKind::UnknownCommand(other.to_string())).into();
                self.reply(event.user, OutboundMessage::text(texts::fault(&fault)))
                    .await;
            }
        }
    }

    async fn on_start(&self, event: &InboundEvent) {
        let record = self.repository.record_start(event.user, &event.profile).await;
        let locale = self.locale_of(&record);
        info!(user = %event.user, "New session started");

        self.reply(
            event.user,
            OutboundMessage::markdown(texts::welcome(locale))
                .with_keyboard(keyboard::main_menu(locale)),
        )
        .await;
        self.reply(
            event.user,
            OutboundMessage::text(texts::choose_locale(locale))
                .with_keyboard(keyboard::locale_chooser()),
        )
        .await;

        self.notify_operator(texts::operator_new_user(&texts::user_brief(
            event.user, &record,
        )))
        .await;
    }

    async fn handle_text(&self, event: &InboundEvent, text: &str) {
        let record = self
            .repository
            .record_message(event.user, &event.profile, text)
            .await;
        let locale = self.locale_of(&record);

        if text == texts::MENU_LANGUAGE {
            self.reply(
                event.user,
                OutboundMessage::text(texts::choose_locale(locale))
                    .with_keyboard(keyboard::locale_chooser()),
            )
            .await;
            return;
        }

        if text == texts::menu_courses(locale) {
            self.reply(
                event.user,
                OutboundMessage::markdown(texts::courses(locale, &self.config.site_url))
                    .with_keyboard(keyboard::main_menu(locale)),
            )
            .await;
            return;
        }

        if text == texts::menu_buy(locale) {
            self.reply(
                event.user,
                OutboundMessage::markdown(texts::buy_title(locale))
                    .with_keyboard(keyboard::main_menu(locale)),
            )
            .await;
            self.reply(
                event.user,
                OutboundMessage::text(texts::choose_plan_below(locale))
                    .with_keyboard(keyboard::plan_chooser(&self.config.site_url)),
            )
            .await;
            self.notify_operator(texts::operator_opened_buy(&texts::user_brief(
                event.user, &record,
            )))
            .await;
            return;
        }

        if text == texts::menu_account(locale) {
            let approved = PurchaseLedger::approved_in(&record)
                .map(|plan| (plan, self.config.plans.offer(plan)));
            self.reply(
                event.user,
                OutboundMessage::markdown(texts::account(
                    locale,
                    event.user,
                    &record,
                    approved,
                    &self.config.site_url,
                ))
                .with_keyboard(keyboard::main_menu(locale)),
            )
            .await;
            return;
        }

        if text == texts::menu_support(locale) {
            self.reply(
                event.user,
                OutboundMessage::markdown(texts::support(
                    locale,
                    &self.config.support,
                    &self.config.site_url,
                ))
                .with_keyboard(keyboard::main_menu(locale)),
            )
            .await;
            return;
        }

        // Access gate for anything that is not a menu action. Derived access
        // is recomputed from the record on every read, never cached.
        if PurchaseLedger::approved_in(&record).is_some() {
            self.reply(
                event.user,
                OutboundMessage::text(texts::access_active(locale))
                    .with_keyboard(keyboard::main_menu(locale)),
            )
            .await;
        } else {
            self.reply(
                event.user,
                OutboundMessage::markdown(texts::no_access(locale, &self.config.site_url))
                    .with_keyboard(keyboard::main_menu(locale)),
            )
            .await;
        }
    }

    async fn handle_callback(&self, event: &InboundEvent, raw: &str) {
        let token = match CallbackToken::parse(raw) {
            Ok(token) => token,
            Err(e) => {
                self.reply(event.user, OutboundMessage::text(texts::fault(&e)))
                    .await;
                return;
            }
        };

        match token {
            CallbackToken::SetLocale(code) => {
                let locale = self.repository.set_locale(event.user, &code).await;
                self.reply(
                    event.user,
                    OutboundMessage::text(texts::locale_set(locale))
                        .with_keyboard(keyboard::main_menu(locale)),
                )
                .await;
            }
            CallbackToken::SelectPlan(plan) => {
                let record = self
                    .repository
                    .record_plan_selection(event.user, plan)
                    .await;
                let locale = self.locale_of(&record);
                let offer = self.config.plans.offer(plan);
                self.reply(
                    event.user,
                    OutboundMessage::markdown(texts::plan_details(locale, offer))
                        .with_keyboard(keyboard::payment(plan, &self.config.site_url)),
                )
                .await;
                self.notify_operator(texts::operator_selected_plan(
                    &texts::user_brief(event.user, &record),
                    plan,
                    offer,
                ))
                .await;
            }
            CallbackToken::Paid(plan) => self.on_paid(event, plan).await,
        }
    }

    async fn on_paid(&self, event: &InboundEvent, plan: Plan) {
        self.ledger.request(event.user, plan).await;

        let record = self.repository.get(event.user).await;
        let locale = self.locale_of(&record);
        self.reply(
            event.user,
            OutboundMessage::text(texts::request_received(locale, &self.config.site_url)),
        )
        .await;

        self.notify_operator(texts::operator_new_request(
            &texts::user_brief(event.user, &record),
            event.user,
            plan,
            self.config.plans.offer(plan),
        ))
        .await;
    }

    pub(crate) fn locale_of(&self, record: &UserRecord) -> Locale {
        Locale::resolve(record.locale.as_deref(), self.config.default_locale)
    }

    /// Best-effort reply to a user; a failed delivery is logged, not raised.
    pub(crate) async fn reply(&self, user: UserId, message: OutboundMessage) -> bool {
        deliver_best_effort(self.gateway.as_ref(), user, message).await
    }

    /// Best-effort notification to the configured operator, if any.
    pub(crate) async fn notify_operator(&self, text: String) {
        if let Some(operator) = self.config.operator_id {
            self.reply(operator, OutboundMessage::markdown(text)).await;
        }
    }
}
