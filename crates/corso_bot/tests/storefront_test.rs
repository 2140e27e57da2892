//! Tests for inbound event routing.

mod common;

use common::{OPERATOR, fixture};
use corso_bot::{ButtonAction, InboundEvent, Keyboard};
use corso_core::{Locale, Plan, ProfilePatch, PurchaseStatus, UserId};

#[tokio::test]
async fn start_records_the_profile_and_greets() {
    let f = fixture();
    let user = UserId(1);

    let event = InboundEvent::from_text(user, "/start").with_profile(ProfilePatch {
        first_name: Some("Aziz".to_string()),
        handle: Some("aziz_tj".to_string()),
        ..ProfilePatch::default()
    });
    f.storefront.handle(event).await;

    let record = f.repository.get(user).await;
    assert_eq!(record.first_name.as_deref(), Some("Aziz"));
    assert!(record.started_at.is_some());

    let to_user = f.gateway.attempts_to(user);
    assert!(to_user.len() >= 2);
    assert!(to_user[0].text.contains("Corso"));

    let to_operator = f.gateway.attempts_to(OPERATOR);
    assert!(to_operator.iter().any(|m| m.text.contains("/start")));
    assert!(to_operator.iter().any(|m| m.text.contains("aziz_tj")));
}

#[tokio::test]
async fn paid_callback_requests_and_hints_the_operator_commands() {
    let f = fixture();
    let user = UserId(2);

    f.storefront
        .handle(InboundEvent::callback(user, "paid:VIP"))
        .await;

    assert_eq!(
        f.ledger.status(user, Plan::Vip).await,
        PurchaseStatus::Requested
    );
    assert!(!f.ledger.has_access(user).await);

    let to_user = f.gateway.attempts_to(user);
    assert!(to_user.iter().any(|m| m.text.contains("Заявка отправлена")));

    let to_operator = f.gateway.attempts_to(OPERATOR);
    let hint = to_operator
        .iter()
        .find(|m| m.text.contains("Новая заявка"))
        .unwrap();
    assert!(hint.text.contains("/approve 2 VIP"));
    assert!(hint.text.contains("/deny 2 VIP"));
}

#[tokio::test]
async fn plan_callback_records_the_selection_and_offers_payment() {
    let f = fixture();
    let user = UserId(3);

    f.storefront
        .handle(InboundEvent::callback(user, "plan:PRO"))
        .await;

    let record = f.repository.get(user).await;
    assert_eq!(record.last_selected_plan, Some(Plan::Pro));
    assert!(record.last_selected_plan_at.is_some());
    // Selecting a plan is not a purchase request.
    assert_eq!(
        f.ledger.status(user, Plan::Pro).await,
        PurchaseStatus::None
    );

    let to_user = f.gateway.attempts_to(user);
    let details = to_user.last().unwrap();
    assert!(details.text.contains("249"));
    let Some(Keyboard::Inline(rows)) = &details.keyboard else {
        panic!("plan details should carry the payment keyboard");
    };
    assert!(rows.iter().flatten().any(|button| matches!(
        &button.action,
        ButtonAction::Callback(token) if token == "paid:PRO"
    )));
}

#[tokio::test]
async fn locale_callback_persists_and_switches_the_reply_language() {
    let f = fixture();
    let user = UserId(4);

    f.storefront
        .handle(InboundEvent::callback(user, "lang:tj"))
        .await;

    assert_eq!(f.repository.get_locale(user).await, Locale::Tj);
    let to_user = f.gateway.attempts_to(user);
    assert!(to_user.last().unwrap().text.contains("Тоҷикӣ"));

    // Unsupported input coerces to the default instead of being rejected.
    f.storefront
        .handle(InboundEvent::callback(user, "lang:xx"))
        .await;
    assert_eq!(f.repository.get_locale(user).await, Locale::Ru);
}

#[tokio::test]
async fn free_text_is_gated_until_a_plan_is_approved() {
    let f = fixture();
    let user = UserId(5);

    f.storefront
        .handle(InboundEvent::from_text(user, "show me the lessons"))
        .await;
    let to_user = f.gateway.attempts_to(user);
    assert!(to_user.last().unwrap().text.contains("после покупки"));

    f.storefront
        .handle(InboundEvent::callback(user, "paid:BASIC"))
        .await;
    f.storefront
        .handle(InboundEvent::from_text(OPERATOR, "/approve 5 BASIC"))
        .await;

    f.storefront
        .handle(InboundEvent::from_text(user, "show me the lessons"))
        .await;
    let to_user = f.gateway.attempts_to(user);
    assert!(to_user.last().unwrap().text.contains("Доступ активен"));

    let record = f.repository.get(user).await;
    assert_eq!(record.last_message.as_deref(), Some("show me the lessons"));
}

#[tokio::test]
async fn buy_menu_shows_the_plan_chooser_and_notifies_the_operator() {
    let f = fixture();
    let user = UserId(6);

    f.storefront
        .handle(InboundEvent::from_text(user, "💳 Купить доступ"))
        .await;

    let to_user = f.gateway.attempts_to(user);
    let chooser = to_user.last().unwrap();
    let Some(Keyboard::Inline(rows)) = &chooser.keyboard else {
        panic!("buy flow should end with the inline plan chooser");
    };
    let tokens: Vec<_> = rows
        .iter()
        .flatten()
        .filter_map(|button| match &button.action {
            ButtonAction::Callback(token) => Some(token.as_str()),
            ButtonAction::Url(_) => None,
        })
        .collect();
    assert_eq!(tokens, ["plan:BASIC", "plan:PRO", "plan:VIP"]);

    let to_operator = f.gateway.attempts_to(OPERATOR);
    assert!(to_operator.iter().any(|m| m.text.contains("Открыл покупку")));
}

#[tokio::test]
async fn account_menu_reflects_the_highest_approved_plan() {
    let f = fixture();
    let user = UserId(7);

    f.storefront
        .handle(InboundEvent::callback(user, "paid:PRO"))
        .await;
    f.storefront
        .handle(InboundEvent::from_text(OPERATOR, "/approve 7 PRO"))
        .await;

    f.storefront
        .handle(InboundEvent::from_text(user, "📊 Мой аккаунт"))
        .await;

    let to_user = f.gateway.attempts_to(user);
    let account = to_user.last().unwrap();
    assert!(account.text.contains("PRO"));
    assert!(account.text.contains("доступ открыт"));
}

#[tokio::test]
async fn malformed_callback_tokens_change_nothing() {
    let f = fixture();
    let user = UserId(8);

    f.storefront
        .handle(InboundEvent::callback(user, "paid:GOLD"))
        .await;
    f.storefront
        .handle(InboundEvent::callback(user, "gibberish"))
        .await;

    let record = f.repository.get(user).await;
    assert!(record.purchases.is_empty());
    let to_user = f.gateway.attempts_to(user);
    assert_eq!(to_user.len(), 2);
}

#[tokio::test]
async fn unknown_commands_point_at_help() {
    let f = fixture();
    let user = UserId(9);

    f.storefront
        .handle(InboundEvent::from_text(user, "/frobnicate now"))
        .await;

    let to_user = f.gateway.attempts_to(user);
    assert!(to_user.last().unwrap().text.contains("/help"));
}
