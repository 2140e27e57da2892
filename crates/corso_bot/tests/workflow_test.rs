//! Tests for the operator workflow.

mod common;

use common::{OPERATOR, fixture, fixture_with};
use corso_bot::{InboundEvent, Keyboard};
use corso_core::{Plan, PurchaseStatus, UserId};

async fn user_requests(f: &common::Fixture, user: UserId, plan: Plan) {
    f.storefront
        .handle(InboundEvent::callback(user, format!("paid:{plan}")))
        .await;
}

async fn operator_says(f: &common::Fixture, text: &str) {
    f.storefront
        .handle(InboundEvent::from_text(OPERATOR, text))
        .await;
}

#[tokio::test]
async fn approve_confirms_notifies_and_delivers_group_invite() {
    let f = fixture();
    let buyer = UserId(1);

    user_requests(&f, buyer, Plan::Basic).await;
    operator_says(&f, "/approve 1 BASIC").await;

    assert_eq!(
        f.ledger.status(buyer, Plan::Basic).await,
        PurchaseStatus::Approved
    );
    assert!(f.ledger.has_access(buyer).await);

    let to_operator = f.gateway.attempts_to(OPERATOR);
    assert!(
        to_operator
            .iter()
            .any(|m| m.text.contains("Подтверждено: 1 → BASIC"))
    );

    let to_buyer = f.gateway.attempts_to(buyer);
    assert!(to_buyer.iter().any(|m| m.text.contains("Оплата подтверждена")));
    // BASIC has a configured group link; the invite arrives as a URL button.
    let invite = to_buyer
        .iter()
        .find(|m| m.text.contains("Ссылка на вашу группу"))
        .unwrap();
    assert!(matches!(invite.keyboard, Some(Keyboard::Inline(_))));
}

#[tokio::test]
async fn approve_without_group_link_skips_the_invite() {
    let f = fixture();
    let buyer = UserId(2);

    user_requests(&f, buyer, Plan::Pro).await;
    operator_says(&f, "/approve 2 PRO").await;

    assert!(f.ledger.has_access(buyer).await);
    let to_buyer = f.gateway.attempts_to(buyer);
    assert!(!to_buyer.iter().any(|m| m.text.contains("группу")));
}

#[tokio::test]
async fn deny_notifies_the_buyer_and_blocks_access() {
    let f = fixture();
    let buyer = UserId(3);

    user_requests(&f, buyer, Plan::Vip).await;
    operator_says(&f, "/deny 3 VIP").await;

    assert_eq!(
        f.ledger.status(buyer, Plan::Vip).await,
        PurchaseStatus::Denied
    );
    assert!(!f.ledger.has_access(buyer).await);

    let to_buyer = f.gateway.attempts_to(buyer);
    assert!(to_buyer.iter().any(|m| m.text.contains("отказано")));
}

#[tokio::test]
async fn unauthorized_caller_changes_nothing_and_learns_nothing() {
    let f = fixture();
    let buyer = UserId(4);
    let impostor = UserId(5);

    user_requests(&f, buyer, Plan::Basic).await;
    f.storefront
        .handle(InboundEvent::from_text(impostor, "/approve 4 BASIC"))
        .await;

    assert_eq!(
        f.ledger.status(buyer, Plan::Basic).await,
        PurchaseStatus::Requested
    );

    let to_impostor = f.gateway.attempts_to(impostor);
    assert_eq!(to_impostor.len(), 1);
    assert_eq!(to_impostor[0].text, "Нет доступа.");
}

#[tokio::test]
async fn malformed_arguments_get_usage_and_mutate_nothing() {
    let f = fixture();

    operator_says(&f, "/approve").await;
    operator_says(&f, "/approve forty BASIC").await;
    operator_says(&f, "/approve 6 GOLD").await;

    let to_operator = f.gateway.attempts_to(OPERATOR);
    assert!(to_operator.iter().any(|m| m.text.contains("Использование")));
    assert!(
        to_operator
            .iter()
            .any(|m| m.text.contains("USER_ID должен быть числом"))
    );
    assert!(
        to_operator
            .iter()
            .any(|m| m.text.contains("BASIC/PRO/VIP"))
    );
    assert_eq!(
        f.ledger.status(UserId(6), Plan::Basic).await,
        PurchaseStatus::None
    );
}

#[tokio::test]
async fn approve_without_a_pending_request_is_rejected() {
    let f = fixture();

    operator_says(&f, "/approve 7 PRO").await;

    assert_eq!(
        f.ledger.status(UserId(7), Plan::Pro).await,
        PurchaseStatus::None
    );
    let to_operator = f.gateway.attempts_to(OPERATOR);
    assert!(
        to_operator
            .iter()
            .any(|m| m.text.contains("Недопустимый переход"))
    );
}

#[tokio::test]
async fn broadcast_counts_sum_and_failures_do_not_stop_the_fan_out() {
    let f = fixture();

    // Three stored users, one of them unreachable.
    for id in [10, 11, 12] {
        f.repository
            .update(UserId(id), |record| {
                record.first_name = Some(format!("user-{id}"));
            })
            .await;
    }
    f.gateway.fail_user(UserId(11));
    let before = f.gateway.attempt_count();

    operator_says(&f, "/broadcast Начинаем новый поток!").await;

    // All three deliveries were attempted despite the failure.
    let broadcast_attempts = [10, 11, 12]
        .iter()
        .filter(|id| {
            f.gateway
                .attempts_to(UserId(**id))
                .iter()
                .any(|m| m.text == "Начинаем новый поток!")
        })
        .count();
    assert_eq!(broadcast_attempts, 3);
    assert!(f.gateway.attempt_count() > before);

    let to_operator = f.gateway.attempts_to(OPERATOR);
    assert!(
        to_operator
            .iter()
            .any(|m| m.text.contains("Отправлено: 2, ошибок: 1"))
    );
}

#[tokio::test]
async fn broadcast_without_text_gets_usage() {
    let f = fixture();
    operator_says(&f, "/broadcast").await;

    let to_operator = f.gateway.attempts_to(OPERATOR);
    assert!(
        to_operator
            .iter()
            .any(|m| m.text.contains("Использование: /broadcast"))
    );
}

#[tokio::test]
async fn open_authorization_mode_treats_any_caller_as_operator() {
    let f = fixture_with(|config| {
        config.operator_id = None;
    });
    let buyer = UserId(20);
    let passerby = UserId(21);

    user_requests(&f, buyer, Plan::Basic).await;
    f.storefront
        .handle(InboundEvent::from_text(passerby, "/approve 20 BASIC"))
        .await;

    assert!(f.ledger.has_access(buyer).await);
}
