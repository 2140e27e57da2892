//! Local console session: a stdin/stdout stand-in for the messaging gateway.
//!
//! Useful for bring-up and manual testing without a live transport. Outbound
//! messages are printed with their keyboard markup; inbound lines are parsed
//! into the same events a real gateway would deliver.

use corso::{
    ButtonAction, ChatGateway, CorsoResult, InboundEvent, Keyboard, OutboundMessage, Storefront,
    UserId,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

/// Gateway that prints outbound messages to stdout.
pub struct ConsoleGateway;

#[async_trait::async_trait]
impl ChatGateway for ConsoleGateway {
    async fn send(&self, user: UserId, message: OutboundMessage) -> CorsoResult<()> {
        println!("-> {user}: {}", message.text);
        match &message.keyboard {
            Some(Keyboard::Reply(rows)) => {
                for row in rows {
                    println!("   [{}]", row.join(" | "));
                }
            }
            Some(Keyboard::Inline(rows)) => {
                for row in rows {
                    for button in row {
                        match &button.action {
                            ButtonAction::Callback(token) => {
                                println!("   ({}) -> cb {token}", button.label);
                            }
                            ButtonAction::Url(url) => {
                                println!("   ({}) -> {url}", button.label);
                            }
                        }
                    }
                }
            }
            None => {}
        }
        Ok(())
    }
}

/// Read events from stdin until EOF, handling each as its own task.
pub async fn session(storefront: Arc<Storefront>) -> CorsoResult<()> {
    println!("Corso console session.");
    println!("Lines: <user_id> <text>  |  <user_id> cb <token>  (Ctrl-D to exit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let Some(event) = parse_line(trimmed) else {
                    println!("?? expected: <user_id> <text> or <user_id> cb <token>");
                    continue;
                };
                let storefront = storefront.clone();
                tokio::spawn(async move {
                    storefront.handle(event).await;
                });
            }
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Console input closed");
                break;
            }
        }
    }
    Ok(())
}

fn parse_line(line: &str) -> Option<InboundEvent> {
    let (id, rest) = line.split_once(char::is_whitespace)?;
    let user: UserId = id.parse().ok()?;
    let rest = rest.trim();
    Some(match rest.strip_prefix("cb ") {
        Some(token) => InboundEvent::callback(user, token.trim()),
        None => InboundEvent::from_text(user, rest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use corso::EventKind;

    #[test]
    fn lines_parse_into_text_command_and_callback_events() {
        let event = parse_line("42 /start").unwrap();
        assert_eq!(event.user, UserId(42));
        assert!(matches!(event.kind, EventKind::Command { .. }));

        let event = parse_line("42 cb paid:VIP").unwrap();
        assert_eq!(event.kind, EventKind::Callback("paid:VIP".to_string()));

        let event = parse_line("42 привет").unwrap();
        assert_eq!(event.kind, EventKind::Text("привет".to_string()));
    }

    #[test]
    fn bad_lines_are_rejected() {
        assert!(parse_line("no-id-here").is_none());
        assert!(parse_line("abc /start").is_none());
    }
}
