//! Inbound chat events and callback tokens.

use corso_core::{Plan, ProfilePatch, UserId};
use corso_error::{CommandError, CommandErrorKind, CorsoResult};
use std::str::FromStr;

/// What kind of inbound event arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Slash-style command with positional arguments
    Command {
        /// Command name without the leading slash
        name: String,
        /// Positional arguments
        args: Vec<String>,
    },
    /// Free text or a reply-keyboard button press
    Text(String),
    /// Opaque `action:value` token from an inline button press
    Callback(String),
}

/// One inbound chat event, as delivered by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    /// The user the event came from
    pub user: UserId,
    /// Profile fields the gateway attached, merged into the record
    pub profile: ProfilePatch,
    /// Event payload
    pub kind: EventKind,
}

impl InboundEvent {
    /// A text event, classified as a command when it starts with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use corso_bot::{EventKind, InboundEvent};
    ///
    /// let event = InboundEvent::from_text(1.into(), "/approve 42 BASIC");
    /// assert_eq!(
    ///     event.kind,
    ///     EventKind::Command {
    ///         name: "approve".to_string(),
    ///         args: vec!["42".to_string(), "BASIC".to_string()],
    ///     }
    /// );
    ///
    /// let event = InboundEvent::from_text(1.into(), "hello");
    /// assert_eq!(event.kind, EventKind::Text("hello".to_string()));
    /// ```
    pub fn from_text(user: UserId, raw: &str) -> Self {
        let raw = raw.trim();
        let kind = match raw.strip_prefix('/') {
            Some(rest) => {
                let mut parts = rest.split_whitespace();
                let name = parts.next().unwrap_or_default().to_lowercase();
                let args = parts.map(str::to_string).collect();
                EventKind::Command { name, args }
            }
            None => EventKind::Text(raw.to_string()),
        };
        Self {
            user,
            profile: ProfilePatch::default(),
            kind,
        }
    }

    /// A callback event carrying an opaque token.
    pub fn callback(user: UserId, token: impl Into<String>) -> Self {
        Self {
            user,
            profile: ProfilePatch::default(),
            kind: EventKind::Callback(token.into()),
        }
    }

    /// Attach profile fields supplied by the gateway.
    pub fn with_profile(mut self, profile: ProfilePatch) -> Self {
        self.profile = profile;
        self
    }
}

/// Parsed inline-button token.
///
/// Tokens travel as `action:value` strings; the value side of `lang:` is
/// deliberately left raw because locale coercion happens in the repository.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackToken {
    /// `lang:<code>` - explicit locale choice
    SetLocale(String),
    /// `plan:<PLAN>` - open plan details
    SelectPlan(Plan),
    /// `paid:<PLAN>` - the user reports a payment
    Paid(Plan),
}

impl CallbackToken {
    /// Parse an `action:value` token.
    ///
    /// # Errors
    ///
    /// Returns a validation fault for an unknown action or plan; no state is
    /// mutated for such tokens.
    pub fn parse(raw: &str) -> CorsoResult<Self> {
        let (action, value) = raw
            .split_once(':')
            .ok_or_else(|| CommandError::new(CommandErrorKind::UnknownCommand(raw.to_string())))?;
        match action {
            "lang" => Ok(Self::SetLocale(value.to_string())),
            "plan" => Ok(Self::SelectPlan(parse_plan(value)?)),
            "paid" => Ok(Self::Paid(parse_plan(value)?)),
            _ => Err(CommandError::new(CommandErrorKind::UnknownCommand(raw.to_string())).into()),
        }
    }
}

fn parse_plan(value: &str) -> CorsoResult<Plan> {
    Plan::from_str(value.trim())
        .map_err(|_| CommandError::new(CommandErrorKind::UnknownPlan(value.to_string())).into())
}
