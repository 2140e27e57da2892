//! Outbound messaging gateway trait and message types.

use corso_core::UserId;
use corso_error::CorsoResult;

/// What pressing an inline button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Deliver an opaque `action:value` token back as a callback event
    Callback(String),
    /// Open a URL
    Url(String),
}

/// One inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    /// Button label
    pub label: String,
    /// Button behavior
    pub action: ButtonAction,
}

impl InlineButton {
    /// A button that emits a callback token.
    pub fn callback(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(token.into()),
        }
    }

    /// A button that opens a URL.
    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url.into()),
        }
    }
}

/// Keyboard markup attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Persistent reply keyboard: rows of plain labels echoed back as text
    Reply(Vec<Vec<String>>),
    /// Inline keyboard: rows of callback/url buttons
    Inline(Vec<Vec<InlineButton>>),
}

/// An outbound chat message: text plus optional keyboard markup.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    /// Message body
    pub text: String,
    /// Optional keyboard markup
    pub keyboard: Option<Keyboard>,
    /// Whether the body uses markdown emphasis
    pub markdown: bool,
}

impl OutboundMessage {
    /// A plain text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            markdown: false,
        }
    }

    /// A markdown-formatted message.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            markdown: true,
        }
    }

    /// Attach keyboard markup.
    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Trait for the external messaging gateway.
///
/// The transport (long polling, webhooks, a local console) lives entirely
/// behind this seam; the storefront only ever asks it to send a message to a
/// user id.
#[async_trait::async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send a message to a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is unreachable or the gateway rejects
    /// the send. Callers treat this as advisory and never roll back state.
    async fn send(&self, user: UserId, message: OutboundMessage) -> CorsoResult<()>;
}
