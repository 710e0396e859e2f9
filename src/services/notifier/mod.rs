//! RSVP notifier.
//!
//! Formats a guest's answer and relays it to the couple's Telegram chat in a
//! single request. Retrying is left to the guest (they resubmit the form).

mod message;
mod telegram;

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::models::rsvp::RsvpResponse;
use crate::models::settings::TelegramConfig;

pub use message::{
    escape_html, format_message, ATTENDING_NO, ATTENDING_YES, COMPANION_NO,
    COMPANION_NOT_APPLICABLE, COMPANION_YES,
};
pub use telegram::TelegramTransport;

/// Body of a `sendMessage` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: &'static str,
}

impl OutgoingMessage {
    pub fn html(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: "HTML",
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Endpoint returned HTTP {status}: {description}")]
    Status { status: u16, description: String },
    #[error("Endpoint rejected the message: {0}")]
    Rejected(String),
    #[error("Unreadable endpoint response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Messaging credentials not configured (missing: {missing})")]
    Configuration { missing: String },
    #[error("Failed to deliver RSVP: {0}")]
    Transport(#[from] TransportError),
}

/// Delivers one prepared message. Implemented by the Telegram client and by
/// fakes in tests.
#[cfg_attr(test, mockall::automock)]
pub trait MessageTransport: Send + Sync {
    fn send(&self, bot_token: &str, message: &OutgoingMessage) -> Result<(), TransportError>;
}

/// Sends RSVP summaries using an explicit configuration and transport.
#[derive(Clone)]
pub struct Notifier {
    config: TelegramConfig,
    transport: Arc<dyn MessageTransport>,
}

impl Notifier {
    pub fn new(config: TelegramConfig, transport: Arc<dyn MessageTransport>) -> Self {
        Self { config, transport }
    }

    /// Notifier backed by the real Telegram Bot API.
    pub fn telegram(config: TelegramConfig) -> Result<Self, TransportError> {
        let transport = TelegramTransport::new(&config)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn is_configured(&self) -> bool {
        self.config.credentials().is_some()
    }

    /// Format and send one RSVP. Credentials are checked before anything is
    /// sent; exactly one transport call is made otherwise.
    pub fn notify(&self, response: &RsvpResponse) -> Result<(), NotifyError> {
        let credentials = self
            .config
            .credentials()
            .ok_or_else(|| NotifyError::Configuration {
                missing: self.config.missing_fields().join(", "),
            })?;

        let message = OutgoingMessage::html(credentials.chat_id, format_message(response));
        self.transport.send(credentials.bot_token, &message)?;

        log::info!("RSVP from {} delivered", response.full_name());
        Ok(())
    }
}
