use reqwest::blocking::Client;
use serde::Deserialize;

use super::{MessageTransport, OutgoingMessage, TransportError};
use crate::models::settings::{TelegramConfig, MIN_TELEGRAM_TIMEOUT_SECS};

/// Longest slice of an unexpected response body kept for diagnostics.
const MAX_BODY_EXCERPT: usize = 200;

/// Sends messages through the Telegram Bot API `sendMessage` method.
pub struct TelegramTransport {
    client: Client,
    api_base: String,
}

/// Response envelope every Bot API method returns.
#[derive(Debug, Deserialize)]
struct TelegramEnvelope {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<serde_json::Value>,
}

impl TelegramTransport {
    pub fn new(config: &TelegramConfig) -> Result<Self, TransportError> {
        if config.timeout_secs < MIN_TELEGRAM_TIMEOUT_SECS {
            log::warn!(
                "Telegram timeout_secs = {} is too short, using {}s",
                config.timeout_secs,
                MIN_TELEGRAM_TIMEOUT_SECS
            );
        }
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, bot_token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, bot_token)
    }
}

impl MessageTransport for TelegramTransport {
    fn send(&self, bot_token: &str, message: &OutgoingMessage) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.endpoint(bot_token))
            .json(message)
            .send()
            // The URL carries the bot token.
            .map_err(|err| TransportError::Request(err.without_url()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| TransportError::Request(err.without_url()))?;

        interpret_response(status, &body)
    }
}

/// Decide whether a `sendMessage` reply means the message was delivered.
fn interpret_response(status: u16, body: &str) -> Result<(), TransportError> {
    let envelope = serde_json::from_str::<TelegramEnvelope>(body);

    if !(200..300).contains(&status) {
        let description = envelope
            .ok()
            .and_then(|env| env.description)
            .unwrap_or_else(|| excerpt(body));
        return Err(TransportError::Status {
            status,
            description,
        });
    }

    let envelope = envelope.map_err(|err| TransportError::InvalidResponse(err.to_string()))?;
    if !envelope.ok {
        return Err(TransportError::Rejected(
            envelope
                .description
                .unwrap_or_else(|| "no description".to_string()),
        ));
    }

    if envelope.result.is_none() {
        log::debug!("Telegram accepted the message without a result payload");
    }
    Ok(())
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_BODY_EXCERPT {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(MAX_BODY_EXCERPT).collect();
    format!("{}…", cut)
}
