// Settings module
// Start-up configuration: messaging credentials, event details and UI
// preferences. Loaded by `services::settings::SettingsService`.

use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_TELEGRAM_TIMEOUT_SECS: u64 = 15;
/// Zero would make every request time out before it is sent.
pub const MIN_TELEGRAM_TIMEOUT_SECS: u64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub event: EventDetails,
    pub ui: UiConfig,
}

/// Credentials and endpoint for the Telegram Bot API.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    /// Written as a string or, like the Bot API allows, a bare integer.
    #[serde(deserialize_with = "deser_chat_id")]
    pub chat_id: Option<String>,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
            timeout_secs: DEFAULT_TELEGRAM_TIMEOUT_SECS,
        }
    }
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: Some(bot_token.into()),
            chat_id: Some(chat_id.into()),
            ..Self::default()
        }
    }

    /// Token and chat id, if both are present and non-blank.
    pub fn credentials(&self) -> Option<TelegramCredentials<'_>> {
        let bot_token = non_blank(self.bot_token.as_deref())?;
        let chat_id = non_blank(self.chat_id.as_deref())?;
        Some(TelegramCredentials { bot_token, chat_id })
    }

    /// Names of the credential fields that are missing, for diagnostics.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if non_blank(self.bot_token.as_deref()).is_none() {
            missing.push("bot_token");
        }
        if non_blank(self.chat_id.as_deref()).is_none() {
            missing.push("chat_id");
        }
        missing
    }

    /// Request timeout for the Bot API, never below one second.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(MIN_TELEGRAM_TIMEOUT_SECS))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChatIdValue {
    Text(String),
    Number(i64),
}

fn deser_chat_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<ChatIdValue>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        ChatIdValue::Text(text) => text,
        ChatIdValue::Number(number) => number.to_string(),
    }))
}

// Keep the token out of logs and panic messages.
impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "***redacted***"))
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelegramCredentials<'a> {
    pub bot_token: &'a str,
    pub chat_id: &'a str,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A titled note shown on the invitation (e.g. "Instead of flowers").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialRequest {
    pub icon: String,
    pub title: String,
    pub text: String,
}

/// Everything the invitation view displays about the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    pub couple_names: String,
    pub invitation_text: String,
    /// Local wall-clock time the countdown runs to.
    pub starts_at: NaiveDateTime,
    pub rsvp_deadline: NaiveDate,
    pub schedule: Vec<String>,
    pub venue: Vec<String>,
    pub dress_code: Vec<String>,
    pub special_requests: Vec<SpecialRequest>,
    pub signature: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            couple_names: "Maxim & Polina".to_string(),
            invitation_text: "We would be delighted to share with you\none of the most important days of our lives"
                .to_string(),
            starts_at: NaiveDate::from_ymd_opt(2026, 7, 31)
                .and_then(|d| d.and_hms_opt(16, 0, 0))
                .unwrap_or_default(),
            rsvp_deadline: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap_or_default(),
            schedule: vec![
                "16:00 - Guests arrive".to_string(),
                "16:30 - Ceremony".to_string(),
                "17:00 - Welcome drinks".to_string(),
                "18:00 - Banquet".to_string(),
            ],
            venue: vec![
                "Restaurant \"Name\"".to_string(),
                "123 Address St.".to_string(),
                "Moscow".to_string(),
            ],
            dress_code: vec![
                "Cocktail attire".to_string(),
                "Men: suit".to_string(),
                "Women: cocktail dress".to_string(),
            ],
            special_requests: vec![
                SpecialRequest {
                    icon: "🍾".to_string(),
                    title: "Instead of flowers".to_string(),
                    text: "We would love a bottle of good wine\nor champagne instead of a bouquet"
                        .to_string(),
                },
                SpecialRequest {
                    icon: "👨‍👩‍👧".to_string(),
                    title: "Adults only".to_string(),
                    text: "Please leave the children at home\nThis will be an adults-only evening"
                        .to_string(),
                },
            ],
            signature: "With love, Maxim and Polina".to_string(),
        }
    }
}

impl EventDetails {
    /// Event start resolved in the local time zone.
    ///
    /// Ambiguous local times (DST fold) resolve to the earlier instant; a
    /// time skipped by a DST jump falls back to reading it as UTC.
    pub fn target_instant(&self) -> chrono::DateTime<Local> {
        Local
            .from_local_datetime(&self.starts_at)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&self.starts_at))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemePreference,
}
