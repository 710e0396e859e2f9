mod service;

pub use service::{apply_env_overrides, SettingsError, SettingsService, ENV_BOT_TOKEN, ENV_CHAT_ID};
