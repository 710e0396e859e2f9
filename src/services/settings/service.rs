use crate::models::settings::AppConfig;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads the app configuration from a TOML file and the environment.
pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    /// Use an explicit config file, or the per-user default when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.or_else(default_config_path),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the config file (if any) and apply environment overrides.
    ///
    /// A missing file is not an error: the built-in event details are used
    /// and credentials may still come from the environment.
    pub fn load(&self) -> Result<AppConfig, SettingsError> {
        let mut config = match &self.path {
            Some(path) => load_file(path)?,
            None => {
                log::warn!("Unable to resolve config directory; using built-in settings");
                AppConfig::default()
            }
        };

        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Ken24T", "WeddingInvitation")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn load_file(path: &Path) -> Result<AppConfig, SettingsError> {
    if !path.exists() {
        log::info!(
            "No config file at {}, using built-in settings",
            path.display()
        );
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = toml::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Loaded settings from {}", path.display());
    Ok(config)
}

/// Environment values win over file values when set and non-blank.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(token) = read(ENV_BOT_TOKEN) {
        log::debug!("Telegram bot token taken from {}", ENV_BOT_TOKEN);
        config.telegram.bot_token = Some(token);
    }
    if let Some(chat_id) = read(ENV_CHAT_ID) {
        log::debug!("Telegram chat id taken from {}", ENV_CHAT_ID);
        config.telegram.chat_id = Some(chat_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::DEFAULT_TELEGRAM_API_BASE;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config(
            r#"
            [telegram]
            bot_token = "123:abc"
            chat_id = "-100200"

            [event]
            couple_names = "Anna & Oleg"
            starts_at = "2027-05-01T15:30:00"
            "#,
        );

        let config = load_file(file.path()).unwrap();
        assert_eq!(config.telegram.bot_token.as_deref(), Some("123:abc"));
        assert_eq!(config.telegram.api_base, DEFAULT_TELEGRAM_API_BASE);
        assert_eq!(config.event.couple_names, "Anna & Oleg");
        assert_eq!(config.event.starts_at.to_string(), "2027-05-01 15:30:00");
        assert_eq!(config.event.schedule.len(), 4);
    }

    #[test]
    fn test_numeric_chat_id_loads() {
        let file = write_config(
            r#"
            [telegram]
            bot_token = "123:abc"
            chat_id = -1001234567890
            "#,
        );

        let config = load_file(file.path()).unwrap();
        assert_eq!(config.telegram.chat_id.as_deref(), Some("-1001234567890"));
        assert!(config.telegram.credentials().is_some());
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let file = write_config("[telegram\nbot_token = 1");
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_env_overrides_replace_file_values() {
        let mut config = AppConfig::default();
        config.telegram.bot_token = Some("from-file".to_string());

        let env: HashMap<&str, &str> =
            [(ENV_BOT_TOKEN, "from-env"), (ENV_CHAT_ID, "777")].into_iter().collect();
        apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.telegram.bot_token.as_deref(), Some("from-env"));
        assert_eq!(config.telegram.chat_id.as_deref(), Some("777"));
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = AppConfig::default();
        config.telegram.chat_id = Some("from-file".to_string());

        apply_env_overrides(&mut config, |key| {
            (key == ENV_CHAT_ID).then(|| "  ".to_string())
        });

        assert_eq!(config.telegram.chat_id.as_deref(), Some("from-file"));
        assert!(config.telegram.bot_token.is_none());
    }
}
