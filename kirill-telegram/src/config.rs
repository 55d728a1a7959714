//! Framework-minimal config: token, API URL, log path.
//! Loaded from environment variables BOT_TOKEN, TELEGRAM_API_URL, LOG_FILE.

use anyhow::Result;
use std::env;

/// Minimal Telegram connectivity config (token, optional API URL override, log path).
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from environment: BOT_TOKEN is required (startup-fatal when missing);
    /// TELEGRAM_API_URL (or TELOXIDE_API_URL) and LOG_FILE are optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Constructs with the given token, everything else unset.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_token() {
        env::remove_var("BOT_TOKEN");
        assert!(TelegramConfig::from_env().is_err());

        env::set_var("BOT_TOKEN", "test_token");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
        env::remove_var("LOG_FILE");
        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        env::remove_var("BOT_TOKEN");
    }

    #[test]
    #[serial]
    fn test_from_env_reads_optional_overrides() {
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("TELEGRAM_API_URL", "http://localhost:8081");
        env::set_var("LOG_FILE", "logs/kirill.log");
        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(
            config.telegram_api_url,
            Some("http://localhost:8081".to_string())
        );
        assert_eq!(config.log_file, Some("logs/kirill.log".to_string()));
        env::remove_var("BOT_TOKEN");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("LOG_FILE");
    }
}
