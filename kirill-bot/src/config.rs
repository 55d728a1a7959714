//! Bot config: Telegram connectivity plus transliteration policy knobs.
//! Loaded from env: BOT_TOKEN (required), TRANSLIT_MODE, DROP_STALE,
//! TELEGRAM_API_URL, LOG_FILE.

use anyhow::{Context, Result};
use kirill_telegram::TelegramConfig;
use std::env;
use translit::ScriptFilter;

pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// Which script content a message must have to be converted.
    pub script: ScriptFilter,
    /// Drop messages sent before the service started (backlog on reconnect).
    pub drop_stale: bool,
}

impl BotConfig {
    /// Loads config from environment. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = match token {
            Some(bot_token) => TelegramConfig {
                bot_token,
                telegram_api_url: env::var("TELEGRAM_API_URL")
                    .or_else(|_| env::var("TELOXIDE_API_URL"))
                    .ok(),
                log_file: env::var("LOG_FILE").ok(),
            },
            None => TelegramConfig::from_env()?,
        };

        let script = match env::var("TRANSLIT_MODE") {
            Ok(mode) => mode
                .parse::<ScriptFilter>()
                .with_context(|| format!("Invalid TRANSLIT_MODE {mode:?}"))?,
            Err(_) => ScriptFilter::default(),
        };

        let drop_stale = env::var("DROP_STALE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);

        Ok(Self {
            telegram,
            script,
            drop_stale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_with_defaults() {
        env::set_var("BOT_TOKEN", "test_token");
        env::remove_var("TRANSLIT_MODE");
        env::remove_var("DROP_STALE");

        let config = BotConfig::load(None).unwrap();
        assert_eq!(config.telegram.bot_token, "test_token");
        assert_eq!(config.script, ScriptFilter::Any);
        assert!(!config.drop_stale);

        env::remove_var("BOT_TOKEN");
    }

    #[test]
    #[serial]
    fn test_token_argument_overrides_env() {
        env::remove_var("BOT_TOKEN");
        let config = BotConfig::load(Some("cli_token".to_string())).unwrap();
        assert_eq!(config.telegram.bot_token, "cli_token");
    }

    #[test]
    #[serial]
    fn test_load_reads_policy_knobs() {
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("TRANSLIT_MODE", "latin-only");
        env::set_var("DROP_STALE", "true");

        let config = BotConfig::load(None).unwrap();
        assert_eq!(config.script, ScriptFilter::LatinOnly);
        assert!(config.drop_stale);

        env::remove_var("BOT_TOKEN");
        env::remove_var("TRANSLIT_MODE");
        env::remove_var("DROP_STALE");
    }

    #[test]
    #[serial]
    fn test_invalid_mode_is_rejected() {
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("TRANSLIT_MODE", "cyrillic");

        assert!(BotConfig::load(None).is_err());

        env::remove_var("BOT_TOKEN");
        env::remove_var("TRANSLIT_MODE");
    }
}
