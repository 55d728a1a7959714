//! # kirill-telegram
//!
//! Telegram glue layer: adapters, [`kirill_core::Bot`] implementation, minimal config,
//! REPL runner. Handles only Telegram connectivity and handler-chain execution; the
//! transliteration logic itself lives in the `translit` crate.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_bot, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::run_repl;
