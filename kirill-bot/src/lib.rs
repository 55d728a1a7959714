//! # kirill-bot
//!
//! The transliteration bot itself: command and transliteration handlers, logging
//! middleware, config, chain assembly, and the `kirill` CLI binary.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use handlers::{HelpHandler, StartHandler, TranslitHandler, HELP_REPLY, START_REPLY};
pub use middleware::LoggingMiddleware;
pub use runner::{build_engine, build_handler_chain, run_bot};
