//! Bot assembly and entry: config → engine → handler chain → REPL.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use handler_chain::HandlerChain;
use kirill_core::init_tracing;
use kirill_telegram::{build_bot, run_repl};
use tracing::{info, instrument};
use translit::{Policy, Transliterator};

use crate::config::BotConfig;
use crate::handlers::{HelpHandler, StartHandler, TranslitHandler};
use crate::middleware::LoggingMiddleware;

/// Builds the engine from config: the configured script filter plus, when enabled,
/// a staleness cutoff at the current instant (messages queued before startup are
/// dropped).
pub fn build_engine(config: &BotConfig) -> Result<Transliterator> {
    let mut policy = Policy::with_filter(config.script);
    if config.drop_stale {
        policy = policy.drop_older_than(Utc::now());
    }
    Ok(Transliterator::uzbek(policy)?)
}

/// Builds the handler chain: logging middleware, command handlers, then
/// transliteration.
pub fn build_handler_chain(engine: Arc<Transliterator>) -> HandlerChain {
    HandlerChain::new()
        .add_middleware(Arc::new(LoggingMiddleware))
        .add_handler(Arc::new(StartHandler))
        .add_handler(Arc::new(HelpHandler))
        .add_handler(Arc::new(TranslitHandler::new(engine)))
}

/// Main entry: init logging, build engine and chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(config.telegram.log_file.as_deref())?;

    let engine = Arc::new(build_engine(&config)?);
    info!(
        script = ?engine.policy().script,
        drop_stale = config.drop_stale,
        "Starting transliteration bot"
    );

    let chain = build_handler_chain(engine);
    let bot = build_bot(&config.telegram);

    info!("Bot started successfully");

    run_repl(bot, chain).await
}
