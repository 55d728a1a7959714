//! kirill: Telegram bot converting Latin-script Uzbek text to Cyrillic, plus a
//! local convert command. Config from env and optional CLI args.

use anyhow::{Context, Result};
use clap::Parser;
use kirill_bot::{run_bot, BotConfig, Cli, Commands};
use translit::{Policy, ScriptFilter, Transliterator};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Convert { text, mode } => handle_convert(&text, &mode),
    }
}

/// Converts `text` to stdout using the given script filter; no Telegram involved.
fn handle_convert(text: &str, mode: &str) -> Result<()> {
    let filter = mode
        .parse::<ScriptFilter>()
        .with_context(|| format!("Invalid mode {mode:?}"))?;
    let engine = Transliterator::uzbek(Policy::with_filter(filter))?;

    match engine.transliterate(text, None) {
        Some(converted) => println!("{}", converted),
        None => eprintln!("Input not applicable under the current policy; nothing to convert."),
    }

    Ok(())
}
