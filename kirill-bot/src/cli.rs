//! CLI parser: run the bot, or convert text locally without Telegram.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kirill")]
#[command(about = "Uzbek Latin to Cyrillic transliteration bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Convert text locally and print the result; no Telegram involved.
    Convert {
        /// Text to transliterate.
        text: String,
        /// Script filter: latin-only, require-latin or all.
        #[arg(short, long, default_value = "all")]
        mode: String,
    },
}
