//! Handler implementations: /start, /help, transliteration.

mod commands;
mod translit_handler;

pub use commands::{HelpHandler, StartHandler, HELP_REPLY, START_REPLY};
pub use translit_handler::TranslitHandler;
