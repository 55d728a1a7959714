//! Command handlers for /start and /help.

use async_trait::async_trait;
use kirill_core::{Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

pub const START_REPLY: &str = "Hello! Send me any Latin text and I will convert it to Cyrillic.";
pub const HELP_REPLY: &str =
    "Send any text written in Latin characters, and I will convert it to Cyrillic.";

/// Returns true when `content` is the given command, with or without a @botname suffix.
fn is_command(content: &str, name: &str) -> bool {
    let content = content.trim();
    content == name
        || content
            .strip_prefix(name)
            .is_some_and(|rest| rest.starts_with('@'))
}

/// Replies to /start with the greeting.
#[derive(Clone)]
pub struct StartHandler;

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !is_command(&message.content, "/start") {
            return Ok(HandlerResponse::Continue);
        }
        info!(user_id = message.user.id, "Handling /start");
        Ok(HandlerResponse::Reply(START_REPLY.to_string()))
    }
}

/// Replies to /help with usage instructions.
#[derive(Clone)]
pub struct HelpHandler;

#[async_trait]
impl Handler for HelpHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !is_command(&message.content, "/help") {
            return Ok(HandlerResponse::Continue);
        }
        info!(user_id = message.user.id, "Handling /help");
        Ok(HandlerResponse::Reply(HELP_REPLY.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_command() {
        assert!(is_command("/start", "/start"));
        assert!(is_command("/start@kirill_bot", "/start"));
        assert!(is_command("  /start ", "/start"));
        assert!(!is_command("/started", "/start"));
        assert!(!is_command("start", "/start"));
    }
}
