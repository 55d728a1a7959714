//! The transliteration handler: converts applicable Latin text and replies.

use std::sync::Arc;

use async_trait::async_trait;
use kirill_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, instrument};
use translit::Transliterator;

/// Runs the engine over each message; replies with the converted text when the
/// policy allows conversion, otherwise lets the chain continue (no reply).
#[derive(Clone)]
pub struct TranslitHandler {
    engine: Arc<Transliterator>,
}

impl TranslitHandler {
    pub fn new(engine: Arc<Transliterator>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Handler for TranslitHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match self
            .engine
            .transliterate(&message.content, Some(message.created_at))
        {
            Some(converted) => Ok(HandlerResponse::Reply(converted)),
            None => {
                debug!(
                    user_id = message.user.id,
                    "Message not applicable, continuing"
                );
                Ok(HandlerResponse::Continue)
            }
        }
    }
}
