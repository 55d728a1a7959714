//! REPL runner: converts teloxide messages to core messages, runs the handler chain,
//! and delivers `Reply` responses back to the originating chat.

use anyhow::Result;
use handler_chain::HandlerChain;
use kirill_core::{Bot as CoreBot, HandlerResponse, ToCoreMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapters::TelegramMessageWrapper;
use crate::bot_adapter::TelegramBotAdapter;

/// Starts the REPL with the given teloxide Bot and HandlerChain.
///
/// Each text message is converted to a core message and passed to `chain.handle`
/// in a spawned task; when the chain yields `Reply(text)` the reply is sent back
/// to the same chat. Any other response is suppressed (no empty replies).
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let sender: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = handler_chain;

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let sender = sender.clone();

        async move {
            if msg.text().is_none() {
                info!(chat_id = msg.chat.id.0, "Received non-text message, skipping");
                return Ok(());
            }

            let wrapper = TelegramMessageWrapper(&msg);
            let core_msg = wrapper.to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            // Run the chain in a spawned task so the REPL returns immediately.
            tokio::spawn(async move {
                match chain.handle(&core_msg).await {
                    Ok(HandlerResponse::Reply(text)) => {
                        if let Err(e) = sender.reply_to(&core_msg, &text).await {
                            error!(
                                error = %e,
                                chat_id = core_msg.chat.id,
                                "Failed to send reply"
                            );
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(
                            error = %e,
                            user_id = core_msg.user.id,
                            "Handler chain failed"
                        );
                    }
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
