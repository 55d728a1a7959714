//! # Handler chain
//!
//! Runs a sequence of middleware (before/after) and handlers for each message.
//! Middleware or a handler's `before` can stop the chain; the first handler that
//! returns Stop or Reply ends the handle phase; after callbacks run in reverse order.

use kirill_core::{Handler, HandlerResponse, Message, Middleware, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of middleware and handlers: middleware run in order (before), then handlers;
/// after callbacks run in reverse order with the final response.
#[derive(Clone)]
pub struct HandlerChain {
    middleware: Vec<Arc<dyn Middleware>>,
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain (no middleware, no handlers).
    pub fn new() -> Self {
        Self {
            middleware: Vec::new(),
            handlers: Vec::new(),
        }
    }

    /// Appends a middleware (runs before handlers, after in reverse).
    pub fn add_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Appends a handler (runs in order; first Stop/Reply ends the handle phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs middleware before, handler before, then handlers; after callbacks run in
    /// reverse. Returns the first Stop or Reply, or Continue.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "handler chain started"
        );

        for mw in &self.middleware {
            if !mw.before(message).await? {
                info!(
                    user_id = message.user.id,
                    middleware = std::any::type_name_of_val(mw.as_ref()),
                    "middleware stopped the chain"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        for handler in &self.handlers {
            if !handler.before(message).await? {
                info!(
                    user_id = message.user.id,
                    handler = std::any::type_name_of_val(handler.as_ref()),
                    "handler before stopped the chain"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let response = handler.handle(message).await?;
            debug!(
                handler = std::any::type_name_of_val(handler.as_ref()),
                response = ?response,
                "handler processed"
            );
            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        // After callbacks see the final response, last added first.
        for handler in self.handlers.iter().rev() {
            handler.after(message, &final_response).await?;
        }
        for mw in self.middleware.iter().rev() {
            mw.after(message, &final_response).await?;
        }

        debug!(
            user_id = message.user.id,
            message_id = %message.id,
            "handler chain finished"
        );

        Ok(final_response)
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
