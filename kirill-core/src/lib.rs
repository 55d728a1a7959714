//! # kirill-core
//!
//! Core types and traits for the transliteration bot: [`Bot`], [`Handler`], [`Middleware`],
//! message and user types, and tracing initialization. Transport-agnostic; used by
//! kirill-telegram and handler-chain.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, KirillError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, Middleware, ToCoreMessage,
    ToCoreUser, User,
};
