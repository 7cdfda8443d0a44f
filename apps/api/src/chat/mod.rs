//! The resume interview chat: category prompts, the relay endpoint, and the
//! client-side stream decoding used by consumers of the relay.

pub mod categories;
pub mod client;
pub mod conversation;
pub mod decoder;
pub mod handlers;
pub mod prompts;
