/// Bot exchange module
///
/// One round-trip per user submission: the text plus the last-known opaque
/// continuation token go out, a new token plus an ordered list of bot
/// utterances come back.
///
/// # Architecture
///
/// - `client` - Wire types, the `BotBackend` trait, and the reqwest-based
///   `HttpBackend`
/// - `session` - `ChatSession` state machine that owns the token lifecycle
mod client;
mod session;

// Re-export main types
pub use client::{BotBackend, BotError, BotReply, BotResult, HttpBackend};
pub use session::{ChatSession, SessionHandle, SessionState};
