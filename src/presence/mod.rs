//! Client side of the typing indicator.
//!
//! The server keeps a single `typing` boolean per post. A composer writes it
//! whenever its comment box flips between empty and non-empty; viewers poll
//! it on a fixed interval. There is no session identity and no expiry: last
//! write wins and a flag left `true` stays `true` until someone clears it.

mod client;
mod composer;
mod state;
mod watcher;

use std::time::Duration;

pub use client::PresenceClient;
pub use composer::TypingComposer;
pub use state::TypingState;
pub use watcher::{TypingWatcher, MIN_INTERVAL};

pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("post #{0} does not exist")]
    NoSuchPost(i64),
}

/// Whether a viewer shows "someone is typing": its own composer is active or
/// the last polled server value says so.
pub fn someone_typing(local: TypingState, remote: bool) -> bool {
    local.is_active() || remote
}
