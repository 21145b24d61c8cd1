use super::{PresenceClient, TypingState};

/// The writing half: one comment box on one post.
#[derive(Debug)]
pub struct TypingComposer {
    client: PresenceClient,
    post_id: i64,
    state: TypingState,
}

impl TypingComposer {
    pub fn new(client: PresenceClient, post_id: i64) -> Self {
        Self { client, post_id, state: TypingState::Idle }
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    /// Feed the whole box content after each edit. Returns whether the edit
    /// crossed the empty/non-empty line and so caused a write.
    pub async fn edit(&mut self, content: &str) -> bool {
        let Some(next) = self.state.transition(content) else {
            return false;
        };

        self.state = next;
        self.write().await;
        true
    }

    /// Explicit clear, e.g. after the comment was submitted. Always writes.
    pub async fn clear(&mut self) {
        self.state = TypingState::Idle;
        self.write().await;
    }

    // failures are logged and dropped, the local state stands
    async fn write(&self) {
        let typing = self.state.is_active();
        if let Err(err) = self.client.set_typing(self.post_id, typing).await {
            tracing::warn!(post_id = self.post_id, typing, "typing write failed: {err}");
        }
    }
}
