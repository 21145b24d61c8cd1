use std::time::Duration;

use tokio::{sync::watch, task::JoinHandle, time::{self, Instant, MissedTickBehavior}};

use super::PresenceClient;

pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// The reading half: polls one post's flag until dropped.
#[derive(Debug)]
pub struct TypingWatcher {
    rx: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl TypingWatcher {
    /// First poll happens one `interval` after spawning; until then the
    /// watcher reports `initial`. Intervals below [`MIN_INTERVAL`] are raised
    /// to it.
    pub fn spawn(client: PresenceClient, post_id: i64, interval: Duration, initial: bool) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        let (tx, rx) = watch::channel(initial);

        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tx.is_closed() {
                    break;
                }

                match client.typing(post_id).await {
                    Ok(typing) => {
                        let changed = tx.send_if_modified(|current| {
                            let changed = *current != typing;
                            *current = typing;
                            changed
                        });
                        if changed {
                            tracing::debug!(post_id, typing, "typing flag changed");
                        }
                    }
                    Err(err) => tracing::warn!(post_id, "typing poll failed: {err}"),
                }
            }
        });

        Self { rx, task }
    }

    /// Last successfully polled value.
    pub fn typing(&self) -> bool {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }

    /// Waits for the polled value to differ from the last one seen here.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    pub fn is_polling(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for TypingWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}
