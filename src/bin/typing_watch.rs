use std::time::Duration;

use clap::Parser;
use quillpost::{config, presence::{PresenceClient, TypingWatcher, POLL_INTERVAL}};

/// Follow the typing flag of one post from the terminal.
#[derive(Parser)]
#[command(name = "typing-watch")]
struct Cli {
    /// Post to watch
    post_id: i64,

    /// Base URL of the quillpost API
    #[arg(long, env = "QUILLPOST_API", default_value = "http://localhost:3001")]
    api: String,

    /// Polling interval in milliseconds
    #[arg(long, default_value_t = POLL_INTERVAL.as_millis() as u64, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    config::init_tracing("typing_watch=info,quillpost=info");
    let cli = Cli::parse();

    let client = PresenceClient::new(cli.api);
    let initial = client.typing(cli.post_id).await?;
    tracing::info!(post_id = cli.post_id, typing = initial, "watching");

    let mut watcher = TypingWatcher::spawn(
        client,
        cli.post_id,
        Duration::from_millis(cli.interval_ms),
        initial,
    );

    loop {
        tokio::select! {
            changed = watcher.changed() => match changed {
                Some(true) => tracing::info!(post_id = cli.post_id, "someone is typing"),
                Some(false) => tracing::info!(post_id = cli.post_id, "nobody is typing"),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}
