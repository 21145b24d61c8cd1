use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "quillpost")]
#[command(about = "Blog API and frontend with a polled typing indicator")]
pub struct Config {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://quillpost.db?mode=rwc")]
    pub database_url: String,

    /// Address the server listens on
    #[arg(long, env = "QUILLPOST_BIND", default_value = "0.0.0.0:3001")]
    pub bind: String,

    #[arg(long, env = "QUILLPOST_MAX_CONNECTIONS", default_value_t = 16)]
    pub max_connections: u32,
}

impl Config {
    /// `.env` first, then flags and the process environment.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::parse()
    }
}

pub fn init_tracing(default_directives: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives.into())
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::parse_from([
            "quillpost",
            "--database-url", "sqlite::memory:",
            "--bind", "127.0.0.1:0",
            "--max-connections", "1",
        ]);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind, "127.0.0.1:0");
        assert_eq!(config.max_connections, 1);
    }
}
