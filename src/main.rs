use quillpost::{app, config::{init_tracing, Config}, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    init_tracing("quillpost=debug,tower_http=debug");

    let db_pool = db::connect(&config.database_url, config.max_connections).await?;
    tracing::info!("database ready at {}", config.database_url);

    let app = app(AppState { db_pool });

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!("server ready at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
