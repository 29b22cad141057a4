use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ri-utilizziamo le funzioni e strutture definite in lib.rs
use postino_server::{build_sqlite_url, connect_pool, routes, run_migrations, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // log su stdout, filtro da RUST_LOG (default: info)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Costruisci l'URL del database SQLite
    let db_url = build_sqlite_url().context("build sqlite DATABASE_URL")?;
    tracing::info!(%db_url, "using DATABASE_URL");
    // Connetti al database
    let pool = connect_pool(&db_url).await.context("connect to sqlite")?;
    // Esegui le migrazioni del database
    run_migrations(&pool).await.context("run migrations")?;
    // Crea lo stato dell'applicazione condiviso
    let state = Arc::new(AppState { pool });
    // Configura le rotte dell'applicazione
    let app = routes::router(state);
    // Ottieni l'indirizzo di binding dal env o usa il default
    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let addr: SocketAddr = bind.parse().context("parse BIND_ADDR")?;
    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind tcp listener")?;
    // Avvia il server Axum
    axum::serve(listener, app.into_make_service())
        .await
        .context("server shutdown")?;

    Ok(())
}
