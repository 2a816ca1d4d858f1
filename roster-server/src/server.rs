//! Process lifecycle: connect before listening, close after the listener stops.

use std::sync::Arc;

use axum::Router;
use tokio::{net::TcpListener, signal};

use crate::{
    config::ServerConfig, database::UserDatabase, errors::ServerResult, router::create_router,
    AppState,
};

/// Opens the database pool and applies migrations. Any error here is fatal.
pub async fn startup(config: &ServerConfig) -> ServerResult<Arc<UserDatabase>> {
    let db = match UserDatabase::connect(&config.database_url, config.max_connections).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(%e, "Failed to initialize database");
            return Err(e.into());
        }
    };

    if config.skip_migrations {
        tracing::info!("Skipping migrations");
    } else if let Err(e) = db.run_migrations().await {
        tracing::error!(%e, "Failed to run migrations");
        db.close().await;
        return Err(e.into());
    }

    Ok(Arc::new(db))
}

/// Closes the pool. Best effort: nothing is retried.
pub async fn shutdown(db: &UserDatabase) {
    tracing::info!("Closing database pool");
    db.close().await;
}

pub async fn serve(listener: TcpListener, app: Router) -> ServerResult<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn run(config: ServerConfig) -> ServerResult<()> {
    let db = startup(&config).await?;
    let app = create_router(AppState::new(db.clone()));

    let addr = config.bind_addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%e, %addr, "Failed to bind");
            shutdown(&db).await;
            return Err(e.into());
        }
    };

    tracing::info!("Starting roster server on {}", addr);
    let served = serve(listener, app).await;

    shutdown(&db).await;
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(%e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
