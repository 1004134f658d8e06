use clap::Parser;
use habitz::api::HabitsApi;
use habitz::config::ServerConfig;
use habitz::error::Result;
use habitz::http::{build_router, AppState};
use habitz::store::fs::FileStore;
use habitz::store::{HabitStore, SharedStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
use args::Cli;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::resolve(cli.config.as_deref(), cli.overrides())?;
    init_tracing(config.log_json);

    let store = FileStore::new(config.db_path.clone());
    // Surface an unreadable document at startup rather than on the first request
    let existing = store.load()?;
    info!(
        path = %store.path().display(),
        habits = existing.len(),
        "habit document ready"
    );

    let shared: SharedStore = Arc::new(store);
    let state = AppState::new(HabitsApi::new(shared), config.public_dir.clone());
    let app = build_router(state);

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!(
        addr = %local,
        public_dir = %config.public_dir.display(),
        "habitz listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    info!("habitz stopped");
    Ok(())
}
