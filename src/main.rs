use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};

use xrpl_user_service::adapters::http::{build_router, AppState, RouterOptions};
use xrpl_user_service::adapters::users::{connect_pool, run_migrations, PostgresUserRepository};
use xrpl_user_service::adapters::{RedisQueueClient, XrplClient, XrplConfig, XummClient, XummConfig};
use xrpl_user_service::config::AppConfig;
use xrpl_user_service::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("invalid configuration: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = telemetry::init_tracing(&config.server) {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn Error>> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "starting xrpl-user-service"
    );

    let pool = connect_pool(&config.database)?;
    if config.database.run_migrations {
        info!("running database migrations");
        run_migrations(&pool).await?;
    }

    let users = Arc::new(PostgresUserRepository::new(pool));
    let queue = Arc::new(RedisQueueClient::from_config(&config.queue)?);
    let ledger = Arc::new(XrplClient::new(XrplConfig::from_config(&config.ledger))?);
    let signer = Arc::new(XummClient::new(XummConfig::from_config(&config.signing))?);

    let options = RouterOptions::from_config(&config.server);
    if !options.api_key.is_enabled() {
        warn!("API key guard disabled");
    }
    let app = build_router(AppState::new(users, queue, ledger, signer), options);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
