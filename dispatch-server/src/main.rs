use std::net::SocketAddr;

use dispatch_server::{AppState, Config, logger, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    logger::init_logger();

    // 2. Configuration
    let config = Config::from_env();

    // 3. Backend selection + handler state
    let state = AppState::from_config(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!(
        %addr,
        mode = state.backend.mode(),
        "Dispatch server starting"
    );

    // 4. Serve until ctrl-c
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}
