//! axumサーバー起動・シャットダウンハンドリング

use crate::AppState;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{error, info};
use vnetcalls_common::error::VnetResult;

/// axumサーバーを起動し、シャットダウンシグナル（Ctrl+C / SIGTERM）を待機する
pub async fn run(state: AppState, bind_addr: &str) -> VnetResult<()> {
    let listener = TcpListener::bind(bind_addr).await?;

    info!("vnetcalls server listening on {}", bind_addr);

    serve(listener, state, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// バインド済みリスナーで`shutdown`が完了するまで配信する
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> VnetResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = crate::api::create_app(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
