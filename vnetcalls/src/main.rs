//! vnetcalls Server Entry Point

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use vnetcalls::cli::Cli;
use vnetcalls::config::LogSettings;
use vnetcalls::{http_client, logging, server, AppState};
use vnetcalls_common::config::AppSettings;
use vnetcalls_common::error::VnetResult;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match logging::init(&LogSettings::from_env()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> VnetResult<()> {
    info!("vnetcalls v{}", env!("CARGO_PKG_VERSION"));

    let mut settings = AppSettings::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut settings.server);

    // 未設定でも起動する（リクエスト時にエラー文字列として返る）
    if settings.test_request.vnet_endpoint.trim().is_empty() {
        warn!("test_request.vnet_endpoint is not configured");
    }
    if settings.test_request.non_vnet_endpoint.trim().is_empty() {
        warn!("test_request.non_vnet_endpoint is not configured");
    }
    info!(
        vnet_endpoint = %settings.test_request.vnet_endpoint,
        non_vnet_endpoint = %settings.test_request.non_vnet_endpoint,
        timeout_secs = settings.http_client.timeout_secs,
        "Loaded settings"
    );

    let client = http_client::build_client(&settings.http_client)?;
    let state = AppState::new(client, settings.test_request);

    server::run(state, &settings.server.bind_addr()).await
}
