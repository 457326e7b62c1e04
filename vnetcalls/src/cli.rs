//! CLI module for vnetcalls

use clap::Parser;
use std::path::PathBuf;
use vnetcalls_common::config::ServerSettings;

/// vnetcalls - outbound HTTP connectivity checker for restricted networks
#[derive(Parser, Debug, Clone)]
#[command(name = "vnetcalls")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    VNETCALLS_CONFIG                          Settings file path
    VNETCALLS_HOST                            Bind address (default: 0.0.0.0)
    VNETCALLS_PORT                            Listen port (default: 8080)
    VNETCALLS_LOG_LEVEL                       Log filter (default: info)
    VNETCALLS_LOG_DIR                         Directory for rolling JSON logs
    VNETCALLS__TEST_REQUEST__VNET_ENDPOINT    URL reached through the VNet
    VNETCALLS__TEST_REQUEST__NON_VNET_ENDPOINT  URL reached outside the VNet
    VNETCALLS__HTTP_CLIENT__TIMEOUT_SECS      Outbound request timeout (default: 100, 0 = none)
"#)]
pub struct Cli {
    /// Settings file (TOML/JSON/YAML). Defaults to config/vnetcalls.* if present
    #[arg(short, long, env = "VNETCALLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bind address
    #[arg(short = 'H', long, env = "VNETCALLS_HOST")]
    pub host: Option<String>,

    /// Listen port
    #[arg(short, long, env = "VNETCALLS_PORT")]
    pub port: Option<u16>,
}

impl Cli {
    /// コマンドライン指定をサーバー設定に上書きする
    pub fn apply_overrides(&self, server: &mut ServerSettings) {
        if let Some(host) = &self.host {
            server.host = host.clone();
        }
        if let Some(port) = self.port {
            server.port = port;
        }
    }
}
