//! Server command implementation

use crate::config::BridgectlConfig;
use bridgefinder_core::prelude::*;
use bridgefinder_http::{HttpServer, HttpServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

/// Handle the serve command, running until Ctrl-C
pub async fn handle_serve_command(
    bind: Option<SocketAddr>,
    no_cors: bool,
    config: &BridgectlConfig,
) -> Result<(), CoreError> {
    let server_config = server_config(config, bind, no_cors);
    let service = Arc::new(LocalBridgeService::with_limits(config.limits.clone()));
    let server = Arc::new(HttpServer::new(server_config));

    let signal_server = server.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl-C, shutting down");
                if let Err(e) = signal_server.stop().await {
                    error!("Failed to stop server: {}", e);
                }
            }
            Err(e) => error!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    server
        .start(service)
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))
}

/// Resolve the server configuration from the file and command-line flags
fn server_config(config: &BridgectlConfig, bind: Option<SocketAddr>, no_cors: bool) -> HttpServerConfig {
    let mut server_config = config.server.clone();
    if let Some(bind) = bind {
        server_config.bind_address = bind;
    }
    if no_cors {
        server_config.enable_cors = false;
    }
    server_config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_overrides() {
        let config = BridgectlConfig::default();

        let resolved = server_config(&config, None, false);
        assert_eq!(resolved, config.server);

        let bind: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        let resolved = server_config(&config, Some(bind), true);
        assert_eq!(resolved.bind_address, bind);
        assert!(!resolved.enable_cors);
        assert_eq!(resolved.request_timeout, config.server.request_timeout);
    }
}
