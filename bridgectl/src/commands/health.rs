//! Health check command implementation

use crate::client::BridgeClient;
use crate::config::BridgectlConfig;
use bridgefinder_core::errors::CoreError;
use bridgefinder_http::{ApiResponse, HealthStatus};
use colored::*;
use tracing::info;

/// Handle health check command
pub async fn handle_health_command(config: &BridgectlConfig) -> Result<(), CoreError> {
    let client = BridgeClient::new(config.clone())?;

    info!("Checking BridgeFinder health at {}", config.endpoint);

    match check_health(&client).await {
        Ok(health) => {
            println!("{}", "✓ BridgeFinder is healthy".green().bold());
            println!("Status: {}", health.status.green());
            println!("Version: {}", health.version);
            println!("Timestamp: {}", health.timestamp);
            Ok(())
        }
        Err(e) => {
            println!("{}", "✗ BridgeFinder health check failed".red().bold());
            println!("Error: {}", e.to_string().red());
            Err(e)
        }
    }
}

/// Perform health check
async fn check_health(client: &BridgeClient) -> Result<HealthStatus, CoreError> {
    let response = client.get("/v1/health").await?;
    let body: ApiResponse<HealthStatus> = client.handle_response(response).await?;

    body.data
        .ok_or_else(|| CoreError::Internal(body.error.unwrap_or_else(|| "Empty health response".to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_command_without_server() {
        let config = BridgectlConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            timeout: 2,
            ..Default::default()
        };
        // nothing listens on the discard port
        let result = handle_health_command(&config).await;
        assert!(result.is_err());
    }
}
