//! Analyze command implementation

use crate::client::BridgeClient;
use crate::config::BridgectlConfig;
use crate::input::{read_graph_file, CsvOptions};
use crate::output;
use bridgefinder_core::prelude::*;
use bridgefinder_http::ApiResponse;
use std::path::Path;
use tracing::info;

/// Handle the analyze command
pub async fn handle_analyze_command(
    file: &Path,
    options: CsvOptions,
    remote: bool,
    quiet: bool,
    config: &BridgectlConfig,
) -> Result<(), CoreError> {
    let request = read_graph_file(file, &options)?;

    let report = if remote {
        info!("Sending graph to {}", config.endpoint);
        analyze_remote(config, &request).await?
    } else {
        let service = LocalBridgeService::with_limits(config.limits.clone());
        service.analyze(request).await?
    };

    info!(
        "Found {} bridges in {} nodes / {} edges",
        report.bridges.len(),
        report.node_count,
        report.edge_count
    );

    if !quiet {
        output::display_report(&report, &config.default_format)?;
    }
    Ok(())
}

async fn analyze_remote(config: &BridgectlConfig, request: &GraphRequest) -> Result<BridgeReport, CoreError> {
    let client = BridgeClient::new(config.clone())?;
    let response = client.post("/v1/bridges", request).await?;
    let body: ApiResponse<BridgeReport> = client.handle_response(response).await?;

    body.data
        .ok_or_else(|| CoreError::Internal(body.error.unwrap_or_else(|| "Empty analysis response".to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgefinder_http::{HttpServer, HttpServerConfig};
    use std::io::Write;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tempfile::Builder;

    /// Serve the real router on an ephemeral local port
    async fn spawn_server() -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = HttpServer::new(HttpServerConfig::default())
            .router(Arc::new(LocalBridgeService::new()));

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn remote_config(addr: SocketAddr) -> BridgectlConfig {
        BridgectlConfig {
            endpoint: format!("http://{}", addr),
            timeout: 5,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_analyze_local_csv() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "0,1\n1,2\n2,0\n2,3").unwrap();

        let result = handle_analyze_command(
            file.path(),
            CsvOptions::default(),
            false,
            true,
            &BridgectlConfig::default(),
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_analyze_remote_report() {
        let config = remote_config(spawn_server().await);
        let request = GraphRequest::new(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);

        let report = analyze_remote(&config, &request).await.unwrap();
        assert_eq!(report.bridges, vec![Edge(2, 3)]);
        assert_eq!(report.node_count, 4);
        assert_eq!(report.edge_count, 4);
        assert_eq!(report.component_count, 1);
    }

    #[tokio::test]
    async fn test_analyze_remote_rejected_graph() {
        let config = remote_config(spawn_server().await);

        let err = analyze_remote(&config, &GraphRequest::new(2, [(0, 5)]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Rejected graph"));
    }

    #[tokio::test]
    async fn test_analyze_command_remote_csv() {
        let config = remote_config(spawn_server().await);
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "0,1\n1,2").unwrap();

        let result = handle_analyze_command(file.path(), CsvOptions::default(), true, true, &config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_analyze_local_rejects_out_of_range() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"nodes": 2, "edges": [[0, 5]]}}"#).unwrap();

        let result = handle_analyze_command(
            file.path(),
            CsvOptions::default(),
            false,
            true,
            &BridgectlConfig::default(),
        )
        .await;
        assert!(matches!(
            result,
            Err(CoreError::Graph(GraphError::EndpointOutOfRange { .. }))
        ));
    }
}
