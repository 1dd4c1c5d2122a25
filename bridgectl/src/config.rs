//! Configuration management for bridgectl

use crate::cli::{Cli, OutputFormat};
use bridgefinder_core::errors::CoreError;
use bridgefinder_core::types::AnalysisLimits;
use bridgefinder_http::HttpServerConfig;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the bridgectl CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgectlConfig {
    /// BridgeFinder API endpoint
    pub endpoint: String,
    /// Default output format
    pub default_format: OutputFormat,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Settings used by `bridgectl serve`
    pub server: HttpServerConfig,
    /// Size limits for analyzed graphs, local and served
    pub limits: AnalysisLimits,
}

impl Default for BridgectlConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            default_format: OutputFormat::Table,
            timeout: 30,
            server: HttpServerConfig::default(),
            limits: AnalysisLimits::default(),
        }
    }
}

impl BridgectlConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: &Option<PathBuf>) -> Result<Self, CoreError> {
        let mut figment = Figment::from(Serialized::defaults(BridgectlConfig::default()));

        // Load from default config file if it exists
        let default_config_paths = [
            "bridgectl.yaml",
            "bridgectl.yml",
            ".bridgectl.yaml",
            ".bridgectl.yml",
        ];

        if let Some(path) = default_config_paths.iter().find(|p| Path::new(p).exists()) {
            figment = figment.merge(Yaml::file(path));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Yaml::file(path));
            } else {
                return Err(CoreError::Configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
        }

        // Load from environment variables (prefixed with BRIDGECTL_, `__` for nesting)
        figment = figment.merge(Env::prefixed("BRIDGECTL_").split("__"));

        figment
            .extract()
            .map_err(|e| CoreError::Configuration(format!("Failed to parse configuration: {}", e)))
    }

    /// Apply CLI argument overrides to the configuration
    pub fn with_overrides(mut self, args: &Cli) -> Self {
        if let Some(ref endpoint) = args.endpoint {
            self.endpoint = endpoint.clone();
        }

        if let Some(ref format) = args.format {
            self.default_format = format.clone();
        }

        self
    }

    /// Get the full URL for an API path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), path)
    }
}
