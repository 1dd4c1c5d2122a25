//! Graph file readers for `bridgectl analyze`
//!
//! Two formats are accepted: a JSON body identical to the HTTP request
//! (`{"nodes": n, "edges": [[u, v], ...]}`) and a CSV edge list with two
//! integer columns per row.

use bridgefinder_core::errors::CoreError;
use bridgefinder_core::types::GraphRequest;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Options for reading CSV edge lists
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: char,
    pub has_header: bool,
    /// Explicit node count; when absent, the largest endpoint + 1 is used
    pub nodes: Option<i64>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: false,
            nodes: None,
        }
    }
}

/// Read a graph file, choosing the format from its extension
pub fn read_graph_file(path: &Path, options: &CsvOptions) -> Result<GraphRequest, CoreError> {
    info!("Reading graph from: {}", path.display());

    let file = File::open(path)
        .map_err(|e| CoreError::Internal(format!("Failed to open file {}: {}", path.display(), e)))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut request = if is_json {
        parse_json_graph(file)?
    } else {
        parse_csv_edges(file, options)?
    };

    if is_json {
        if let Some(nodes) = options.nodes {
            request.nodes = nodes;
        }
    }

    debug!("Read graph with {} nodes and {} edges", request.nodes, request.edges.len());
    Ok(request)
}

/// Parse a JSON graph request
pub fn parse_json_graph<R: Read>(reader: R) -> Result<GraphRequest, CoreError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a CSV edge list into a graph request
pub fn parse_csv_edges<R: Read>(reader: R, options: &CsvOptions) -> Result<GraphRequest, CoreError> {
    // bytes above 0x7f would not match the UTF-8 encoding of the character
    let delimiter = u8::try_from(options.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            CoreError::Configuration(format!(
                "CSV delimiter must be an ASCII character, got '{}'",
                options.delimiter
            ))
        })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(options.has_header)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut edges = Vec::new();
    let mut inferred_nodes = 0i64;
    for (row, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| CoreError::Internal(format!("Failed to read CSV record: {}", e)))?;

        if record.len() != 2 {
            return Err(CoreError::Internal(format!(
                "Row {} has {} columns, expected 2",
                row + 1,
                record.len()
            )));
        }

        let endpoint = |idx: usize| -> Result<i64, CoreError> {
            let value = &record[idx];
            value.parse::<i64>().map_err(|_| {
                CoreError::Internal(format!("Row {}: '{}' is not an integer node index", row + 1, value))
            })
        };

        let (u, v) = (endpoint(0)?, endpoint(1)?);
        if options.nodes.is_none() {
            let required = u.max(v).checked_add(1).ok_or_else(|| {
                CoreError::Internal(format!("Row {}: node index {} is too large", row + 1, u.max(v)))
            })?;
            inferred_nodes = inferred_nodes.max(required);
        }
        edges.push((u, v));
    }

    let nodes = options.nodes.unwrap_or(inferred_nodes);

    Ok(GraphRequest::new(nodes, edges))
}
