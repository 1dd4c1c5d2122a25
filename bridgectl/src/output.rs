//! Output formatting utilities for bridgectl

use crate::cli::OutputFormat;
use bridgefinder_core::errors::CoreError;
use bridgefinder_core::types::{BridgeReport, Edge};
use colored::*;
use tabled::{Table, Tabled};

/// Display the result of an analysis
pub fn display_report(report: &BridgeReport, format: &OutputFormat) -> Result<(), CoreError> {
    match format {
        OutputFormat::Table => {
            println!("{}", "Analysis".bold().blue());
            println!("{:<13} {}", "Nodes:".bold(), report.node_count);
            println!("{:<13} {}", "Edges:".bold(), report.edge_count);
            println!("{:<13} {}", "Components:".bold(), report.component_count);
            println!("{:<13} {}ms", "Elapsed:".bold(), report.elapsed_ms);
            println!();
            display_bridges(&report.bridges, format)?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| CoreError::Internal(format!("Failed to serialize to JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Csv => display_bridges(&report.bridges, format)?,
    }
    Ok(())
}

/// Display a bridge list
pub fn display_bridges(bridges: &[Edge], format: &OutputFormat) -> Result<(), CoreError> {
    match format {
        OutputFormat::Table => {
            if bridges.is_empty() {
                println!("{}", "No bridges found".green());
                return Ok(());
            }

            println!("{}", format!("Bridges ({}):", bridges.len()).bold().yellow());
            println!("{}", bridge_table(bridges));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({ "bridges": bridges }))
                .map_err(|e| CoreError::Internal(format!("Failed to serialize to JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Csv => print!("{}", bridges_csv(bridges)),
    }
    Ok(())
}

fn bridge_table(bridges: &[Edge]) -> String {
    let rows: Vec<BridgeTableRow> = bridges
        .iter()
        .enumerate()
        .map(|(i, &Edge(u, v))| BridgeTableRow {
            index: i + 1,
            parent: u,
            child: v,
        })
        .collect();

    Table::new(rows).to_string()
}

fn bridges_csv(bridges: &[Edge]) -> String {
    let mut out = String::from("u,v\n");
    for Edge(u, v) in bridges {
        out.push_str(&format!("{},{}\n", u, v));
    }
    out
}

/// Table row for bridge display
#[derive(Tabled)]
struct BridgeTableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Parent")]
    parent: usize,
    #[tabled(rename = "Child")]
    child: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridges_csv() {
        assert_eq!(bridges_csv(&[]), "u,v\n");
        assert_eq!(bridges_csv(&[Edge(2, 3), Edge(0, 1)]), "u,v\n2,3\n0,1\n");
    }

    #[test]
    fn test_bridge_table_contains_rows() {
        let table = bridge_table(&[Edge(2, 3)]);
        assert!(table.contains("Parent"));
        assert!(table.contains("Child"));
        assert!(table.contains('2'));
        assert!(table.contains('3'));
    }
}
