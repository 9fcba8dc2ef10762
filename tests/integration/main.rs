//! Integration tests for pipecheck
//!
//! These tests verify that the crates work together correctly.

use std::process::Command;

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pipecheck"));
    assert!(stdout.contains("Pipeline graph analysis service"));
}

/// Test that the server can be constructed with a default config
#[tokio::test]
async fn test_server_construction() {
    use pipecheck_server::{PipecheckServer, ServerConfig};

    let config = ServerConfig {
        port: 0, // Let OS assign port
        ..ServerConfig::default()
    };
    let server = PipecheckServer::new(config);
    assert_eq!(server.config().host, "127.0.0.1");
    assert_eq!(server.config().allowed_origin, "http://localhost:3000");
}

/// Test the analysis operation end-to-end through the public core API
#[test]
fn test_analyze_end_to_end() {
    let payload = r#"{
        "nodes": [{"id": "input"}, {"id": "transform"}, {"id": "output"}],
        "edges": [
            {"source": "input", "target": "transform"},
            {"source": "transform", "target": "output"}
        ]
    }"#;

    let report = pipecheck_core::analyze(payload).unwrap();
    assert_eq!(report.num_nodes, 3);
    assert_eq!(report.num_edges, 2);
    assert!(report.is_dag);

    // Same payload, same answer
    assert_eq!(pipecheck_core::analyze(payload).unwrap(), report);
}

/// Test that a malformed payload surfaces as a value, not a panic
#[test]
fn test_analyze_malformed_payload() {
    let result = pipecheck_core::analyze("pipeline but not json");
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("invalid JSON"));
}
