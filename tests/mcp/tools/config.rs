use rcstrings::mcp::{RcStringsMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = RcStringsMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["includes"], json!(["**/*.rc"]));
    assert_eq!(json_result["config"]["sourceRoot"], "./");
    assert_eq!(json_result["config"]["unique"], false);
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "includes": ["res/**/*.rc"],
            "ignores": ["res/legacy"],
            "unique": true
        }))
        .unwrap();

    let server = RcStringsMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["includes"], json!(["res/**/*.rc"]));
    assert_eq!(json_result["config"]["ignores"], json!(["res/legacy"]));
    assert_eq!(json_result["config"]["unique"], true);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_an_error() {
    let fixture = McpTestFixture::with_files(vec![(".rcstringsrc.json", "{ not json")]).unwrap();
    let server = RcStringsMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await;
    assert!(result.is_err());
}
