use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    analysis::{ScanResult, extract_files, read_source, scan_files},
    config::{load_config, resolve_source_root},
    extraction::extract_entries,
};

use super::types::{
    ConfigDto, ConfigValues, ExtractStringsParams, ExtractStringsResult, FileStats,
    GetConfigParams, Pagination, ScanOverviewParams, ScanOverviewResult, StringItem,
};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 500;

#[derive(Clone)]
pub struct RcStringsMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for RcStringsMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl RcStringsMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current rcstrings configuration
    #[tool(description = "Get the current rcstrings configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        to_tool_result(&config_dto)
    }

    /// Extract translatable strings from one resource script
    #[tool(
        description = "Extract translatable strings from a Windows resource script (.rc). Returns paginated entries with line numbers, resource ids and hints."
    )]
    pub async fn extract_strings(
        &self,
        params: Parameters<ExtractStringsParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = &params.0.file_path;
        let limit = params
            .0
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let text = read_source(Path::new(path))
            .map_err(|e| McpError::internal_error(format!("{:#}", e), None))?;

        let entries = extract_entries(&text);
        let total_count = entries.len();

        let items: Vec<StringItem> = entries
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(StringItem::from)
            .collect();

        let has_more = offset + items.len() < total_count;

        let result = ExtractStringsResult {
            file_path: path.clone(),
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        to_tool_result(&result)
    }

    /// Get per-file string counts for the whole project
    #[tool(
        description = "Get string counts for every resource script in the project without the strings themselves. Use this first, then extract_strings for the files you need."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let config = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
            .config;
        let root = resolve_source_root(path, &config.source_root);

        let ScanResult {
            files,
            skipped_count,
        } = scan_files(&root, &config.includes, &config.ignores, false);

        let files: Vec<FileStats> = extract_files(&root, &files, config.unique)
            .into_iter()
            .map(|f| FileStats {
                string_count: f.entries.len(),
                file_path: f.path,
                error: f.error,
            })
            .collect();

        let result = ScanOverviewResult {
            total_strings: files.iter().map(|f| f.string_count).sum(),
            file_count: files.len(),
            skipped_count,
            files,
        };

        to_tool_result(&result)
    }
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for RcStringsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "rcstrings MCP extracts translatable strings from Windows resource scripts (.rc).\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_overview - Get string counts for every resource script in the project\n\
                 3. extract_strings - Get the strings of one resource script (paginated)\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to find the resource scripts and their sizes\n\
                 2. Use extract_strings on each file, following pagination.hasMore"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = RcStringsMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
