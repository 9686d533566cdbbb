mod contests;

use serde::{Deserialize, Serialize};

use crate::session::Session;

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

/// Wrap a serializable value as pretty JSON text content
pub fn json_result<T: Serialize>(value: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(value).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Serialization error: {e}"),
        data: None,
    })?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(JsonRpcError::internal)
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "cfdash".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(JsonRpcError::internal)
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![
        Tool {
            name: "contests_list".to_string(),
            description: "List Codeforces contests with filtering, search and pagination. Filter by contest type (cf, ioi, icpc) or restrict to favorites; favorites take precedence over the type. The search term matches contest names case-insensitively. Reset page to 1 whenever the filters or the limit change.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "type": {
                        "type": "string",
                        "description": "Contest type: cf, ioi or icpc (optional)"
                    },
                    "favorites": {
                        "type": "boolean",
                        "description": "Only list favorite contests (default: false)"
                    },
                    "search": {
                        "type": "string",
                        "description": "Substring to look for in contest names (optional)"
                    },
                    "limit": {
                        "type": "number",
                        "description": "Contests per page (default: 10)"
                    },
                    "page": {
                        "type": "number",
                        "description": "Page number, 1-indexed (default: 1)"
                    }
                }
            }),
        },
        Tool {
            name: "contest_get".to_string(),
            description: "Get the details of a single Codeforces contest: type, phase, start time, duration and frozen status. Always fetched fresh from the Codeforces API. Accepts a contest ID (e.g., '1900') or URL (e.g., 'https://codeforces.com/contest/1900').".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "contest": {
                        "type": "string",
                        "description": "Contest ID or URL"
                    }
                },
                "required": ["contest"]
            }),
        },
        Tool {
            name: "favorites_toggle".to_string(),
            description: "Mark a contest as favorite, or unmark it if it already is. Returns whether the contest is now a favorite.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "contest": {
                        "type": "string",
                        "description": "Contest ID or URL"
                    }
                },
                "required": ["contest"]
            }),
        },
        Tool {
            name: "favorites_list".to_string(),
            description: "List favorite contest IDs with their names. IDs no longer present in the contest listing are kept with a null name.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        },
        Tool {
            name: "contests_refresh".to_string(),
            description: "Discard the cached contest collection and fetch it again from the Codeforces API. The cache never expires on its own.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        },
    ];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(JsonRpcError::internal)
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    session: &mut Session,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    match params.name.as_str() {
        "contests_list" => contests::handle_contests_list(params.arguments, session, global).await,
        "contest_get" => contests::handle_contest_get(params.arguments, session, global).await,
        "favorites_toggle" => contests::handle_favorites_toggle(params.arguments, session, global),
        "favorites_list" => contests::handle_favorites_list(session, global).await,
        "contests_refresh" => contests::handle_contests_refresh(session, global).await,
        _ => Err(JsonRpcError {
            code: -32602,
            message: format!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}
