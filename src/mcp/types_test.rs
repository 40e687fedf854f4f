// ABOUTME: Tests for MCP types - serialization, deserialization.
// ABOUTME: Verifies JSON format matches the MCP protocol.

use super::*;

#[test]
fn test_request_serialization() {
    let req = McpRequest::new(1, "tools/list", None);
    let json = serde_json::to_value(&req).unwrap();

    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["method"], "tools/list");
    assert_eq!(json["id"], 1);
}

#[test]
fn test_notification_has_no_id() {
    let req = McpRequest::notification("notifications/initialized", None);
    let json = serde_json::to_value(&req).unwrap();

    assert!(json.get("id").is_none());
}

#[test]
fn test_request_deserialization_integer_id() {
    let json = r#"{"jsonrpc": "2.0", "id": 42, "method": "ping"}"#;

    let req: McpRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.id, Some(RequestId::Integer(42)));
    assert_eq!(req.method, "ping");
}

#[test]
fn test_request_deserialization_string_id() {
    let json = r#"{"jsonrpc": "2.0", "id": "abc-1", "method": "ping"}"#;

    let req: McpRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.id, Some(RequestId::String("abc-1".to_string())));
}

#[test]
fn test_request_without_id_is_notification() {
    let json = r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#;

    let req: McpRequest = serde_json::from_str(json).unwrap();
    assert!(req.id.is_none());
}

#[test]
fn test_success_response_serialization() {
    let resp = McpResponse::success(RequestId::Integer(1), serde_json::json!({"tools": []}));
    let json = serde_json::to_value(&resp).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["result"]["tools"], serde_json::json!([]));
    assert!(json.get("error").is_none());
}

#[test]
fn test_error_response_with_null_id() {
    let resp = McpResponse::error(None, PARSE_ERROR, "Parse error");
    let json = serde_json::to_value(&resp).unwrap();

    assert!(json["id"].is_null());
    assert_eq!(json["error"]["code"], -32700);
    assert!(json.get("result").is_none());
}

#[test]
fn test_tool_info_serialization_uses_camel_case() {
    let info = McpToolInfo {
        name: "spawn_subagent".to_string(),
        description: "Spawn a subagent".to_string(),
        input_schema: serde_json::json!({"type": "object"}),
    };

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["inputSchema"]["type"], "object");
}

#[test]
fn test_tool_call_params_deserialization() {
    let json = r#"{
        "name": "cleanup_subagent",
        "arguments": {"branch": "agent/fix"}
    }"#;

    let params: McpToolCallParams = serde_json::from_str(json).unwrap();
    assert_eq!(params.name, "cleanup_subagent");
    assert_eq!(params.arguments.unwrap()["branch"], "agent/fix");
}

#[test]
fn test_tool_result_serialization() {
    let result = McpToolResult {
        content: vec![McpContentBlock::Text {
            text: "agent/fix".to_string(),
        }],
        is_error: false,
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["content"][0]["type"], "text");
    assert_eq!(json["content"][0]["text"], "agent/fix");
    assert_eq!(json["isError"], false);
}

#[test]
fn test_tool_result_error_helper() {
    let result = McpToolResult::error("something broke");

    assert!(result.is_error);
    match &result.content[0] {
        McpContentBlock::Text { text } => assert_eq!(text, "something broke"),
    }
}

#[test]
fn test_initialize_result_serialization() {
    let result = McpInitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: McpServerCapabilities {
            tools: Some(serde_json::json!({})),
            ..Default::default()
        },
        server_info: McpServerInfo {
            name: "subagents".to_string(),
            version: "0.1.0".to_string(),
        },
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["protocolVersion"], "2024-11-05");
    assert_eq!(json["serverInfo"]["name"], "subagents");
    assert!(json["capabilities"].get("resources").is_none());
}
