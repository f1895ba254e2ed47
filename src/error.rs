use reqwest::StatusCode;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

/// Failure talking to one of the Open-Meteo endpoints.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Open-Meteo {}", .status.as_u16())]
    Status { status: StatusCode },

    #[error("Open-Meteo request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Open-Meteo returned invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Reports the failure as a tool result flagged `isError`, not a protocol error.
    pub fn into_tool_result(self) -> CallToolResult {
        CallToolResult::error(vec![Content::text(self.to_string())])
    }
}

/// A tool argument that passed deserialization but violates a constraint.
#[derive(Debug, thiserror::Error)]
#[error("invalid `{field}`: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for McpError {
    fn from(err: ValidationError) -> Self {
        McpError::invalid_params(
            err.to_string(),
            Some(serde_json::json!({ "field": err.field })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_code() {
        let err = UpstreamError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.to_string(), "Open-Meteo 503");

        let result = err.into_tool_result();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content[0].as_text().unwrap().text, "Open-Meteo 503");
    }

    #[test]
    fn validation_error_carries_field() {
        let mcp: McpError = ValidationError::new("count", "must be between 1 and 10").into();
        assert!(mcp.message.contains("count"));
        assert_eq!(mcp.data, Some(serde_json::json!({ "field": "count" })));
    }
}
