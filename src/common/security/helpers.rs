/// Helper for integrating audit logging into tool implementations
use super::AuditLogger;
use rmcp::ErrorData as McpError;
use std::time::Instant;

/// Audit tool execution with timing
pub async fn audit_tool_execution<F, Fut, T>(
    audit: &AuditLogger,
    tool_name: &str,
    parameters: Option<serde_json::Value>,
    f: F,
) -> Result<T, McpError>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, McpError>>,
{
    let start = Instant::now();
    let result = f().await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(_) => {
            audit.log_tool_invocation(tool_name, parameters, true, None, duration_ms);
        }
        Err(e) => {
            audit.log_tool_invocation(
                tool_name,
                parameters,
                false,
                Some(e.message.to_string()),
                duration_ms,
            );
        }
    }

    result
}
