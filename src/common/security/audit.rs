/// Audit logging for security-relevant operations
/// Provides structured logging of tool invocations and timeouts
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Severity of an audit event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SecurityLevel {
    /// Informational event (normal operation)
    Info,
    /// Warning - degraded or suspicious but handled
    Warning,
}

/// Audit event types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum AuditEvent {
    /// Tool invocation
    ToolInvoked {
        tool_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        parameters: Option<serde_json::Value>,
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
        duration_ms: u64,
    },

    /// Operation exceeded its deadline
    OperationTimeout {
        operation: String,
        timeout_secs: u64,
    },
}

/// Audit logger implementation
#[derive(Clone)]
pub struct AuditLogger {
    // In future, could add structured log output, remote logging, etc.
    _marker: std::marker::PhantomData<()>,
}

impl AuditLogger {
    pub fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }

    /// Log an audit event with its severity
    pub fn log(&self, level: SecurityLevel, event: AuditEvent) {
        let event_json = serde_json::to_string(&event)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize event: {}\"}}", e));

        match level {
            SecurityLevel::Info => {
                info!(
                    security_level = "info",
                    event = %event_json,
                    "Security audit event"
                );
            }
            SecurityLevel::Warning => {
                warn!(
                    security_level = "warning",
                    event = %event_json,
                    "Security audit warning"
                );
            }
        }
    }

    /// Log a tool invocation with timing
    pub fn log_tool_invocation(
        &self,
        tool_name: &str,
        parameters: Option<serde_json::Value>,
        success: bool,
        error: Option<String>,
        duration_ms: u64,
    ) {
        let event = AuditEvent::ToolInvoked {
            tool_name: tool_name.to_string(),
            parameters,
            success,
            error,
            duration_ms,
        };

        let level = if success {
            SecurityLevel::Info
        } else {
            SecurityLevel::Warning
        };

        self.log(level, event);
    }

    /// Log an operation timeout
    pub fn log_timeout(&self, operation: &str, timeout_secs: u64) {
        let event = AuditEvent::OperationTimeout {
            operation: operation.to_string(),
            timeout_secs,
        };

        self.log(SecurityLevel::Warning, event);
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

/// Global audit logger instance
static AUDIT_LOGGER: once_cell::sync::Lazy<Arc<AuditLogger>> =
    once_cell::sync::Lazy::new(|| Arc::new(AuditLogger::new()));

/// Get global audit logger
pub fn audit_logger() -> Arc<AuditLogger> {
    Arc::clone(&AUDIT_LOGGER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_logger_creation() {
        let logger = AuditLogger::new();
        logger.log_tool_invocation("test_tool", None, true, None, 100);
    }

    #[test]
    fn test_global_audit_logger() {
        let logger = audit_logger();
        logger.log_timeout("test_operation", 60);
    }

    #[test]
    fn test_tool_invoked_event_serializes_with_tag() {
        let event = AuditEvent::ToolInvoked {
            tool_name: "pre_commit_run".to_string(),
            parameters: None,
            success: true,
            error: None,
            duration_ms: 12,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "ToolInvoked");
        assert_eq!(json["tool_name"], "pre_commit_run");
        assert!(json.get("parameters").is_none());
    }
}
