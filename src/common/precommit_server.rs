use crate::common::security::helpers::audit_tool_execution;
use crate::common::security::{audit_logger, AuditLogger};
use crate::hooks::{PreCommitRunArgs, PreCommitRunner};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use std::sync::Arc;

/// MCP server exposing the pre-commit tool.
///
/// The server owns no per-call state: every invocation of
/// [`pre_commit_run`](Self::pre_commit_run) builds its result from scratch,
/// so concurrent calls do not interfere.
#[derive(Clone)]
pub struct PreCommitServer {
    tool_router: ToolRouter<PreCommitServer>,
    audit: Arc<AuditLogger>,
    runner: PreCommitRunner,
}

#[tool_router]
impl PreCommitServer {
    pub fn new() -> Self {
        let audit = audit_logger();
        Self {
            tool_router: Self::tool_router(),
            runner: PreCommitRunner::new(audit.clone()),
            audit,
        }
    }

    #[tool(
        description = "Run pre-commit hooks on staged files and return a structured result (status, per-hook failures, modified files)",
        annotations(read_only_hint = false)
    )]
    pub async fn pre_commit_run(
        &self,
        Parameters(PreCommitRunArgs { force_non_git }): Parameters<PreCommitRunArgs>,
    ) -> Result<CallToolResult, McpError> {
        audit_tool_execution(
            &self.audit,
            "pre_commit_run",
            Some(serde_json::json!({"force_non_git": &force_non_git})),
            || async {
                let result = self.runner.run(force_non_git.unwrap_or(false)).await;

                // Expected failure classes are already encoded in the result;
                // only serialization itself can error here.
                let payload = serde_json::to_string_pretty(&result).map_err(|e| {
                    McpError::internal_error(format!("Failed to serialize result: {}", e), None)
                })?;

                Ok(CallToolResult::success(vec![Content::text(payload)]))
            },
        )
        .await
    }
}

impl Default for PreCommitServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for PreCommitServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "This server runs pre-commit hooks against the staged files of the current \
                 repository and reports the outcome as structured JSON. \
                 \n\nTool: pre_commit_run \
                 \n- status \"success\": all hooks passed; includes a pass/fail/skip summary and modified files \
                 \n- status \"hooks_failed\": at least one hook failed; includes per-hook failures with files and error lines \
                 \n- status \"timeout\": the run exceeded the 60 second limit; includes partial output \
                 \n- status \"system_error\": pre-commit could not run (missing repository, missing config, abnormal exit) \
                 \n\nSet force_non_git=true to run outside a git repository. \
                 Requires a .pre-commit-config.yaml in the working directory."
                    .to_string(),
            ),
        }
    }
}
