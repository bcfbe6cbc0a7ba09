//! Audit infrastructure for the pre-commit MCP server.
//!
//! Every tool invocation is logged as a structured event with its parameters,
//! success flag, and duration; operation timeouts are logged as warnings.
//! Events are emitted through `tracing`, so the host environment controls
//! where they end up.
//!
//! # Modules
//!
//! - [`audit`] - Audit event types and the process-wide logger
//! - [`helpers`] - Wrapper that times and audits a tool execution

pub mod audit;
pub mod helpers;

pub use audit::{audit_logger, AuditLogger};
