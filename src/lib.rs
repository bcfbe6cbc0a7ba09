// Library exports for precommit-mcp
// This allows integration tests and external code to use the MCP tools

pub mod common;
pub mod hooks;
