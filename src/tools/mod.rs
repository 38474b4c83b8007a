//! MCP Tool implementations

pub mod catalog;
pub mod colors;
pub mod history;
pub mod status;
pub mod units;
