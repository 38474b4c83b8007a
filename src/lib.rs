//! Multi-Tool Dashboard (MTD) Library
//!
//! Unit, color, time and data conversion engine with per-tool conversion
//! history, served over MCP.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod convert;
pub mod db;
pub mod history;
pub mod mcp;
pub mod tools;
