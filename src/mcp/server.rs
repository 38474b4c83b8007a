//! MTD MCP Server Implementation
//!
//! Implements the MCP server with all MTD tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::convert::{ConversionError, ConversionResult};
use crate::tools::catalog;
use crate::tools::colors;
use crate::tools::history::{self, HistoryRegistry};
use crate::tools::status::StatusTracker;
use crate::tools::units;

/// MTD MCP Service
#[derive(Clone)]
pub struct MtdService {
    status_tracker: Arc<StatusTracker>,
    history: Arc<HistoryRegistry>,
    tool_router: ToolRouter<MtdService>,
}

impl MtdService {
    pub fn new(database_path: PathBuf, history: Arc<HistoryRegistry>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(database_path)),
            history,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Response Helpers
// ============================================================================

/// Body returned in place of a result when a conversion fails
#[derive(Debug, Serialize)]
struct ConversionErrorResponse {
    error: &'static str,
    code: &'static str,
    detail: String,
}

impl From<&ConversionError> for ConversionErrorResponse {
    fn from(e: &ConversionError) -> Self {
        Self {
            error: e.user_message(),
            code: e.code(),
            detail: e.to_string(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Unknown tool names and similar caller mistakes
fn invalid_params(message: String) -> McpError {
    McpError::invalid_params(message, None)
}

/// Engine errors are shown to the caller, not raised as MCP errors
fn conversion_result<T: Serialize>(result: ConversionResult<T>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => json_result(&value),
        Err(e) => {
            tracing::debug!("Conversion failed: {}", e);
            json_result(&ConversionErrorResponse::from(&e))
        }
    }
}

// ============================================================================
// Conversion Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitsParams {
    /// Numeric value as text, e.g. "12.5"
    pub value: String,
    /// Source unit id, e.g. "kilometers"
    pub from_unit: String,
    /// Target unit id, e.g. "miles"
    pub to_unit: String,
    /// Dimension id, e.g. "length" (see list_dimensions)
    pub dimension: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateParams {
    /// Numeric value as text
    pub value: String,
    /// Source unit id
    pub from_unit: String,
    /// Target unit id
    pub to_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertColorParams {
    /// Color string, e.g. "#ff6347" or "rgb(255, 99, 71)"
    pub input: String,
    /// Source format: hex, rgb, rgba, hsl, hsla
    pub from_format: String,
    /// Target format: hex, rgb, rgba, hsl, hsla
    pub to_format: String,
}

// ============================================================================
// Listing and History Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    /// Dimension id, e.g. "temperature"
    pub dimension: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetToolParams {
    /// Tool slug (e.g. "json-compressor") or numeric id (e.g. "17")
    pub tool: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToolParams {
    /// Calculator: unit-converter, color-converter, time-calculator, data-calculator (or id 10-13)
    pub tool: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MtdService {
    // --- Status ---

    #[tool(description = "Get the current status of the MTD service including build info, database status, process information and history sizes")]
    fn mtd_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status(&self.history);
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for the unit, color, time and data calculators. Call this when unsure which units or formats are accepted.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERSION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERSION_INSTRUCTIONS)]))
    }

    // --- Catalog ---

    #[tool(description = "List all dashboard tools with their ids, categories and icons")]
    fn list_tools(&self) -> Result<CallToolResult, McpError> {
        json_result(&catalog::list_tools())
    }

    #[tool(description = "Look up one dashboard tool by slug or numeric id. Unknown numeric ids resolve to the fallback icon.")]
    fn get_tool(&self, Parameters(p): Parameters<GetToolParams>) -> Result<CallToolResult, McpError> {
        let result = catalog::get_tool(&p.tool).map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "List the unit dimensions (length, mass, temperature, ...) with base unit and unit count")]
    fn list_dimensions(&self) -> Result<CallToolResult, McpError> {
        json_result(&units::list_dimensions())
    }

    #[tool(description = "List the unit ids of a dimension, sorted alphabetically")]
    fn list_units(&self, Parameters(p): Parameters<ListUnitsParams>) -> Result<CallToolResult, McpError> {
        conversion_result(units::list_units(&p.dimension))
    }

    #[tool(description = "List the preset quick conversions for a calculator")]
    fn list_quick_conversions(&self, Parameters(p): Parameters<ToolParams>) -> Result<CallToolResult, McpError> {
        let result = units::list_quick_conversions(&p.tool).map_err(invalid_params)?;
        json_result(&result)
    }

    // --- Conversions ---

    #[tool(description = "Convert a value between two units of the same dimension. Successful conversions are added to the unit converter history.")]
    fn convert_units(&self, Parameters(p): Parameters<ConvertUnitsParams>) -> Result<CallToolResult, McpError> {
        conversion_result(units::convert_units(&self.history, &p.value, &p.from_unit, &p.to_unit, &p.dimension))
    }

    #[tool(description = "Convert a duration between time units (nanoseconds to years)")]
    fn calculate_time(&self, Parameters(p): Parameters<CalculateParams>) -> Result<CallToolResult, McpError> {
        conversion_result(units::calculate_time(&self.history, &p.value, &p.from_unit, &p.to_unit))
    }

    #[tool(description = "Convert a data size between bits, bytes and their multiples (1024-based)")]
    fn calculate_data(&self, Parameters(p): Parameters<CalculateParams>) -> Result<CallToolResult, McpError> {
        conversion_result(units::calculate_data(&self.history, &p.value, &p.from_unit, &p.to_unit))
    }

    #[tool(description = "List the supported color formats")]
    fn list_color_formats(&self) -> Result<CallToolResult, McpError> {
        json_result(&colors::list_color_formats())
    }

    #[tool(description = "Convert a color between HEX, RGB, RGBA, HSL and HSLA notation")]
    fn convert_color(&self, Parameters(p): Parameters<ConvertColorParams>) -> Result<CallToolResult, McpError> {
        conversion_result(colors::convert_color(&self.history, &p.input, &p.from_format, &p.to_format))
    }

    // --- History ---

    #[tool(description = "Get a calculator's conversion history (up to 10 entries, newest first)")]
    fn get_history(&self, Parameters(p): Parameters<ToolParams>) -> Result<CallToolResult, McpError> {
        let result = history::get_history(&self.history, &p.tool).map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Clear a calculator's conversion history, including any pending write")]
    fn clear_history(&self, Parameters(p): Parameters<ToolParams>) -> Result<CallToolResult, McpError> {
        let result = history::clear_history(&self.history, &p.tool).map_err(invalid_params)?;
        json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for MtdService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mtd".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Multi-Tool Dashboard".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Multi-Tool Dashboard (MTD) - Unit, color, time and data conversions. \
                 Call conversion_instructions for accepted units and formats. \
                 Catalog: list_tools, get_tool, list_dimensions, list_units, list_color_formats, list_quick_conversions. \
                 Conversions: convert_units, calculate_time, calculate_data, convert_color. \
                 History: get_history, clear_history (per calculator, 10 most recent)."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use rmcp::model::ErrorCode;

    use crate::history::MemoryStore;

    fn service() -> MtdService {
        let history = HistoryRegistry::load(Arc::new(MemoryStore::new()), Duration::from_millis(10));
        MtdService::new(PathBuf::from("/nonexistent/mtd.db"), Arc::new(history))
    }

    #[test]
    fn test_error_response_uses_fixed_message() {
        let error = ConversionError::InvalidInput("'abc' is not a number".to_string());
        let response = ConversionErrorResponse::from(&error);
        assert_eq!(response.error, "Invalid input");
        assert_eq!(response.code, "invalid_input");
        assert!(response.detail.contains("abc"));
    }

    #[test]
    fn test_conversion_errors_are_successful_results() {
        let result: ConversionResult<f64> = Err(ConversionError::ConversionUndefined {
            from: "kelvin".to_string(),
            to: "celsius".to_string(),
        });
        let call = conversion_result(result).unwrap();
        assert_ne!(call.is_error, Some(true));
    }

    #[test]
    fn test_unknown_tool_is_invalid_params() {
        let service = service();
        let tool = || Parameters(ToolParams { tool: "news".to_string() });

        for result in [
            service.get_history(tool()),
            service.clear_history(tool()),
            service.list_quick_conversions(tool()),
        ] {
            let error = result.unwrap_err();
            assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        }

        let error = service
            .get_tool(Parameters(GetToolParams { tool: "news".to_string() }))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_listing_tools_succeed() {
        let service = service();
        assert!(service.list_color_formats().is_ok());
        assert!(service.list_tools().is_ok());
        assert!(service
            .get_tool(Parameters(GetToolParams { tool: "999".to_string() }))
            .is_ok());
    }

    #[test]
    fn test_server_info() {
        let info = service().get_info();
        assert_eq!(info.server_info.name, "mtd");
        assert!(info.instructions.unwrap().contains("convert_color"));
    }
}
