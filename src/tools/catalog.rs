//! Catalog MCP Tools

use serde::Serialize;

use crate::catalog::{self, ToolDescriptor, FALLBACK_ICON};

/// Response for list_tools
#[derive(Debug, Serialize)]
pub struct ListToolsResponse {
    pub tools: &'static [ToolDescriptor],
    pub fallback_icon: &'static str,
}

/// Response for get_tool
///
/// Numeric ids without a descriptor still resolve to the fallback icon.
#[derive(Debug, Serialize)]
pub struct GetToolResponse {
    pub id: Option<u32>,
    pub icon: &'static str,
    pub tool: Option<&'static ToolDescriptor>,
}

pub fn list_tools() -> ListToolsResponse {
    ListToolsResponse {
        tools: catalog::TOOLS,
        fallback_icon: FALLBACK_ICON,
    }
}

/// Look up a tool by numeric id or slug
pub fn get_tool(tool: &str) -> Result<GetToolResponse, String> {
    let trimmed = tool.trim();

    if let Ok(id) = trimmed.parse::<u32>() {
        return Ok(GetToolResponse {
            id: Some(id),
            icon: catalog::icon_for(id),
            tool: catalog::tool_by_id(id),
        });
    }

    let descriptor = catalog::tool_by_slug(trimmed).ok_or_else(|| format!("Unknown tool '{}'", trimmed))?;
    Ok(GetToolResponse {
        id: Some(descriptor.id),
        icon: catalog::icon_for(descriptor.id),
        tool: Some(descriptor),
    })
}
