//! History MCP Tools
//!
//! One debounced history list per calculator tool, plus the tools that read
//! and clear them.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::catalog::CalculatorTool;
use crate::history::{ConversionHistoryEntry, DebouncedHistory, HistoryStore, KeyValueStore};

/// Debounced history lists for every calculator
pub struct HistoryRegistry {
    lists: HashMap<CalculatorTool, DebouncedHistory<ConversionHistoryEntry>>,
}

impl HistoryRegistry {
    /// Load every calculator's list from `storage`
    pub fn load(storage: Arc<dyn KeyValueStore>, delay: Duration) -> Self {
        let lists = CalculatorTool::ALL
            .into_iter()
            .map(|tool| {
                let store = HistoryStore::load(Arc::clone(&storage), tool.history_key());
                (tool, DebouncedHistory::new(store, delay))
            })
            .collect();
        Self { lists }
    }

    /// Queue a successful conversion for the tool's history
    pub fn submit(
        &self,
        tool: CalculatorTool,
        input_value: &str,
        output_value: &str,
        from_format: &str,
        to_format: &str,
    ) {
        let Some(list) = self.lists.get(&tool) else {
            return;
        };

        let input_value = input_value.trim().to_string();
        let output_value = output_value.to_string();
        let from_format = from_format.trim().to_lowercase();
        let to_format = to_format.trim().to_lowercase();

        list.submit(move || {
            ConversionHistoryEntry::new(input_value, output_value, from_format, to_format)
        });
    }

    pub fn entries(&self, tool: CalculatorTool) -> Vec<ConversionHistoryEntry> {
        self.lists
            .get(&tool)
            .map(|list| list.entries())
            .unwrap_or_default()
    }

    pub fn clear(&self, tool: CalculatorTool) {
        if let Some(list) = self.lists.get(&tool) {
            list.clear();
        }
    }

    /// Whether a conversion is still waiting out the debounce
    pub fn has_pending_write(&self, tool: CalculatorTool) -> bool {
        self.lists
            .get(&tool)
            .map(|list| list.has_pending_write())
            .unwrap_or(false)
    }

    /// Entry counts per tool slug
    pub fn counts(&self) -> Vec<HistoryCount> {
        CalculatorTool::ALL
            .into_iter()
            .map(|tool| HistoryCount {
                tool: tool.slug(),
                entries: self.entries(tool).len(),
                pending_write: self.has_pending_write(tool),
            })
            .collect()
    }
}

/// Number of history entries held for one tool
#[derive(Debug, Clone, Serialize)]
pub struct HistoryCount {
    pub tool: &'static str,
    pub entries: usize,
    pub pending_write: bool,
}

/// Response for get_history
#[derive(Debug, Serialize)]
pub struct GetHistoryResponse {
    pub tool: &'static str,
    pub storage_key: &'static str,
    pub entries: Vec<ConversionHistoryEntry>,
}

/// Response for clear_history
#[derive(Debug, Serialize)]
pub struct ClearHistoryResponse {
    pub success: bool,
    pub tool: &'static str,
    pub entries_removed: usize,
}

fn resolve_tool(tool: &str) -> Result<CalculatorTool, String> {
    CalculatorTool::from_str(tool).ok_or_else(|| {
        format!(
            "Unknown tool '{}'. Expected one of: unit-converter, color-converter, time-calculator, data-calculator",
            tool
        )
    })
}

// ============================================================================
// History Tools
// ============================================================================

/// Get a calculator's history, newest first
pub fn get_history(history: &HistoryRegistry, tool: &str) -> Result<GetHistoryResponse, String> {
    let tool = resolve_tool(tool)?;
    Ok(GetHistoryResponse {
        tool: tool.slug(),
        storage_key: tool.history_key(),
        entries: history.entries(tool),
    })
}

/// Clear a calculator's history
pub fn clear_history(history: &HistoryRegistry, tool: &str) -> Result<ClearHistoryResponse, String> {
    let tool = resolve_tool(tool)?;
    let entries_removed = history.entries(tool).len();
    history.clear(tool);
    tracing::info!("Cleared {} history entries for {}", entries_removed, tool.slug());

    Ok(ClearHistoryResponse {
        success: true,
        tool: tool.slug(),
        entries_removed,
    })
}
