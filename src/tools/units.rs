//! Unit, Time and Data MCP Tools
//!
//! Wrap the conversion engine for the unit converter, time calculator and
//! data calculator, and record successful conversions to history.

use serde::Serialize;

use crate::catalog::{CalculatorTool, QuickConversion};
use crate::convert::units::display_name;
use crate::convert::{
    convert, format_number, parse_dimension, parse_value, ConversionError, ConversionResult,
    Dimension,
};
use crate::tools::history::HistoryRegistry;

/// Response for a successful unit conversion
#[derive(Debug, Serialize)]
pub struct UnitConversionResponse {
    pub dimension: &'static str,
    pub from_unit: String,
    pub to_unit: String,
    pub input_value: f64,
    pub result: f64,
    /// Result as displayed (grouped, at most 8 decimals)
    pub output_value: String,
}

/// Dimension summary for listing
#[derive(Debug, Serialize)]
pub struct DimensionSummary {
    pub id: &'static str,
    pub name: String,
    pub base_unit: &'static str,
    pub linear: bool,
    pub unit_count: usize,
}

/// Unit summary for listing
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub id: &'static str,
    pub name: String,
    /// Units per one base unit (absent for temperature)
    pub factor: Option<f64>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub dimension: &'static str,
    pub base_unit: &'static str,
    pub units: Vec<UnitSummary>,
}

/// Response for list_quick_conversions
#[derive(Debug, Serialize)]
pub struct QuickConversionsResponse {
    pub tool: &'static str,
    pub conversions: &'static [QuickConversion],
}

// ============================================================================
// Conversion Tools
// ============================================================================

/// Convert a raw value between two units of a dimension
pub fn convert_units(
    history: &HistoryRegistry,
    value: &str,
    from_unit: &str,
    to_unit: &str,
    dimension: &str,
) -> ConversionResult<UnitConversionResponse> {
    let dimension = parse_dimension(dimension)?;
    run_conversion(history, CalculatorTool::UnitConverter, value, from_unit, to_unit, dimension)
}

/// Time calculator: convert within the time dimension
pub fn calculate_time(
    history: &HistoryRegistry,
    value: &str,
    from_unit: &str,
    to_unit: &str,
) -> ConversionResult<UnitConversionResponse> {
    run_conversion(history, CalculatorTool::TimeCalculator, value, from_unit, to_unit, Dimension::Time)
}

/// Data calculator: convert within the data storage dimension
pub fn calculate_data(
    history: &HistoryRegistry,
    value: &str,
    from_unit: &str,
    to_unit: &str,
) -> ConversionResult<UnitConversionResponse> {
    run_conversion(
        history,
        CalculatorTool::DataCalculator,
        value,
        from_unit,
        to_unit,
        Dimension::DataStorage,
    )
}

fn run_conversion(
    history: &HistoryRegistry,
    tool: CalculatorTool,
    value: &str,
    from_unit: &str,
    to_unit: &str,
    dimension: Dimension,
) -> ConversionResult<UnitConversionResponse> {
    let input_value = parse_value(value)?;
    let result = convert(input_value, from_unit, to_unit, dimension)?;
    let output_value = format_number(result);

    tracing::debug!(
        "{}: {} {} -> {} {}",
        tool.slug(),
        input_value,
        from_unit,
        output_value,
        to_unit
    );
    history.submit(tool, value, &output_value, from_unit, to_unit);

    Ok(UnitConversionResponse {
        dimension: dimension.as_str(),
        from_unit: from_unit.trim().to_lowercase(),
        to_unit: to_unit.trim().to_lowercase(),
        input_value,
        result,
        output_value,
    })
}

// ============================================================================
// Listing Tools
// ============================================================================

/// All dimensions, sorted by id
pub fn list_dimensions() -> Vec<DimensionSummary> {
    Dimension::ALL
        .iter()
        .map(|d| DimensionSummary {
            id: d.as_str(),
            name: d.display_name(),
            base_unit: d.base_unit(),
            linear: d.is_linear(),
            unit_count: d.unit_ids().len(),
        })
        .collect()
}

/// Units of a dimension, sorted by id
pub fn list_units(dimension: &str) -> Result<ListUnitsResponse, ConversionError> {
    let dimension = parse_dimension(dimension)?;
    let units = dimension
        .unit_ids()
        .into_iter()
        .map(|id| UnitSummary {
            id,
            name: display_name(id),
            factor: dimension.factor(id),
        })
        .collect();

    Ok(ListUnitsResponse {
        dimension: dimension.as_str(),
        base_unit: dimension.base_unit(),
        units,
    })
}

/// Preset pairs for a calculator tool
pub fn list_quick_conversions(tool: &str) -> Result<QuickConversionsResponse, String> {
    let tool = CalculatorTool::from_str(tool).ok_or_else(|| format!("Unknown tool '{}'", tool))?;
    Ok(QuickConversionsResponse {
        tool: tool.slug(),
        conversions: tool.quick_conversions(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::history::MemoryStore;

    fn registry() -> HistoryRegistry {
        HistoryRegistry::load(Arc::new(MemoryStore::new()), Duration::from_millis(20))
    }

    #[tokio::test]
    async fn test_convert_units_formats_output() {
        let history = registry();
        let response = convert_units(&history, "1", "kilometers", "meters", "length").unwrap();
        assert_eq!(response.dimension, "length");
        assert_eq!(response.output_value, "1,000");

        tokio::time::sleep(Duration::from_millis(300)).await;
        let entries = history.entries(CalculatorTool::UnitConverter);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].output_value, "1,000");
    }

    #[tokio::test]
    async fn test_convert_units_errors_are_not_recorded() {
        let history = registry();
        assert!(matches!(
            convert_units(&history, "abc", "meters", "feet", "length"),
            Err(ConversionError::InvalidInput(_))
        ));
        assert!(matches!(
            convert_units(&history, "1", "meters", "feet", "luminosity"),
            Err(ConversionError::UnknownDimension(_))
        ));
        assert!(matches!(
            convert_units(&history, "1", "meters", "celsius", "length"),
            Err(ConversionError::InvalidUnit { .. })
        ));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(history.entries(CalculatorTool::UnitConverter).is_empty());
    }

    #[tokio::test]
    async fn test_calculators() {
        let history = registry();
        let time = calculate_time(&history, "2", "hours", "minutes").unwrap();
        assert_eq!(time.output_value, "120");

        let data = calculate_data(&history, "1024", "kilobytes", "megabytes").unwrap();
        assert_eq!(data.output_value, "1");

        assert!(calculate_data(&history, "1", "hours", "bytes").is_err());
    }

    #[test]
    fn test_list_dimensions() {
        let dimensions = list_dimensions();
        assert_eq!(dimensions.len(), 12);
        assert_eq!(dimensions[0].id, "angle");
        let temperature = dimensions.iter().find(|d| d.id == "temperature").unwrap();
        assert!(!temperature.linear);
        assert_eq!(temperature.unit_count, 3);
    }

    #[test]
    fn test_list_units() {
        let response = list_units("frequency").unwrap();
        let ids: Vec<&str> = response.units.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["gigahertz", "hertz", "kilohertz", "megahertz"]);
        assert_eq!(response.base_unit, "hertz");

        let temps = list_units("temperature").unwrap();
        assert!(temps.units.iter().all(|u| u.factor.is_none()));

        assert!(list_units("nope").is_err());
    }

    #[test]
    fn test_list_quick_conversions() {
        let response = list_quick_conversions("color-converter").unwrap();
        assert_eq!(response.conversions.len(), 5);
        assert!(list_quick_conversions("image-compressor").is_err());
    }
}
