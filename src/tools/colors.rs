//! Color MCP Tools

use serde::Serialize;

use crate::catalog::CalculatorTool;
use crate::convert::{format_color, parse_color, ColorFormat, ConversionError, ConversionResult};
use crate::tools::history::HistoryRegistry;

/// Response for convert_color
#[derive(Debug, Serialize)]
pub struct ColorConversionResponse {
    pub from_format: &'static str,
    pub to_format: &'static str,
    pub input_value: String,
    pub output_value: String,
    /// `#rrggbb` swatch for previews, regardless of target format
    pub preview_hex: String,
    pub alpha: f64,
}

/// Convert a color string between notations
pub fn convert_color(
    history: &HistoryRegistry,
    input: &str,
    from_format: &str,
    to_format: &str,
) -> ConversionResult<ColorConversionResponse> {
    let unsupported = || ConversionError::UnsupportedConversion {
        from: from_format.trim().to_lowercase(),
        to: to_format.trim().to_lowercase(),
    };
    let from = ColorFormat::from_str(from_format).ok_or_else(unsupported)?;
    let to = ColorFormat::from_str(to_format).ok_or_else(unsupported)?;

    let color = parse_color(input, from)?;
    let output_value = format_color(&color, to)?;
    let preview_hex = format_color(&color, ColorFormat::Hex)?;
    let alpha = color.to_rgb()?.a;

    history.submit(
        CalculatorTool::ColorConverter,
        input,
        &output_value,
        from.as_str(),
        to.as_str(),
    );

    Ok(ColorConversionResponse {
        from_format: from.as_str(),
        to_format: to.as_str(),
        input_value: input.trim().to_string(),
        output_value,
        preview_hex,
        alpha,
    })
}

/// Supported color format ids
pub fn list_color_formats() -> Vec<&'static str> {
    ColorFormat::ALL.iter().map(|f| f.as_str()).collect()
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
    async fn test_convert_color_with_preview() {
        let history = registry();
        let response = convert_color(&history, "hsla(9, 100%, 64%, 0.5)", "hsla", "rgba").unwrap();
        assert_eq!(response.output_value, "rgba(255, 99, 71, 0.5)");
        assert_eq!(response.preview_hex, "#ff6347");
        assert_eq!(response.alpha, 0.5);
    }

    #[tokio::test]
    async fn test_repeated_conversion_recorded_once() {
        let history = registry();
        for _ in 0..3 {
            convert_color(&history, "#fff", "hex", "rgb").unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        let entries = history.entries(CalculatorTool::ColorConverter);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].output_value, "rgb(255, 255, 255)");
    }

    #[tokio::test]
    async fn test_convert_color_errors() {
        let history = registry();
        assert!(matches!(
            convert_color(&history, "rgb(256, 0, 0)", "rgb", "hex"),
            Err(ConversionError::InvalidInput(_))
        ));
        assert!(matches!(
            convert_color(&history, "#fff", "hex", "cmyk"),
            Err(ConversionError::UnsupportedConversion { .. })
        ));
    }

    #[test]
    fn test_list_color_formats() {
        assert_eq!(list_color_formats(), vec!["hex", "rgb", "rgba", "hsl", "hsla"]);
    }
}
