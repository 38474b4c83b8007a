//! Tool catalog
//!
//! Stable numeric tool ids mapped to display descriptors, plus the quick
//! conversion pairs each calculator offers. Built once as static tables.

use serde::Serialize;

/// Icon used when a tool id has no entry
pub const FALLBACK_ICON: &str = "database";

/// Tool grouping on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Calculator,
    Compressor,
}

/// Calculators backed by the conversion engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorTool {
    UnitConverter,
    ColorConverter,
    TimeCalculator,
    DataCalculator,
}

impl CalculatorTool {
    pub const ALL: [CalculatorTool; 4] = [
        CalculatorTool::UnitConverter,
        CalculatorTool::ColorConverter,
        CalculatorTool::TimeCalculator,
        CalculatorTool::DataCalculator,
    ];

    pub fn id(&self) -> u32 {
        match self {
            CalculatorTool::UnitConverter => 10,
            CalculatorTool::ColorConverter => 11,
            CalculatorTool::TimeCalculator => 12,
            CalculatorTool::DataCalculator => 13,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorTool::UnitConverter => "unit-converter",
            CalculatorTool::ColorConverter => "color-converter",
            CalculatorTool::TimeCalculator => "time-calculator",
            CalculatorTool::DataCalculator => "data-calculator",
        }
    }

    /// Accepts the slug, the snake_case name or the numeric id
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|tool| {
            tool.slug() == normalized
                || normalized
                    .parse::<u32>()
                    .map(|id| id == tool.id())
                    .unwrap_or(false)
        })
    }

    /// Key the tool's history list is persisted under
    pub fn history_key(&self) -> &'static str {
        match self {
            CalculatorTool::UnitConverter => "unitConverterHistory",
            CalculatorTool::ColorConverter => "colorConverterHistory",
            CalculatorTool::TimeCalculator => "timeCalculatorHistory",
            CalculatorTool::DataCalculator => "dataCalculatorHistory",
        }
    }

    pub fn descriptor(&self) -> &'static ToolDescriptor {
        // Every calculator id is present in TOOLS
        TOOLS
            .iter()
            .find(|t| t.id == self.id())
            .unwrap_or(&TOOLS[0])
    }

    /// Preset from/to pairs offered as one-click shortcuts
    pub fn quick_conversions(&self) -> &'static [QuickConversion] {
        match self {
            CalculatorTool::UnitConverter => UNIT_QUICK_CONVERSIONS,
            CalculatorTool::ColorConverter => COLOR_QUICK_CONVERSIONS,
            CalculatorTool::TimeCalculator => TIME_QUICK_CONVERSIONS,
            CalculatorTool::DataCalculator => DATA_QUICK_CONVERSIONS,
        }
    }
}

/// How a tool is presented on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
    pub icon: &'static str,
}

/// A preset conversion pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickConversion {
    /// Dimension id for unit pairs; `None` for color and single-dimension tools
    pub dimension: Option<&'static str>,
    pub from: &'static str,
    pub to: &'static str,
    pub label: &'static str,
}

const fn pair(
    dimension: Option<&'static str>,
    from: &'static str,
    to: &'static str,
    label: &'static str,
) -> QuickConversion {
    QuickConversion {
        dimension,
        from,
        to,
        label,
    }
}

/// All tools, ordered by id
pub static TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        id: 10,
        name: "Unit Converter",
        slug: "unit-converter",
        description: "Convert between units of length, mass, temperature, volume and more",
        category: ToolCategory::Calculator,
        icon: "refresh-cw",
    },
    ToolDescriptor {
        id: 11,
        name: "Color Converter",
        slug: "color-converter",
        description: "Convert colors between HEX, RGB(A) and HSL(A)",
        category: ToolCategory::Calculator,
        icon: "palette",
    },
    ToolDescriptor {
        id: 12,
        name: "Time Calculator",
        slug: "time-calculator",
        description: "Convert durations from nanoseconds to years",
        category: ToolCategory::Calculator,
        icon: "clock",
    },
    ToolDescriptor {
        id: 13,
        name: "Data Calculator",
        slug: "data-calculator",
        description: "Convert data sizes between bits, bytes and binary multiples",
        category: ToolCategory::Calculator,
        icon: "database",
    },
    ToolDescriptor {
        id: 14,
        name: "Image Compressor",
        slug: "image-compressor",
        description: "Compress images in the browser",
        category: ToolCategory::Compressor,
        icon: "file-image",
    },
    ToolDescriptor {
        id: 16,
        name: "Code Minifier",
        slug: "code-minifier",
        description: "Minify JavaScript, CSS and HTML",
        category: ToolCategory::Compressor,
        icon: "file-code",
    },
    ToolDescriptor {
        id: 17,
        name: "JSON Compressor",
        slug: "json-compressor",
        description: "Minify or pretty-print JSON documents",
        category: ToolCategory::Compressor,
        icon: "braces",
    },
];

/// Look up a tool by numeric id
pub fn tool_by_id(id: u32) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|t| t.id == id)
}

/// Look up a tool by slug
pub fn tool_by_slug(slug: &str) -> Option<&'static ToolDescriptor> {
    let slug = slug.trim().to_lowercase();
    TOOLS.iter().find(|t| t.slug == slug)
}

/// Icon name for a tool id, falling back for unknown ids
pub fn icon_for(id: u32) -> &'static str {
    tool_by_id(id).map(|t| t.icon).unwrap_or(FALLBACK_ICON)
}

// ============================================================================
// Quick conversions
// ============================================================================

static UNIT_QUICK_CONVERSIONS: &[QuickConversion] = &[
    pair(Some("length"), "meters", "feet", "Meters → Feet"),
    pair(Some("length"), "kilometers", "miles", "Kilometers → Miles"),
    pair(Some("temperature"), "celsius", "fahrenheit", "Celsius → Fahrenheit"),
    pair(Some("temperature"), "fahrenheit", "celsius", "Fahrenheit → Celsius"),
    pair(Some("temperature"), "celsius", "kelvin", "Celsius → Kelvin"),
    pair(Some("mass"), "kilograms", "pounds", "Kilograms → Pounds"),
    pair(Some("mass"), "grams", "ounces", "Grams → Ounces"),
    pair(Some("data_storage"), "gigabytes", "megabytes", "Gigabytes → Megabytes"),
    pair(Some("data_storage"), "megabytes", "kilobytes", "Megabytes → Kilobytes"),
    pair(Some("time"), "hours", "minutes", "Hours → Minutes"),
    pair(Some("time"), "days", "hours", "Days → Hours"),
];

static COLOR_QUICK_CONVERSIONS: &[QuickConversion] = &[
    pair(None, "hex", "rgb", "HEX → RGB"),
    pair(None, "rgb", "hex", "RGB → HEX"),
    pair(None, "rgb", "hsl", "RGB → HSL"),
    pair(None, "hsl", "rgb", "HSL → RGB"),
    pair(None, "hex", "hsl", "HEX → HSL"),
];

static TIME_QUICK_CONVERSIONS: &[QuickConversion] = &[
    pair(None, "nanoseconds", "microseconds", "Nanoseconds → Microseconds"),
    pair(None, "microseconds", "milliseconds", "Microseconds → Milliseconds"),
    pair(None, "milliseconds", "seconds", "Milliseconds → Seconds"),
    pair(None, "seconds", "minutes", "Seconds → Minutes"),
    pair(None, "minutes", "hours", "Minutes → Hours"),
    pair(None, "hours", "days", "Hours → Days"),
    pair(None, "days", "weeks", "Days → Weeks"),
];

static DATA_QUICK_CONVERSIONS: &[QuickConversion] = &[
    pair(None, "bytes", "kilobytes", "Bytes → Kilobytes (KB)"),
    pair(None, "kilobytes", "megabytes", "KB → Megabytes (MB)"),
    pair(None, "megabytes", "gigabytes", "MB → Gigabytes (GB)"),
    pair(None, "gigabytes", "terabytes", "GB → Terabytes (TB)"),
    pair(None, "bytes", "kibibytes", "Bytes → Kibibytes (KiB)"),
    pair(None, "kibibytes", "mebibytes", "KiB → Mebibytes (MiB)"),
    pair(None, "mebibytes", "gibibytes", "MiB → Gibibytes (GiB)"),
    pair(None, "gibibytes", "tebibytes", "GiB → Tebibytes (TiB)"),
];
