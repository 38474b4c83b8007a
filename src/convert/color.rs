//! Color conversion between HEX, RGB(A) and HSL(A)
//!
//! Channel ranges: `r,g,b` in 0-255, `h` in 0-360, `s,l` in 0-100 (percent),
//! alpha in 0-1 defaulting to 1. Out-of-range input is rejected, never clamped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{ConversionError, ConversionResult};

static HEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#?(?:([0-9a-f]{3})|([0-9a-f]{6}))$").expect("valid hex pattern")
});

static RGB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^rgba?\((\d{1,3}),\s*(\d{1,3}),\s*(\d{1,3})(?:,\s*([01]?\.?\d+))?\)$")
        .expect("valid rgb pattern")
});

static HSL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^hsla?\((\d{1,3}),\s*(\d{1,3})%,\s*(\d{1,3})%(?:,\s*([01]?\.?\d+))?\)$")
        .expect("valid hsl pattern")
});

/// Supported color notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 5] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hsl,
        ColorFormat::Hsla,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsla => "hsla",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Some(ColorFormat::Hex),
            "rgb" => Some(ColorFormat::Rgb),
            "rgba" => Some(ColorFormat::Rgba),
            "hsl" => Some(ColorFormat::Hsl),
            "hsla" => Some(ColorFormat::Hsla),
            _ => None,
        }
    }
}

/// An sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }
}

/// A color in hue/saturation/lightness with alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Degrees, 0-360
    pub h: u16,
    /// Percent, 0-100
    pub s: u8,
    /// Percent, 0-100
    pub l: u8,
    pub a: f64,
}

impl Hsl {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l, a: 1.0 }
    }
}

/// A parsed color value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Color {
    /// Normalized `#rrggbb`
    Hex(String),
    Rgb(Rgb),
    Hsl(Hsl),
}

impl Color {
    /// Resolve to RGB, carrying alpha through
    pub fn to_rgb(&self) -> ConversionResult<Rgb> {
        match self {
            Color::Hex(hex) => hex_to_rgb(hex)
                .ok_or_else(|| ConversionError::InvalidInput(format!("'{}' is not a hex color", hex))),
            Color::Rgb(rgb) => Ok(*rgb),
            Color::Hsl(hsl) => Ok(hsl_to_rgb(hsl.h as f64, hsl.s as f64, hsl.l as f64).with_alpha(hsl.a)),
        }
    }
}

// ============================================================================
// Channel conversions
// ============================================================================

/// `#rgb` / `#rrggbb` (case-insensitive, `#` optional) to RGB
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let caps = HEX_RE.captures(hex)?;

    let digits: String = match (caps.get(1), caps.get(2)) {
        (Some(short), _) => short.as_str().chars().flat_map(|c| [c, c]).collect(),
        (None, Some(full)) => full.as_str().to_string(),
        (None, None) => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// RGB to lowercase `#rrggbb`
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// RGB (0-255) to HSL (degrees, percent, percent), rounded to integers
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0, 0, (l * 100.0).round() as u8);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = sector / 6.0;

    // Rounding can land exactly on 360; keep hue in [0, 360)
    let hue = (h * 360.0).round() as u16 % 360;

    Hsl::new(hue, (s * 100.0).round() as u8, (l * 100.0).round() as u8)
}

/// HSL (degrees, percent, percent) to RGB (0-255)
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);

    let k = |n: f64| (n + h / 30.0) % 12.0;
    let f = |n: f64| {
        let k = k(n);
        l - a * (-1.0_f64).max((k - 3.0).min(9.0 - k).min(1.0))
    };
    let channel = |n: f64| (255.0 * f(n)).round().clamp(0.0, 255.0) as u8;

    Rgb::new(channel(0.0), channel(8.0), channel(4.0))
}

// ============================================================================
// String grammars
// ============================================================================

/// Parse `rgb(R, G, B)` or `rgba(R, G, B, A)`
pub fn parse_rgb_string(input: &str) -> Option<Rgb> {
    let caps = RGB_RE.captures(input.trim())?;
    let r: u16 = caps[1].parse().ok()?;
    let g: u16 = caps[2].parse().ok()?;
    let b: u16 = caps[3].parse().ok()?;
    let a = parse_alpha(caps.get(4).map(|m| m.as_str()))?;

    if r > 255 || g > 255 || b > 255 {
        return None;
    }
    Some(Rgb::new(r as u8, g as u8, b as u8).with_alpha(a))
}

/// Parse `hsl(H, S%, L%)` or `hsla(H, S%, L%, A)`
pub fn parse_hsl_string(input: &str) -> Option<Hsl> {
    let caps = HSL_RE.captures(input.trim())?;
    let h: u16 = caps[1].parse().ok()?;
    let s: u16 = caps[2].parse().ok()?;
    let l: u16 = caps[3].parse().ok()?;
    let a = parse_alpha(caps.get(4).map(|m| m.as_str()))?;

    if h > 360 || s > 100 || l > 100 {
        return None;
    }
    Some(Hsl {
        h,
        s: s as u8,
        l: l as u8,
        a,
    })
}

/// Missing alpha means opaque; present alpha must lie in [0, 1]
fn parse_alpha(raw: Option<&str>) -> Option<f64> {
    match raw {
        None => Some(1.0),
        Some(raw) => {
            let a: f64 = raw.parse().ok()?;
            (0.0..=1.0).contains(&a).then_some(a)
        }
    }
}

// ============================================================================
// Parse / format pipeline
// ============================================================================

/// Parse `input` as the declared source format
pub fn parse_color(input: &str, format: ColorFormat) -> ConversionResult<Color> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidInput("color is empty".to_string()));
    }

    let invalid = || {
        ConversionError::InvalidInput(format!("'{}' is not a valid {} color", trimmed, format.as_str()))
    };

    match format {
        ColorFormat::Hex => {
            let rgb = hex_to_rgb(trimmed).ok_or_else(invalid)?;
            Ok(Color::Hex(rgb_to_hex(rgb.r, rgb.g, rgb.b)))
        }
        ColorFormat::Rgb | ColorFormat::Rgba => {
            parse_rgb_string(trimmed).map(Color::Rgb).ok_or_else(invalid)
        }
        ColorFormat::Hsl | ColorFormat::Hsla => {
            parse_hsl_string(trimmed).map(Color::Hsl).ok_or_else(invalid)
        }
    }
}

/// Render a color in the target notation
pub fn format_color(color: &Color, target: ColorFormat) -> ConversionResult<String> {
    let rgb = color.to_rgb()?;

    let output = match target {
        ColorFormat::Hex => rgb_to_hex(rgb.r, rgb.g, rgb.b),
        ColorFormat::Rgb => format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
        ColorFormat::Rgba => format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, rgb.a),
        ColorFormat::Hsl => {
            let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
            format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
        }
        ColorFormat::Hsla => {
            let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
            format!("hsla({}, {}%, {}%, {})", hsl.h, hsl.s, hsl.l, rgb.a)
        }
    };

    Ok(output)
}

/// Parse `input` in `from` notation and render it in `to` notation
pub fn convert_color(input: &str, from: &str, to: &str) -> ConversionResult<String> {
    let unsupported = || ConversionError::UnsupportedConversion {
        from: from.trim().to_lowercase(),
        to: to.trim().to_lowercase(),
    };
    let from_format = ColorFormat::from_str(from).ok_or_else(unsupported)?;
    let to_format = ColorFormat::from_str(to).ok_or_else(unsupported)?;

    let color = parse_color(input, from_format)?;
    format_color(&color, to_format)
}
