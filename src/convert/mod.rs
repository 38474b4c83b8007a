//! Conversion engine
//!
//! Pure functions for unit, temperature and color conversion, plus result
//! formatting. Nothing here touches I/O or shared state.

pub mod color;
pub mod converter;
pub mod error;
pub mod format;
pub mod units;

pub use color::{
    convert_color, format_color, hex_to_rgb, hsl_to_rgb, parse_color, parse_hsl_string,
    parse_rgb_string, rgb_to_hex, rgb_to_hsl, Color, ColorFormat, Hsl, Rgb,
};
pub use converter::{
    convert, convert_str, convert_temperature, parse_dimension, parse_value, Quantity,
};
pub use error::{ConversionError, ConversionResult};
pub use format::format_number;
pub use units::{Dimension, TemperatureUnit};
