//! Unit conversion functions
//!
//! Linear dimensions go through the base unit: `value / factor[from] * factor[to]`.
//! Temperature uses explicit pairwise rules.

use serde::{Deserialize, Serialize};

use super::error::{ConversionError, ConversionResult};
use super::units::{normalize_unit, Dimension, TemperatureUnit};

/// A value expressed in a unit of some dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Convert into another unit of the same dimension
    pub fn convert_to(&self, to_unit: &str, dimension: Dimension) -> ConversionResult<Quantity> {
        let value = convert(self.value, &self.unit, to_unit, dimension)?;
        Ok(Quantity::new(value, normalize_unit(to_unit)))
    }
}

/// Parse raw form input into a finite number
///
/// Empty, non-numeric and non-finite input (`inf`, `NaN`) are rejected.
pub fn parse_value(raw: &str) -> ConversionResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidInput("value is empty".to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::InvalidInput(format!("'{}' is not a number", trimmed)))?;

    if !value.is_finite() {
        return Err(ConversionError::InvalidInput(format!(
            "'{}' is not a finite number",
            trimmed
        )));
    }

    Ok(value)
}

/// Resolve a dimension identifier
pub fn parse_dimension(raw: &str) -> ConversionResult<Dimension> {
    Dimension::from_str(raw).ok_or_else(|| ConversionError::UnknownDimension(raw.trim().to_string()))
}

/// Convert `value` from one unit to another within `dimension`
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    dimension: Dimension,
) -> ConversionResult<f64> {
    let result = match dimension {
        Dimension::Temperature => {
            let from = temperature_unit(from_unit)?;
            let to = temperature_unit(to_unit)?;
            convert_temperature(value, from, to)
        }
        _ => convert_linear(value, from_unit, to_unit, dimension)?,
    };

    if !result.is_finite() {
        return Err(ConversionError::ConversionUndefined {
            from: normalize_unit(from_unit),
            to: normalize_unit(to_unit),
        });
    }

    Ok(result)
}

/// Parse raw input and convert it in one step
pub fn convert_str(
    raw: &str,
    from_unit: &str,
    to_unit: &str,
    dimension: Dimension,
) -> ConversionResult<f64> {
    let value = parse_value(raw)?;
    convert(value, from_unit, to_unit, dimension)
}

fn convert_linear(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    dimension: Dimension,
) -> ConversionResult<f64> {
    let from_factor = linear_factor(from_unit, dimension)?;
    let to_factor = linear_factor(to_unit, dimension)?;

    // Same unit short-circuits so the value comes back bit-for-bit
    if normalize_unit(from_unit) == normalize_unit(to_unit) {
        return Ok(value);
    }

    let base_value = value / from_factor;
    Ok(base_value * to_factor)
}

fn linear_factor(unit: &str, dimension: Dimension) -> ConversionResult<f64> {
    dimension.factor(unit).ok_or_else(|| ConversionError::InvalidUnit {
        unit: normalize_unit(unit),
        dimension: dimension.as_str().to_string(),
    })
}

fn temperature_unit(unit: &str) -> ConversionResult<TemperatureUnit> {
    TemperatureUnit::from_str(unit).ok_or_else(|| ConversionError::InvalidUnit {
        unit: normalize_unit(unit),
        dimension: Dimension::Temperature.as_str().to_string(),
    })
}

/// Convert between temperature scales
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    match (from, to) {
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Celsius, Kelvin) => value + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_kilobytes_to_megabytes() {
        let result = convert(1024.0, "kilobytes", "megabytes", Dimension::DataStorage).unwrap();
        assert_eq!(result, 1.0);
    }

    #[test]
    fn test_celsius_fahrenheit() {
        assert_eq!(
            convert(0.0, "celsius", "fahrenheit", Dimension::Temperature).unwrap(),
            32.0
        );
        assert_eq!(
            convert(32.0, "fahrenheit", "celsius", Dimension::Temperature).unwrap(),
            0.0
        );
        assert_eq!(
            convert(100.0, "celsius", "fahrenheit", Dimension::Temperature).unwrap(),
            212.0
        );
    }

    #[test]
    fn test_kelvin_rules() {
        let k = convert(0.0, "celsius", "kelvin", Dimension::Temperature).unwrap();
        assert!(approx(k, 273.15));

        let c = convert(273.15, "kelvin", "celsius", Dimension::Temperature).unwrap();
        assert!(approx(c, 0.0));

        let k = convert(212.0, "fahrenheit", "kelvin", Dimension::Temperature).unwrap();
        assert!(approx(k, 373.15));

        let f = convert(373.15, "kelvin", "fahrenheit", Dimension::Temperature).unwrap();
        assert!(approx(f, 212.0));
    }

    #[test]
    fn test_identity_for_every_unit() {
        let samples = [0.0, 1.0, -40.0, 0.1, 123_456.789];
        for dimension in Dimension::ALL {
            for unit in dimension.unit_ids() {
                for value in samples {
                    let result = convert(value, unit, unit, dimension).unwrap();
                    assert_eq!(result, value, "{} {} in {}", value, unit, dimension.as_str());
                }
            }
        }
    }

    #[test]
    fn test_linear_conversions() {
        let feet = convert(1.0, "meters", "feet", Dimension::Length).unwrap();
        assert!(approx(feet, 3.28084));

        let minutes = convert(2.0, "hours", "minutes", Dimension::Time).unwrap();
        assert!(approx(minutes, 120.0));

        let bits = convert(1.0, "kilobytes", "kilobits", Dimension::DataStorage).unwrap();
        assert!(approx(bits, 8.0));

        let radians = convert(180.0, "degrees", "radians", Dimension::Angle).unwrap();
        assert!(approx(radians, std::f64::consts::PI));

        let days = convert(1.0, "years", "days", Dimension::Time).unwrap();
        assert!(approx(days, 365.2425));
    }

    #[test]
    fn test_invalid_unit() {
        let err = convert(1.0, "meters", "pounds", Dimension::Length).unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidUnit {
                unit: "pounds".to_string(),
                dimension: "length".to_string(),
            }
        );

        let err = convert(1.0, "rankine", "celsius", Dimension::Temperature).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidUnit { .. }));
    }

    #[test]
    fn test_non_finite_result_is_undefined() {
        let err = convert(f64::MAX, "kilograms", "grams", Dimension::Mass).unwrap_err();
        assert!(matches!(err, ConversionError::ConversionUndefined { .. }));

        let err = convert(f64::MAX, "celsius", "fahrenheit", Dimension::Temperature).unwrap_err();
        assert!(matches!(err, ConversionError::ConversionUndefined { .. }));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 42.5 ").unwrap(), 42.5);
        assert_eq!(parse_value("-1e3").unwrap(), -1000.0);
        assert!(matches!(parse_value(""), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(parse_value("   "), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(parse_value("abc"), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(parse_value("inf"), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(parse_value("NaN"), Err(ConversionError::InvalidInput(_))));
    }

    #[test]
    fn test_convert_str() {
        let result = convert_str("1024", "kilobytes", "megabytes", Dimension::DataStorage).unwrap();
        assert_eq!(result, 1.0);
        assert!(convert_str("ten", "meters", "feet", Dimension::Length).is_err());
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("temperature").unwrap(), Dimension::Temperature);
        assert_eq!(
            parse_dimension("luminosity").unwrap_err(),
            ConversionError::UnknownDimension("luminosity".to_string())
        );
    }

    #[test]
    fn test_quantity_convert_to() {
        let q = Quantity::new(1.0, "Kilometers");
        let meters = q.convert_to("METERS", Dimension::Length).unwrap();
        assert_eq!(meters.unit, "meters");
        assert!(approx(meters.value, 1000.0));
    }
}
