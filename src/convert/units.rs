//! Dimensions, unit tables and conversion constants
//!
//! Each linear dimension carries a table of factors expressing how many of a
//! unit make up one base unit (the unit whose factor is 1). Temperature has no
//! factor table and is converted by explicit rules instead.

use serde::{Deserialize, Serialize};

/// A family of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Angle,
    Area,
    DataStorage,
    Energy,
    Frequency,
    Length,
    Mass,
    Pressure,
    Speed,
    Temperature,
    Time,
    Volume,
}

impl Dimension {
    /// All dimensions, sorted by identifier
    pub const ALL: [Dimension; 12] = [
        Dimension::Angle,
        Dimension::Area,
        Dimension::DataStorage,
        Dimension::Energy,
        Dimension::Frequency,
        Dimension::Length,
        Dimension::Mass,
        Dimension::Pressure,
        Dimension::Speed,
        Dimension::Temperature,
        Dimension::Time,
        Dimension::Volume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Angle => "angle",
            Dimension::Area => "area",
            Dimension::DataStorage => "data_storage",
            Dimension::Energy => "energy",
            Dimension::Frequency => "frequency",
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Pressure => "pressure",
            Dimension::Speed => "speed",
            Dimension::Temperature => "temperature",
            Dimension::Time => "time",
            Dimension::Volume => "volume",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "angle" => Some(Dimension::Angle),
            "area" => Some(Dimension::Area),
            "data_storage" | "data" => Some(Dimension::DataStorage),
            "energy" => Some(Dimension::Energy),
            "frequency" => Some(Dimension::Frequency),
            "length" | "distance" => Some(Dimension::Length),
            "mass" | "weight" => Some(Dimension::Mass),
            "pressure" => Some(Dimension::Pressure),
            "speed" => Some(Dimension::Speed),
            "temperature" => Some(Dimension::Temperature),
            "time" => Some(Dimension::Time),
            "volume" => Some(Dimension::Volume),
            _ => None,
        }
    }

    /// Human-readable name ("data_storage" -> "Data Storage")
    pub fn display_name(&self) -> String {
        display_name(self.as_str())
    }

    /// Whether conversion is a pure scale factor
    pub fn is_linear(&self) -> bool {
        !matches!(self, Dimension::Temperature)
    }

    /// The reference unit of the dimension
    pub fn base_unit(&self) -> &'static str {
        match self {
            Dimension::Temperature => "celsius",
            _ => self.factors()[0].0,
        }
    }

    /// Factor table for linear dimensions; empty for temperature
    pub fn factors(&self) -> &'static [(&'static str, f64)] {
        match self {
            Dimension::Angle => ANGLE_FACTORS,
            Dimension::Area => AREA_FACTORS,
            Dimension::DataStorage => DATA_STORAGE_FACTORS,
            Dimension::Energy => ENERGY_FACTORS,
            Dimension::Frequency => FREQUENCY_FACTORS,
            Dimension::Length => LENGTH_FACTORS,
            Dimension::Mass => MASS_FACTORS,
            Dimension::Pressure => PRESSURE_FACTORS,
            Dimension::Speed => SPEED_FACTORS,
            Dimension::Temperature => &[],
            Dimension::Time => TIME_FACTORS,
            Dimension::Volume => VOLUME_FACTORS,
        }
    }

    /// Units of this unit per one base unit
    pub fn factor(&self, unit: &str) -> Option<f64> {
        let unit = normalize_unit(unit);
        self.factors()
            .iter()
            .find(|(id, _)| *id == unit)
            .map(|(_, factor)| *factor)
    }

    /// Unit identifiers, sorted alphabetically
    pub fn unit_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = match self {
            Dimension::Temperature => TemperatureUnit::ALL.iter().map(|u| u.as_str()).collect(),
            _ => self.factors().iter().map(|(id, _)| *id).collect(),
        };
        ids.sort_unstable();
        ids
    }

    pub fn has_unit(&self, unit: &str) -> bool {
        match self {
            Dimension::Temperature => TemperatureUnit::from_str(unit).is_some(),
            _ => self.factor(unit).is_some(),
        }
    }
}

/// Units of the temperature dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    /// Only the canonical identifiers are accepted
    pub fn from_str(s: &str) -> Option<Self> {
        match normalize_unit(s).as_str() {
            "celsius" => Some(TemperatureUnit::Celsius),
            "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "kelvin" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }
}

/// Lowercase and trim a unit identifier before table lookup
pub fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// "nautical_miles" -> "Nautical Miles"
pub fn display_name(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Factor tables (units per one base unit; base unit listed first)
// ============================================================================

const LENGTH_FACTORS: &[(&str, f64)] = &[
    ("meters", 1.0),
    ("kilometers", 0.001),
    ("miles", 0.000621371),
    ("feet", 3.28084),
    ("inches", 39.3701),
    ("yards", 1.09361),
    ("nautical_miles", 0.000539957),
    ("millimeters", 1000.0),
    ("centimeters", 100.0),
];

const AREA_FACTORS: &[(&str, f64)] = &[
    ("square_meters", 1.0),
    ("square_kilometers", 1e-6),
    ("square_miles", 3.861e-7),
    ("square_feet", 10.7639),
    ("square_inches", 1550.0),
    ("square_yards", 1.19599),
    ("acres", 0.000247105),
    ("hectares", 0.0001),
];

const VOLUME_FACTORS: &[(&str, f64)] = &[
    ("cubic_meters", 1.0),
    ("liters", 1000.0),
    ("milliliters", 1e6),
    ("gallons_us", 264.172),
    ("gallons_uk", 219.969),
    ("quarts_us", 1056.69),
    ("pints_us", 2113.38),
    ("fluid_ounces_us", 33814.0),
    ("cubic_feet", 35.3147),
    ("cubic_inches", 61023.7),
];

const MASS_FACTORS: &[(&str, f64)] = &[
    ("kilograms", 1.0),
    ("grams", 1000.0),
    ("milligrams", 1e6),
    ("pounds", 2.20462),
    ("ounces", 35.274),
    ("metric_tonnes", 0.001),
    ("stones", 0.157473),
];

const SPEED_FACTORS: &[(&str, f64)] = &[
    ("meters_per_second", 1.0),
    ("kilometers_per_hour", 3.6),
    ("miles_per_hour", 2.23694),
    ("feet_per_second", 3.28084),
    ("knots", 1.94384),
];

/// Seconds per average Gregorian month (30.436875 days)
pub const SECONDS_PER_MONTH: f64 = 2_629_746.0;
/// Seconds per average Gregorian year (365.2425 days)
pub const SECONDS_PER_YEAR: f64 = 31_556_952.0;

const TIME_FACTORS: &[(&str, f64)] = &[
    ("seconds", 1.0),
    ("minutes", 1.0 / 60.0),
    ("hours", 1.0 / 3600.0),
    ("days", 1.0 / 86_400.0),
    ("weeks", 1.0 / 604_800.0),
    ("milliseconds", 1e3),
    ("microseconds", 1e6),
    ("nanoseconds", 1e9),
    ("months", 1.0 / SECONDS_PER_MONTH),
    ("years", 1.0 / SECONDS_PER_YEAR),
];

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;
const PIB: f64 = TIB * 1024.0;

/// Bits per byte
pub const BITS_PER_BYTE: f64 = 8.0;

// Kilo/mega/... byte units follow the binary convention, same as the
// kibi/mebi/... units. Bit multiples use the same multipliers.
const DATA_STORAGE_FACTORS: &[(&str, f64)] = &[
    ("bytes", 1.0),
    ("bits", BITS_PER_BYTE),
    ("kilobytes", 1.0 / KIB),
    ("megabytes", 1.0 / MIB),
    ("gigabytes", 1.0 / GIB),
    ("terabytes", 1.0 / TIB),
    ("petabytes", 1.0 / PIB),
    ("kibibytes", 1.0 / KIB),
    ("mebibytes", 1.0 / MIB),
    ("gibibytes", 1.0 / GIB),
    ("tebibytes", 1.0 / TIB),
    ("pebibytes", 1.0 / PIB),
    ("kilobits", BITS_PER_BYTE / KIB),
    ("megabits", BITS_PER_BYTE / MIB),
    ("gigabits", BITS_PER_BYTE / GIB),
    ("terabits", BITS_PER_BYTE / TIB),
];

const PRESSURE_FACTORS: &[(&str, f64)] = &[
    ("pascals", 1.0),
    ("kilopascals", 0.001),
    ("megapascals", 1e-6),
    ("bars", 1e-5),
    ("millibars", 0.01),
    ("psi", 0.000145038),
    ("atmospheres", 9.8692e-6),
    ("torr", 0.00750062),
];

const ENERGY_FACTORS: &[(&str, f64)] = &[
    ("joules", 1.0),
    ("kilojoules", 0.001),
    ("calories", 0.239006),
    ("kilocalories", 0.000239006),
    ("watt_hours", 0.000277778),
    ("kilowatt_hours", 2.77778e-7),
    ("electronvolts", 6.242e18),
    ("btu", 0.000947817),
];

const FREQUENCY_FACTORS: &[(&str, f64)] = &[
    ("hertz", 1.0),
    ("kilohertz", 0.001),
    ("megahertz", 1e-6),
    ("gigahertz", 1e-9),
];

const ANGLE_FACTORS: &[(&str, f64)] = &[
    ("degrees", 1.0),
    ("radians", std::f64::consts::PI / 180.0),
    ("gradians", 100.0 / 90.0),
    ("arcminutes", 60.0),
    ("arcseconds", 3600.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_round_trip_ids() {
        for dimension in Dimension::ALL {
            assert_eq!(Dimension::from_str(dimension.as_str()), Some(dimension));
        }
        assert_eq!(Dimension::from_str("Data Storage"), Some(Dimension::DataStorage));
        assert_eq!(Dimension::from_str("luminosity"), None);
    }

    #[test]
    fn test_all_is_sorted() {
        let ids: Vec<&str> = Dimension::ALL.iter().map(|d| d.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_base_units_have_factor_one() {
        for dimension in Dimension::ALL.iter().filter(|d| d.is_linear()) {
            assert_eq!(dimension.factor(dimension.base_unit()), Some(1.0));
        }
        assert_eq!(Dimension::Length.base_unit(), "meters");
        assert_eq!(Dimension::DataStorage.base_unit(), "bytes");
        assert_eq!(Dimension::Temperature.base_unit(), "celsius");
    }

    #[test]
    fn test_factor_lookup() {
        assert_eq!(Dimension::Length.factor("feet"), Some(3.28084));
        assert_eq!(Dimension::Length.factor(" Feet "), Some(3.28084));
        assert_eq!(Dimension::Length.factor("pounds"), None);
        assert_eq!(Dimension::DataStorage.factor("kilobytes"), Some(1.0 / 1024.0));
        assert_eq!(Dimension::Temperature.factor("celsius"), None);
    }

    #[test]
    fn test_unit_ids_sorted() {
        let ids = Dimension::Frequency.unit_ids();
        assert_eq!(ids, vec!["gigahertz", "hertz", "kilohertz", "megahertz"]);

        let temps = Dimension::Temperature.unit_ids();
        assert_eq!(temps, vec!["celsius", "fahrenheit", "kelvin"]);
    }

    #[test]
    fn test_has_unit() {
        assert!(Dimension::Temperature.has_unit("kelvin"));
        assert!(!Dimension::Temperature.has_unit("rankine"));
        assert!(Dimension::Time.has_unit("months"));
        assert!(Dimension::DataStorage.has_unit("megabits"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("nautical_miles"), "Nautical Miles");
        assert_eq!(Dimension::DataStorage.display_name(), "Data Storage");
        assert_eq!(display_name("psi"), "Psi");
    }
}
