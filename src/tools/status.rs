//! MTD Status Tool
//!
//! Provides runtime status information about the MTD service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::tools::history::{HistoryCount, HistoryRegistry};

/// Conversion instructions for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# MTD Conversion Instructions

This guide explains how to use the Multi-Tool Dashboard (MTD) calculators.

## Overview

MTD offers four calculators. Each keeps its own history of the 10 most recent
conversions:

| Tool | MCP tool | History |
|------|----------|---------|
| Unit Converter | `convert_units` | `unit-converter` |
| Color Converter | `convert_color` | `color-converter` |
| Time Calculator | `calculate_time` | `time-calculator` |
| Data Calculator | `calculate_data` | `data-calculator` |

---

## Unit Conversion

1. Call `list_dimensions` to see the 12 dimensions (length, area, volume, mass,
   speed, time, temperature, data_storage, pressure, energy, frequency, angle).
2. Call `list_units` with a dimension to get its unit ids.
3. Call `convert_units` with:
   - `value`: the number as text, e.g. `"12.5"`
   - `from_unit` / `to_unit`: unit ids from the same dimension
   - `dimension`: the dimension id

Units are only convertible within one dimension. `meters` to `celsius` fails
with "Invalid unit".

### Temperature

Temperature is not a simple ratio. Celsius, Fahrenheit and Kelvin are converted
with explicit formulas, e.g. 0 celsius = 32 fahrenheit = 273.15 kelvin.

### Data sizes

`kilobytes`, `megabytes`, ... use 1024 multiples, the same as `kibibytes`,
`mebibytes`, ... so 1024 kilobytes = 1 megabyte. Bit units (`bits`,
`kilobits`, ...) are 8 per byte.

### Output

`output_value` is the display form: thousands separators and at most 8 decimal
places (e.g. `"1,234.5"`). `result` is the raw number.

---

## Color Conversion

Call `convert_color` with `input`, `from_format` and `to_format`. Formats:

| Format | Example |
|--------|---------|
| `hex` | `#ff6347` or `#f63` |
| `rgb` | `rgb(255, 99, 71)` |
| `rgba` | `rgba(255, 99, 71, 0.5)` |
| `hsl` | `hsl(9, 100%, 64%)` |
| `hsla` | `hsla(9, 100%, 64%, 0.5)` |

Channels must be 0-255, hue 0-360, saturation and lightness 0-100, alpha 0-1.
HEX output drops alpha.

---

## Quick Conversions

`list_quick_conversions` returns the preset pairs for a calculator, e.g.
`celsius` to `fahrenheit` or `hex` to `rgb`.

---

## History

- Conversions are recorded after 1 second without a newer conversion on the
  same calculator, so intermediate values are not saved.
- A conversion identical to the most recent entry is not recorded again.
- `get_history` returns entries newest first; `clear_history` empties one
  calculator's list.

---

## Errors

Failed conversions return `{"error": ..., "code": ..., "detail": ...}`:

| error | Cause |
|-------|-------|
| Invalid input | Empty or non-numeric value, malformed color |
| Invalid unit | Unknown dimension, or unit id unknown for the dimension |
| Unsupported conversion | Unknown color format |
| Invalid conversion | Result is not a finite number |
"#;

/// MTD service status
#[derive(Debug, Serialize)]
pub struct MtdStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Database information
    pub database_path: String,
    pub database_size_bytes: Option<u64>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// History entries held per calculator
    pub history: Vec<HistoryCount>,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    /// Get the current status
    pub fn get_status(&self, history: &HistoryRegistry) -> MtdStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MtdStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            history: history.counts(),
        }
    }
}
