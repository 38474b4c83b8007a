//! History entry types

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entry that can live in a [`HistoryStore`](super::HistoryStore)
pub trait HistoryItem: Clone + Serialize + DeserializeOwned + Send + 'static {
    /// Whether two entries describe the same conversion, ignoring id and time
    fn same_conversion(&self, other: &Self) -> bool;
}

/// One successful conversion, as shown in a tool's recent list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionHistoryEntry {
    pub id: String,
    pub input_value: String,
    pub output_value: String,
    pub from_format: String,
    pub to_format: String,
    /// Unix epoch milliseconds
    pub timestamp: i64,
}

impl ConversionHistoryEntry {
    /// New entry with a fresh id, stamped now
    pub fn new(
        input_value: impl Into<String>,
        output_value: impl Into<String>,
        from_format: impl Into<String>,
        to_format: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            input_value: input_value.into(),
            output_value: output_value.into(),
            from_format: from_format.into(),
            to_format: to_format.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl HistoryItem for ConversionHistoryEntry {
    fn same_conversion(&self, other: &Self) -> bool {
        self.input_value == other.input_value
            && self.output_value == other.output_value
            && self.from_format == other.from_format
            && self.to_format == other.to_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entries_get_distinct_ids() {
        let a = ConversionHistoryEntry::new("#fff", "rgb(255, 255, 255)", "hex", "rgb");
        let b = ConversionHistoryEntry::new("#fff", "rgb(255, 255, 255)", "hex", "rgb");
        assert_ne!(a.id, b.id);
        assert!(a.same_conversion(&b));
        assert!(a.timestamp > 0);
    }

    #[test]
    fn test_same_conversion_checks_all_fields() {
        let a = ConversionHistoryEntry::new("1", "1,000", "kilometers", "meters");
        let b = ConversionHistoryEntry::new("1", "1,000", "kilometers", "millimeters");
        assert!(!a.same_conversion(&b));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let entry = ConversionHistoryEntry {
            id: "abc".to_string(),
            input_value: "#fff".to_string(),
            output_value: "rgb(255, 255, 255)".to_string(),
            from_format: "hex".to_string(),
            to_format: "rgb".to_string(),
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["inputValue"], "#fff");
        assert_eq!(json["outputValue"], "rgb(255, 255, 255)");
        assert_eq!(json["fromFormat"], "hex");
        assert_eq!(json["toFormat"], "rgb");
        assert_eq!(json["timestamp"], 1_700_000_000_000_i64);
    }
}
