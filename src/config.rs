//! Runtime configuration from environment variables
//!
//! - `MTD_DATABASE_PATH`: SQLite file (default `<project>/data/mtd.db`)
//! - `MTD_HISTORY_DEBOUNCE_MS`: quiet period before history writes (default 1000)

use std::path::PathBuf;
use std::time::Duration;

use crate::history::DEFAULT_DEBOUNCE;

pub const DATABASE_PATH_VAR: &str = "MTD_DATABASE_PATH";
pub const DEBOUNCE_MS_VAR: &str = "MTD_HISTORY_DEBOUNCE_MS";

/// Get the database path from environment or use default
pub fn database_path() -> PathBuf {
    std::env::var(DATABASE_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_database_path())
}

fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path.push("mtd.db");
    path
}

/// History debounce delay from environment or the default
pub fn history_debounce() -> Duration {
    parse_debounce(std::env::var(DEBOUNCE_MS_VAR).ok().as_deref())
}

fn parse_debounce(raw: Option<&str>) -> Duration {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_DEBOUNCE,
        Some(raw) => match raw.parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_) => {
                tracing::warn!(
                    "Ignoring invalid {}='{}', using {}ms",
                    DEBOUNCE_MS_VAR,
                    raw,
                    DEFAULT_DEBOUNCE.as_millis()
                );
                DEFAULT_DEBOUNCE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_debounce() {
        assert_eq!(parse_debounce(None), DEFAULT_DEBOUNCE);
        assert_eq!(parse_debounce(Some("")), DEFAULT_DEBOUNCE);
        assert_eq!(parse_debounce(Some("250")), Duration::from_millis(250));
        assert_eq!(parse_debounce(Some("soon")), DEFAULT_DEBOUNCE);
    }

    #[test]
    fn test_default_database_path_ends_with_file() {
        let path = default_database_path();
        assert!(path.ends_with("data/mtd.db"));
    }
}
