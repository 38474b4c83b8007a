//! Key-value table access
//!
//! Plain string keys mapped to string values, one row per key.

use rusqlite::{params, Connection, OptionalExtension};

use super::connection::DbResult;

/// Read the value stored under `key`
pub fn get(conn: &Connection, key: &str) -> DbResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

/// Insert or replace the value stored under `key`
pub fn set(conn: &Connection, key: &str, value: &str) -> DbResult<()> {
    conn.execute(
        r#"
        INSERT INTO kv_store (key, value, updated_at)
        VALUES (?1, ?2, datetime('now'))
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
        params![key, value],
    )?;
    Ok(())
}

/// Delete `key`; returns whether a row was removed
pub fn delete(conn: &Connection, key: &str) -> DbResult<bool> {
    let removed = conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
    Ok(removed > 0)
}

/// All stored keys, sorted
pub fn keys(conn: &Connection) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
    let keys = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_get_missing_key() {
        let conn = setup();
        assert_eq!(get(&conn, "nothing").unwrap(), None);
    }

    #[test]
    fn test_set_then_overwrite() {
        let conn = setup();
        set(&conn, "colorConverterHistory", "[]").unwrap();
        set(&conn, "colorConverterHistory", "[1]").unwrap();
        assert_eq!(get(&conn, "colorConverterHistory").unwrap().as_deref(), Some("[1]"));
        assert_eq!(keys(&conn).unwrap(), vec!["colorConverterHistory".to_string()]);
    }

    #[test]
    fn test_delete() {
        let conn = setup();
        set(&conn, "a", "1").unwrap();
        assert!(delete(&conn, "a").unwrap());
        assert!(!delete(&conn, "a").unwrap());
        assert_eq!(get(&conn, "a").unwrap(), None);
    }
}
