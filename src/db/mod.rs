//! Database module
//!
//! Handles SQLite connection, migrations and the key-value table.

pub mod connection;
pub mod kv;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};
