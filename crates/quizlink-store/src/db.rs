//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

#![allow(clippy::result_large_err)]

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

/// Open a connection as described by `config` and configure it
pub fn open(config: &StoreConfig) -> Result<Connection> {
    let conn = match &config.path {
        Some(path) => Connection::open(path),
        None => Connection::open_in_memory(),
    }
    .map_err(|e| from_rusqlite("open", e))?;

    configure(&conn, config)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    open(&StoreConfig::in_memory())
}

/// Apply per-connection settings
///
/// Foreign keys are a per-connection setting in SQLite and cannot be
/// toggled inside a transaction, so they are switched on here once for the
/// connection's whole lifetime.
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| from_rusqlite("configure", e))?;

    conn.busy_timeout(config.busy_timeout)
        .map_err(|e| from_rusqlite("configure", e))?;

    Ok(())
}

/// Whether foreign key enforcement is on for this connection
pub fn foreign_keys_enabled(conn: &Connection) -> Result<bool> {
    conn.pragma_query_value(None, "foreign_keys", |row| row.get::<_, i64>(0))
        .map(|v| v != 0)
        .map_err(|e| from_rusqlite("configure", e))
}
