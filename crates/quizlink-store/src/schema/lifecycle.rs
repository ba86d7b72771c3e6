//! Drop/create of the quiz tables

#![allow(clippy::result_large_err)]

use crate::errors::{table_error, Result};
use crate::schema::embedded::definition;
use quizlink_core::Table;
use rusqlite::{Connection, OptionalExtension};

/// Drop all quiz tables that exist, children before parents
pub fn drop_tables(conn: &Connection) -> Result<()> {
    for table in Table::drop_order() {
        let def = definition(table);
        conn.execute_batch(def.drop_sql)
            .map_err(|e| table_error("drop_schema", table, e))?;
        tracing::debug!(table = table.name(), "dropped table");
    }
    Ok(())
}

/// Create every missing quiz table, parents before children
pub fn create_tables(conn: &Connection) -> Result<()> {
    for table in Table::ALL {
        let def = definition(table);
        conn.execute_batch(def.create_sql)
            .map_err(|e| table_error("create_schema", table, e))?;
        tracing::debug!(table = table.name(), "ensured table");
    }
    Ok(())
}

/// Whether a known table is present in the database
pub fn table_exists(conn: &Connection, table: Table) -> Result<bool> {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table.name()],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
    .map_err(|e| table_error("table_exists", table, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    #[test]
    fn test_create_then_drop() {
        let conn = open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        for table in Table::ALL {
            assert!(table_exists(&conn, table).unwrap());
        }

        drop_tables(&conn).unwrap();
        for table in Table::ALL {
            assert!(!table_exists(&conn, table).unwrap());
        }
    }

    #[test]
    fn test_drop_on_empty_database() {
        let conn = open_in_memory().unwrap();
        assert!(drop_tables(&conn).is_ok());
    }
}
