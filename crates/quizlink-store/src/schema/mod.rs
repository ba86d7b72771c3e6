//! Schema lifecycle
//!
//! Provides:
//! - Embedded DDL for the three quiz tables
//! - Drop (children first) and create (parents first), both idempotent

mod embedded;
mod lifecycle;

pub use embedded::{definition, TableDef};
pub use lifecycle::{create_tables, drop_tables, table_exists};
