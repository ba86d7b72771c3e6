//! Core types shared across quizlink facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error facility and the logging facility, so that every crate emits
//! the same field keys and event names.

pub mod schema;
