//! Core types shared across hexdiff facilities
//!
//! This crate provides the foundational vocabulary used by both the error
//! and logging facilities:
//!
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
