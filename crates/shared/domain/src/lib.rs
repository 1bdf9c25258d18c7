//! # Domain Models
//!
//! Pure domain types for the venue directory with minimal dependencies
//! (`serde`, `bitflags`). Keep it lean: no I/O and no decision logic, only data,
//! the compiled-in lookup tables and simple helpers.

pub mod config;
pub mod constants;
pub mod plan;
pub mod region;
pub mod schedule;
pub mod text;
pub mod venue;
