//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it owns config loading and the clock seam that
//! feeds an explicit `now` into the schedule evaluator.
//!
//! ## Config loading
//! ```rust,no_run
//! use encontra_kernel::config::load_engine_config;
//!
//! let cfg = load_engine_config(None).unwrap();
//! assert_eq!(cfg.tenancy.apex_label, "encontra");
//! ```
//!
//! ## Clocks
//! ```rust
//! use encontra_kernel::clock::{Clock, FixedClock};
//!
//! let clock = FixedClock::parse("2026-03-14T23:30:00-03:00").unwrap();
//! assert_eq!(clock.now().to_rfc3339(), "2026-03-14T23:30:00-03:00");
//! ```
pub mod clock;
pub mod config;

pub use encontra_domain as domain;
