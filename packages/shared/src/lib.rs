//! Shared utilities for the meimei-tei virtual bar.
//!
//! Everything here is consumed by the server crate: JST time helpers,
//! the business-hours predicate that gates the bar, and logger setup.

pub mod business_hours;
pub mod logger;
pub mod time;
