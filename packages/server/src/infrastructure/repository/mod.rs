//! Concrete store implementations.
//!
//! Only in-memory variants exist: all state is intentionally lost on
//! restart and on the closing sweep.

pub mod inmemory;

pub use inmemory::{InMemorySessionStore, InMemoryUserRegistry};
