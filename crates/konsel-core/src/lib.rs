//! konsel-core
//!
//! Pure domain types, storage key conventions, and the free-trial window.
//! No I/O. This is the shared vocabulary of the Konsel system.

pub mod error;
pub mod models;
pub mod store_keys;
pub mod trial;
