//! konsel-storage
//!
//! Persistence boundary. Records are JSON values under string keys in a
//! [`store::KeyValueStore`]; [`repo::Repository`] gives them types.

pub mod error;
pub mod repo;
pub mod state;
pub mod store;
