//! Durable storage for the pools.
//!
//! The [`PoolStore`] holds names, cities and security answers in a single
//! SQLite file, with batch-atomic inserts, random unused-row draws, and
//! usage-flag bookkeeping.

mod entry;
mod store;

pub use entry::{NewCity, NewName, NewSecurityAnswer, PoolEntry};
pub use store::PoolStore;
