//! Registration identity records assembled from the data pool.
//!
//! A [`RegistrationGenerator`] composes names, birthdates, cities, security
//! answers and derived email addresses into [`RegistrationData`]. Pool-backed
//! fields come from a [`RecordProvider`]: [`PooledSource`] draws from a
//! [`PoolManager`](data_pool::manager::PoolManager), [`SyntheticSource`]
//! generates values on the fly and stands in whenever a pool runs empty.

pub mod email;
pub mod error;
pub mod generator;
pub mod model;
pub mod provider;

pub use error::RegistrationError;
pub use generator::{RegistrationConfig, RegistrationGenerator};
pub use model::{Person, RegistrationData, SourceMode};
pub use provider::{PooledSource, RecordProvider, SyntheticSource};
