//! Pooled synthetic identity records.
//!
//! Three independently managed pools (names, cities, security answers) are
//! filled with unique synthetic rows and handed out one at a time, each row
//! carrying a usage flag so it is allocated at most once between resets.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use data_pool::prelude::*;
//!
//! let config = PoolConfig::load(None)?;
//! let manager = PoolManager::open(&config).await?;
//!
//! manager.populate(PoolKind::Names, 5000).await?;
//!
//! match manager.draw_name(None, true).await? {
//!     Some(name) => println!("{} {}", name.first_name, name.last_name),
//!     None => println!("names pool exhausted"),
//! }
//!
//! manager.close().await;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod generators;
pub mod manager;
pub mod models;
pub mod synthesizer;
pub mod vocabulary;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{AgeBucket, PoolConfig, PopulationTargets};
    pub use crate::db::PoolStore;
    pub use crate::error::{PoolError, VocabularyError};
    pub use crate::generators::{BirthdatePolicy, age_on};
    pub use crate::manager::{PoolManager, PopulationReport};
    pub use crate::models::{
        Category, CityRecord, DrawFilter, Gender, Locale, NameRecord, PoolCount, PoolKind,
        PoolRecord, PoolStats, SecurityAnswerRecord,
    };
    pub use crate::vocabulary::{StaticVocabulary, VocabularySource, builtin_city_capacity};
}
