//! Configuration types for pool population and storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PoolError;
use crate::models::{Locale, PoolKind};
use crate::vocabulary::builtin_city_capacity;

/// Environment variable overriding the configured store location.
pub const DB_PATH_ENV: &str = "DATA_POOL_DB";

/// An inclusive age range and its share of generated birthdates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBucket {
    pub min_age: i32,
    pub max_age: i32,
    pub weight: f64,
}

impl AgeBucket {
    pub const fn new(min_age: i32, max_age: i32, weight: f64) -> Self {
        Self {
            min_age,
            max_age,
            weight,
        }
    }

    pub fn contains(&self, age: i32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// Default age distribution: 18-25 (30%), 26-35 (40%), 36-50 (20%), 51-65 (10%).
pub fn default_age_buckets() -> Vec<AgeBucket> {
    vec![
        AgeBucket::new(18, 25, 0.30),
        AgeBucket::new(26, 35, 0.40),
        AgeBucket::new(36, 50, 0.20),
        AgeBucket::new(51, 65, 0.10),
    ]
}

/// Number of records each pool is populated up to.
///
/// The city default is every built-in city, since cities are unique per
/// locale and the tables hold nothing beyond real names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationTargets {
    pub names: u64,
    pub cities: u64,
    pub security_answers: u64,
}

impl PopulationTargets {
    pub fn get(&self, kind: PoolKind) -> u64 {
        match kind {
            PoolKind::Names => self.names,
            PoolKind::Cities => self.cities,
            PoolKind::SecurityAnswers => self.security_answers,
        }
    }
}

impl Default for PopulationTargets {
    fn default() -> Self {
        Self {
            names: 100_000,
            cities: builtin_city_capacity(),
            security_answers: 10_000,
        }
    }
}

/// Configuration for the pool store and population runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Location of the SQLite file holding all three pools.
    pub db_path: PathBuf,

    /// Records generated and committed per transaction.
    pub batch_size: usize,

    /// Resamples per candidate before a lane is considered exhausted.
    pub max_retries: usize,

    /// Connections held open against the store.
    pub max_connections: u32,

    pub targets: PopulationTargets,

    pub age_buckets: Vec<AgeBucket>,

    /// Locales records are synthesized for.
    pub locales: Vec<Locale>,

    /// Per-locale sampling weights keyed by locale tag. Missing locales fall
    /// back to [`Locale::default_weight`].
    pub locale_weights: BTreeMap<String, f64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("data/data_pool.db"),
            batch_size: 1000,
            max_retries: 100,
            max_connections: 1,
            targets: PopulationTargets::default(),
            age_buckets: default_age_buckets(),
            locales: Locale::ALL.to_vec(),
            locale_weights: BTreeMap::new(),
        }
    }
}

impl PoolConfig {
    /// Loads configuration from an optional TOML file, then applies the
    /// [`DB_PATH_ENV`] override.
    pub fn load(path: Option<&Path>) -> Result<Self, PoolError> {
        let mut config = match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };

        if let Ok(db_path) = std::env::var(DB_PATH_ENV)
            && !db_path.trim().is_empty()
        {
            config.db_path = PathBuf::from(db_path.trim());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, PoolError> {
        toml::from_str(text).map_err(|e| PoolError::Config(e.to_string()))
    }

    pub fn weight_of(&self, locale: Locale) -> f64 {
        self.locale_weights
            .get(locale.as_str())
            .copied()
            .unwrap_or_else(|| locale.default_weight())
    }

    pub fn validate(&self) -> Result<(), PoolError> {
        if self.batch_size == 0 {
            return Err(PoolError::Config("batch_size must be positive".into()));
        }
        if self.max_retries == 0 {
            return Err(PoolError::Config("max_retries must be positive".into()));
        }
        if self.max_connections == 0 {
            return Err(PoolError::Config("max_connections must be positive".into()));
        }
        if self.locales.is_empty() {
            return Err(PoolError::Config("at least one locale must be enabled".into()));
        }
        for tag in self.locale_weights.keys() {
            tag.parse::<Locale>()?;
        }
        if self.locales.iter().any(|&l| self.weight_of(l) <= 0.0) {
            return Err(PoolError::Config("locale weights must be positive".into()));
        }
        if self.age_buckets.is_empty() {
            return Err(PoolError::Config("age_buckets must not be empty".into()));
        }
        for bucket in &self.age_buckets {
            if bucket.min_age < 0 || bucket.max_age < bucket.min_age || bucket.weight <= 0.0 {
                return Err(PoolError::Config(format!("invalid age bucket {bucket:?}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PoolConfig::default();
        config.validate().unwrap();
        assert_eq!(config.batch_size, 1000);
        assert_eq!(config.targets.get(PoolKind::Names), 100_000);
        assert_eq!(config.targets.get(PoolKind::Cities), builtin_city_capacity());
        assert_eq!(config.targets.get(PoolKind::SecurityAnswers), 10_000);
        assert_eq!(config.locales.len(), 14);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PoolConfig::from_toml(
            r#"
            db_path = "/tmp/pool.db"
            batch_size = 250
            locales = ["en_US", "de_DE"]

            [targets]
            names = 5000

            [locale_weights]
            de_DE = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/pool.db"));
        assert_eq!(config.batch_size, 250);
        assert_eq!(config.targets.names, 5000);
        assert_eq!(config.targets.cities, builtin_city_capacity());
        assert_eq!(config.locales, vec![Locale::EnUs, Locale::DeDe]);
        assert_eq!(config.weight_of(Locale::DeDe), 0.5);
        assert_eq!(config.weight_of(Locale::EnUs), 0.25);
        assert_eq!(config.age_buckets, default_age_buckets());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = PoolConfig {
            batch_size: 0,
            ..PoolConfig::default()
        };
        assert!(matches!(config.validate(), Err(PoolError::Config(_))));

        let config = PoolConfig {
            age_buckets: vec![AgeBucket::new(40, 30, 1.0)],
            ..PoolConfig::default()
        };
        assert!(matches!(config.validate(), Err(PoolError::Config(_))));

        assert!(PoolConfig::from_toml("locales = [\"xx_XX\"]").is_err());
    }
}
