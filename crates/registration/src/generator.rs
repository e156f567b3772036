//! Assembles complete registration records.

use std::sync::{Arc, Mutex, MutexGuard};

use data_pool::config::{AgeBucket, default_age_buckets};
use data_pool::manager::PoolManager;
use data_pool::models::Category;
use fake::Fake;
use fake::faker::internet::en::{Password, Username};
use fake::faker::lorem::en::Word;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::email::{fold_ascii, local_part, recovery_address};
use crate::error::RegistrationError;
use crate::model::{RegistrationData, SourceMode};
use crate::provider::{PooledSource, RecordProvider, SyntheticSource};

const PASSWORD_PREFIXES: &[&str] = &["Super", "Cool", "Best", "Top"];

/// Configuration for registration record generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Domains the primary address is registered under.
    pub email_domains: Vec<String>,
    /// Providers used for recovery addresses.
    pub recovery_providers: Vec<String>,
    /// Age policy for synthetic birthdates.
    pub age_buckets: Vec<AgeBucket>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            email_domains: vec![
                "gmx.com".to_string(),
                "gmx.net".to_string(),
                "gmx.us".to_string(),
            ],
            recovery_providers: vec![
                "gmail.com".to_string(),
                "yahoo.com".to_string(),
                "hotmail.com".to_string(),
                "outlook.com".to_string(),
                "proton.me".to_string(),
            ],
            age_buckets: default_age_buckets(),
        }
    }
}

impl RegistrationConfig {
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.email_domains.is_empty() {
            return Err(RegistrationError::Config("email_domains is empty".into()));
        }
        if self.recovery_providers.is_empty() {
            return Err(RegistrationError::Config(
                "recovery_providers is empty".into(),
            ));
        }
        Ok(())
    }
}

/// Composes [`RegistrationData`] from a pooled or a synthetic source.
pub struct RegistrationGenerator {
    config: RegistrationConfig,
    pooled: Option<PooledSource>,
    synthetic: SyntheticSource,
    rng: Mutex<StdRng>,
}

impl RegistrationGenerator {
    /// Generator without a data pool; only [`SourceMode::Synthetic`] works.
    pub fn synthetic(config: RegistrationConfig) -> Result<Self, RegistrationError> {
        config.validate()?;
        Ok(Self {
            synthetic: SyntheticSource::new(&config.age_buckets)?,
            config,
            pooled: None,
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    /// Generator drawing from `manager`, marking drawn rows used when
    /// `mark_as_used` is set.
    pub fn pooled(
        config: RegistrationConfig,
        manager: Arc<PoolManager>,
        mark_as_used: bool,
    ) -> Result<Self, RegistrationError> {
        let mut generator = Self::synthetic(config)?;
        generator.pooled = Some(PooledSource::new(manager, mark_as_used));
        Ok(generator)
    }

    /// Makes the composition steps reproducible. Synthetic field values are
    /// seeded from the same value.
    pub fn with_seed(mut self, seed: u64) -> Result<Self, RegistrationError> {
        self.synthetic = SyntheticSource::with_seed(&self.config.age_buckets, seed)?;
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        Ok(self)
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Generates one complete record.
    ///
    /// In pooled mode a field whose pool is empty is filled from the
    /// synthetic source instead.
    pub async fn generate(&self, mode: SourceMode) -> Result<RegistrationData, RegistrationError> {
        let provider: &dyn RecordProvider = match mode {
            SourceMode::Pooled => self.pooled.as_ref().ok_or(RegistrationError::NoPool)?,
            SourceMode::Synthetic => &self.synthetic,
        };

        let security_question = {
            let mut rng = self.rng();
            Category::ALL[rng.gen_range(0..Category::ALL.len())]
        };

        let person = match provider.person().await? {
            Some(person) => person,
            None => {
                warn!("Names pool is empty, using a synthetic name");
                self.synthetic.generate_person()?
            }
        };

        let city = match provider.city().await? {
            Some(city) => city,
            None => {
                warn!("Cities pool is empty, using a synthetic city");
                self.synthetic.generate_city()
            }
        };

        let security_answer = match provider.security_answer(security_question).await? {
            Some(answer) => answer,
            None => {
                warn!(
                    "No {} answers left in the pool, using a synthetic answer",
                    security_question
                );
                self.synthetic.generate_answer(security_question)
            }
        };

        let mut rng = self.rng();
        let email_local_part = local_part(&person.first_name, &person.last_name, &mut *rng);
        let email_domain = pick(&self.config.email_domains, &mut *rng);
        let password = password(&person.first_name, &person.last_name, &mut *rng);
        let username: String = Username().fake_with_rng(&mut *rng);
        let recovery_email =
            recovery_address(&username, &pick(&self.config.recovery_providers, &mut *rng));

        Ok(RegistrationData {
            first_name: person.first_name,
            last_name: person.last_name,
            email_local_part,
            email_domain,
            password,
            recovery_email,
            birthdate: person.birthdate,
            city,
            security_question,
            security_answer,
        })
    }

    /// Generates `count` records.
    pub async fn generate_batch(
        &self,
        count: usize,
        mode: SourceMode,
    ) -> Result<Vec<RegistrationData>, RegistrationError> {
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(self.generate(mode).await?);
        }
        Ok(records)
    }
}

/// Lists are checked non-empty by [`RegistrationConfig::validate`].
fn pick(list: &[String], rng: &mut impl Rng) -> String {
    list.choose(rng).cloned().unwrap_or_default()
}

/// A password with upper and lower case letters, digits and a symbol.
fn password(first_name: &str, last_name: &str, rng: &mut impl Rng) -> String {
    match rng.gen_range(0..4) {
        0 => {
            let word: String = Word().fake_with_rng(rng);
            format!("{}{}!", capitalize(&word), rng.gen_range(100..=999))
        }
        1 => format!(
            "{}{}{}@",
            capitalize(&fold_ascii(first_name)),
            capitalize(&fold_ascii(last_name)),
            rng.gen_range(10..=99)
        ),
        2 => {
            let prefix = PASSWORD_PREFIXES.choose(rng).copied().unwrap_or("Top");
            let word: String = Word().fake_with_rng(rng);
            format!("{prefix}{}{}#", word.to_lowercase(), rng.gen_range(1..=999))
        }
        _ => {
            let base: String = Password(10..16).fake_with_rng(rng);
            let upper = char::from(rng.gen_range(b'A'..=b'Z'));
            let lower = char::from(rng.gen_range(b'a'..=b'z'));
            format!("{base}{upper}{lower}{}!", rng.gen_range(0..10))
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "X".to_string(),
    }
}
