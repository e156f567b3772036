//! The pool manager: synthesis, storage and allocation behind one handle.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{PoolConfig, PopulationTargets};
use crate::db::{PoolEntry, PoolStore};
use crate::error::PoolError;
use crate::generators::{BirthdatePolicy, CityGenerator, NameGenerator, SecurityAnswerGenerator};
use crate::models::{
    Category, CityRecord, DrawFilter, Gender, Locale, NameRecord, PoolCount, PoolKind, PoolRecord,
    PoolStats, SecurityAnswerRecord,
};
use crate::synthesizer::{RecordGenerator, Synthesizer};
use crate::vocabulary::{StaticVocabulary, VocabularySource};

/// Times a rejected batch is regenerated before the rejection is surfaced.
const MAX_BATCH_REJECTIONS: usize = 3;

/// Outcome of a population run for one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationReport {
    pub kind: PoolKind,
    pub target: u64,
    /// Rows committed by this run.
    pub inserted: u64,
    /// Rows in the pool after the run.
    pub total: u64,
    pub target_met: bool,
    /// Locales or categories that ran out of unseen values.
    pub exhausted_lanes: Vec<String>,
}

/// Owns the store handle for its lifetime. Open with [`PoolManager::open`],
/// share by reference (or `Arc`), and release with [`PoolManager::close`].
pub struct PoolManager {
    store: PoolStore,
    config: PoolConfig,
    vocabulary: Arc<dyn VocabularySource>,
}

impl PoolManager {
    /// Opens the store at `config.db_path` with the built-in vocabulary.
    pub async fn open(config: &PoolConfig) -> Result<Self, PoolError> {
        let vocabulary = StaticVocabulary::with_locales(config.locales.iter().copied());
        Self::open_with_vocabulary(config, Arc::new(vocabulary)).await
    }

    pub async fn open_with_vocabulary(
        config: &PoolConfig,
        vocabulary: Arc<dyn VocabularySource>,
    ) -> Result<Self, PoolError> {
        config.validate()?;
        let store = PoolStore::open(&config.db_path, config.max_connections).await?;
        Ok(Self {
            store,
            config: config.clone(),
            vocabulary,
        })
    }

    pub async fn close(self) {
        self.store.close().await;
        info!("Pool manager closed");
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn store(&self) -> &PoolStore {
        &self.store
    }

    pub fn vocabulary(&self) -> &dyn VocabularySource {
        self.vocabulary.as_ref()
    }

    /// Synthesizes and inserts rows until the pool holds `target` rows or
    /// every lane is exhausted.
    pub async fn populate(
        &self,
        kind: PoolKind,
        target: u64,
    ) -> Result<PopulationReport, PoolError> {
        match kind {
            PoolKind::Names => {
                let birthdates = BirthdatePolicy::today_utc(&self.config.age_buckets)?;
                let generator = NameGenerator::new(self.vocabulary.clone(), birthdates, |locale| {
                    self.config.weight_of(locale)
                });
                self.populate_with(generator, target).await
            }
            PoolKind::Cities => {
                let generator = CityGenerator::new(self.vocabulary.clone(), |locale| {
                    self.config.weight_of(locale)
                });
                self.populate_with(generator, target).await
            }
            PoolKind::SecurityAnswers => {
                let generator = SecurityAnswerGenerator::new(self.vocabulary.as_ref());
                self.populate_with(generator, target).await
            }
        }
    }

    /// Populates every pool to its target, names first.
    pub async fn populate_all(
        &self,
        targets: &PopulationTargets,
    ) -> Result<Vec<PopulationReport>, PoolError> {
        let mut reports = Vec::with_capacity(PoolKind::ALL.len());
        for kind in PoolKind::ALL {
            reports.push(self.populate(kind, targets.get(kind)).await?);
        }
        Ok(reports)
    }

    async fn populate_with<G: RecordGenerator>(
        &self,
        generator: G,
        target: u64,
    ) -> Result<PopulationReport, PoolError> {
        let kind = <G::Entry as PoolEntry>::KIND;
        let initial = self.store.count(kind).await?.total;
        let mut total = initial;

        if total >= target {
            info!("{} pool already holds {} rows (target {})", kind, total, target);
            return Ok(PopulationReport {
                kind,
                target,
                inserted: 0,
                total,
                target_met: true,
                exhausted_lanes: Vec::new(),
            });
        }

        info!("Populating {} pool: {} -> {} rows", kind, total, target);

        let mut synthesizer = Synthesizer::new(generator, self.config.max_retries)?;
        synthesizer.remember(self.store.existing_keys::<G::Entry>().await?);

        let mut rng = StdRng::from_entropy();
        let mut rejections = 0;

        while total < target {
            let wanted = (target - total).min(self.config.batch_size as u64) as usize;
            let batch = synthesizer.next_batch(wanted, &mut rng)?;
            if batch.is_empty() {
                break;
            }

            match self.store.insert_batch(&batch).await {
                Ok(inserted) => {
                    total += inserted;
                    info!("  Inserted {}/{} {}", total, target, kind);
                }
                Err(PoolError::DuplicateKeyRejected { .. })
                    if rejections < MAX_BATCH_REJECTIONS =>
                {
                    rejections += 1;
                    warn!(
                        "{} batch rejected on duplicate key, reloading keys (attempt {}/{})",
                        kind, rejections, MAX_BATCH_REJECTIONS
                    );
                    synthesizer.reload(self.store.existing_keys::<G::Entry>().await?)?;
                    total = self.store.count(kind).await?.total;
                }
                Err(e) => return Err(e),
            }
        }

        let exhausted_lanes: Vec<String> = synthesizer
            .exhausted_lanes()
            .iter()
            .map(ToString::to_string)
            .collect();
        let target_met = total >= target;

        if target_met {
            info!("Populated {} pool with {} rows", kind, total);
        } else {
            warn!(
                "{} pool stopped at {}/{} rows; exhausted lanes: {}",
                kind,
                total,
                target,
                exhausted_lanes.join(", ")
            );
        }

        Ok(PopulationReport {
            kind,
            target,
            inserted: total.saturating_sub(initial),
            total,
            target_met,
            exhausted_lanes,
        })
    }

    /// Draws one unused record. `None` means the pool (or the filtered
    /// slice of it) has nothing left, and callers fall back to another source.
    pub async fn draw(
        &self,
        kind: PoolKind,
        mark_as_used: bool,
        filter: Option<DrawFilter>,
    ) -> Result<Option<PoolRecord>, PoolError> {
        let record = self.store.draw_random(kind, filter, mark_as_used).await?;
        match &record {
            Some(record) => debug!("Drew {} #{}", kind, record.id()),
            None => debug!("{} pool empty for filter {:?}", kind, filter),
        }
        Ok(record)
    }

    pub async fn draw_name(
        &self,
        locale: Option<Locale>,
        mark_as_used: bool,
    ) -> Result<Option<NameRecord>, PoolError> {
        match self
            .draw(PoolKind::Names, mark_as_used, locale.map(DrawFilter::Locale))
            .await?
        {
            Some(PoolRecord::Name(record)) => Ok(Some(record)),
            Some(other) => Err(unexpected(PoolKind::Names, &other)),
            None => Ok(None),
        }
    }

    pub async fn draw_city(
        &self,
        locale: Option<Locale>,
        mark_as_used: bool,
    ) -> Result<Option<CityRecord>, PoolError> {
        match self
            .draw(PoolKind::Cities, mark_as_used, locale.map(DrawFilter::Locale))
            .await?
        {
            Some(PoolRecord::City(record)) => Ok(Some(record)),
            Some(other) => Err(unexpected(PoolKind::Cities, &other)),
            None => Ok(None),
        }
    }

    pub async fn draw_answer(
        &self,
        category: Option<Category>,
        mark_as_used: bool,
    ) -> Result<Option<SecurityAnswerRecord>, PoolError> {
        match self
            .draw(
                PoolKind::SecurityAnswers,
                mark_as_used,
                category.map(DrawFilter::Category),
            )
            .await?
        {
            Some(PoolRecord::SecurityAnswer(record)) => Ok(Some(record)),
            Some(other) => Err(unexpected(PoolKind::SecurityAnswers, &other)),
            None => Ok(None),
        }
    }

    /// Commits a record drawn without marking.
    pub async fn mark_used(&self, kind: PoolKind, id: i64) -> Result<(), PoolError> {
        self.store.mark_used(kind, id).await
    }

    pub async fn reset(&self, kind: PoolKind) -> Result<u64, PoolError> {
        let cleared = self.store.reset(kind).await?;
        info!("Reset {} {} usage flags", cleared, kind);
        Ok(cleared)
    }

    /// Clears the usage flags of all three pools.
    pub async fn reset_all(&self) -> Result<(), PoolError> {
        for kind in PoolKind::ALL {
            self.reset(kind).await?;
        }
        Ok(())
    }

    pub async fn count(&self, kind: PoolKind) -> Result<PoolCount, PoolError> {
        self.store.count(kind).await
    }

    pub async fn stats(&self) -> Result<PoolStats, PoolError> {
        Ok(PoolStats {
            names: self.store.count(PoolKind::Names).await?,
            cities: self.store.count(PoolKind::Cities).await?,
            security_answers: self.store.count(PoolKind::SecurityAnswers).await?,
        })
    }

    pub async fn breakdown(&self, kind: PoolKind) -> Result<Vec<(String, PoolCount)>, PoolError> {
        self.store.breakdown(kind).await
    }

    pub async fn gender_counts(&self) -> Result<Vec<(Option<Gender>, u64)>, PoolError> {
        self.store.gender_counts().await
    }
}

fn unexpected(kind: PoolKind, record: &PoolRecord) -> PoolError {
    PoolError::CorruptRow(format!("{} draw returned a {} record", kind, record.kind()))
}
