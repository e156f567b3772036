//! Deduplicating batch synthesis on top of a [`RecordGenerator`].

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, WeightedIndex};
use tracing::warn;

use crate::db::PoolEntry;
use crate::error::PoolError;

/// Produces candidate rows for one pool, one lane at a time.
///
/// A lane is the unit that can run out of fresh values: a locale for names
/// and cities, a category for security answers.
pub trait RecordGenerator: Send + Sync {
    type Entry: PoolEntry;
    type Lane: Copy + Eq + Hash + fmt::Display + fmt::Debug + Send + Sync;

    /// Lanes with their sampling weights.
    fn lanes(&self) -> Vec<(Self::Lane, f64)>;

    fn generate(&self, lane: Self::Lane, rng: &mut impl Rng) -> Result<Self::Entry, PoolError>;

    /// Every value a finite lane can produce. `None` for lanes too large to list.
    fn enumerate(&self, _lane: Self::Lane) -> Option<Vec<Self::Entry>> {
        None
    }
}

/// Emits batches of entries whose keys are unique across the whole run.
///
/// Keys already persisted are loaded with [`Synthesizer::remember`] so the
/// uniqueness check never needs a store round-trip.
pub struct Synthesizer<G: RecordGenerator> {
    generator: G,
    seen: HashSet<<G::Entry as PoolEntry>::Key>,
    active: Vec<(G::Lane, f64)>,
    exhausted: Vec<G::Lane>,
    index: Option<WeightedIndex<f64>>,
    max_retries: usize,
}

impl<G: RecordGenerator> Synthesizer<G> {
    pub fn new(generator: G, max_retries: usize) -> Result<Self, PoolError> {
        let active: Vec<_> = generator
            .lanes()
            .into_iter()
            .filter(|(_, weight)| *weight > 0.0)
            .collect();

        let mut synthesizer = Self {
            generator,
            seen: HashSet::new(),
            active,
            exhausted: Vec::new(),
            index: None,
            max_retries: max_retries.max(1),
        };
        synthesizer.rebuild_index()?;
        Ok(synthesizer)
    }

    /// Adds keys that must not be emitted again.
    pub fn remember(&mut self, keys: impl IntoIterator<Item = <G::Entry as PoolEntry>::Key>) {
        self.seen.extend(keys);
    }

    /// Replaces the seen set with `keys` and reopens every lane.
    ///
    /// Used after the store rejected a batch: the rejected entries are
    /// forgotten and the persisted keys become the new baseline.
    pub fn reload(
        &mut self,
        keys: impl IntoIterator<Item = <G::Entry as PoolEntry>::Key>,
    ) -> Result<(), PoolError> {
        self.seen = keys.into_iter().collect();
        self.active = self
            .generator
            .lanes()
            .into_iter()
            .filter(|(_, weight)| *weight > 0.0)
            .collect();
        self.exhausted.clear();
        self.rebuild_index()
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Lanes that ran out of unseen values, in the order they ran out.
    pub fn exhausted_lanes(&self) -> &[G::Lane] {
        &self.exhausted
    }

    pub fn is_exhausted(&self) -> bool {
        self.active.is_empty()
    }

    /// Generates up to `count` unseen entries.
    ///
    /// Returns fewer only when every lane is exhausted.
    pub fn next_batch(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<G::Entry>, PoolError> {
        let mut batch = Vec::with_capacity(count);

        while batch.len() < count {
            let Some(index) = &self.index else {
                break;
            };
            let slot = index.sample(rng);
            let lane = self.active[slot].0;

            match self.next_in_lane(lane, rng)? {
                Some(entry) => batch.push(entry),
                None => self.exhaust(slot)?,
            }
        }

        Ok(batch)
    }

    fn next_in_lane(
        &mut self,
        lane: G::Lane,
        rng: &mut impl Rng,
    ) -> Result<Option<G::Entry>, PoolError> {
        for _ in 0..self.max_retries {
            let entry = self.generator.generate(lane, rng)?;
            if self.seen.insert(entry.key()) {
                return Ok(Some(entry));
            }
        }

        // Retries spent; a finite lane may still hold values sampling missed.
        let Some(all) = self.generator.enumerate(lane) else {
            return Ok(None);
        };
        let fresh: Vec<G::Entry> = all
            .into_iter()
            .filter(|entry| !self.seen.contains(&entry.key()))
            .collect();

        Ok(fresh.choose(rng).cloned().map(|entry| {
            self.seen.insert(entry.key());
            entry
        }))
    }

    fn exhaust(&mut self, slot: usize) -> Result<(), PoolError> {
        let (lane, _) = self.active.remove(slot);
        warn!(
            "Vocabulary exhausted for {} lane {}",
            <G::Entry as PoolEntry>::KIND,
            lane
        );
        self.exhausted.push(lane);
        self.rebuild_index()
    }

    fn rebuild_index(&mut self) -> Result<(), PoolError> {
        self.index = if self.active.is_empty() {
            None
        } else {
            Some(
                WeightedIndex::new(self.active.iter().map(|(_, weight)| *weight))
                    .map_err(|e| PoolError::Config(format!("lane weights: {e}")))?,
            )
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::NewSecurityAnswer;
    use crate::models::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Two categories with a handful of answers each.
    struct TinyAnswers;

    const PETS: &[&str] = &["Rex", "Bella", "Max"];
    const FRIENDS: &[&str] = &["Anna", "Ben"];

    impl TinyAnswers {
        fn list(lane: Category) -> &'static [&'static str] {
            match lane {
                Category::FirstPet => PETS,
                _ => FRIENDS,
            }
        }
    }

    impl RecordGenerator for TinyAnswers {
        type Entry = NewSecurityAnswer;
        type Lane = Category;

        fn lanes(&self) -> Vec<(Category, f64)> {
            vec![(Category::FirstPet, 1.0), (Category::ChildhoodFriend, 1.0)]
        }

        fn generate(
            &self,
            lane: Category,
            rng: &mut impl Rng,
        ) -> Result<NewSecurityAnswer, PoolError> {
            let list = Self::list(lane);
            Ok(NewSecurityAnswer {
                category: lane,
                answer_text: list[rng.gen_range(0..list.len())].to_string(),
            })
        }
    }

    /// Only ever produces the same value, but can list its full vocabulary.
    struct StuckEnumerable;

    impl RecordGenerator for StuckEnumerable {
        type Entry = NewSecurityAnswer;
        type Lane = Category;

        fn lanes(&self) -> Vec<(Category, f64)> {
            vec![(Category::FirstPet, 1.0)]
        }

        fn generate(
            &self,
            lane: Category,
            _rng: &mut impl Rng,
        ) -> Result<NewSecurityAnswer, PoolError> {
            Ok(NewSecurityAnswer {
                category: lane,
                answer_text: PETS[0].to_string(),
            })
        }

        fn enumerate(&self, lane: Category) -> Option<Vec<NewSecurityAnswer>> {
            Some(
                PETS.iter()
                    .map(|pet| NewSecurityAnswer {
                        category: lane,
                        answer_text: pet.to_string(),
                    })
                    .collect(),
            )
        }
    }

    #[test]
    fn test_batch_keys_are_unique() {
        let mut synth = Synthesizer::new(TinyAnswers, 50).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let batch = synth.next_batch(4, &mut rng).unwrap();
        let keys: HashSet<_> = batch.iter().map(PoolEntry::key).collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(synth.seen_count(), 4);
    }

    #[test]
    fn test_exhaustion_returns_short_batch() {
        let mut synth = Synthesizer::new(TinyAnswers, 50).unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        let batch = synth.next_batch(10, &mut rng).unwrap();
        assert_eq!(batch.len(), PETS.len() + FRIENDS.len());
        assert!(synth.is_exhausted());

        let mut lanes = synth.exhausted_lanes().to_vec();
        lanes.sort();
        assert_eq!(lanes, vec![Category::FirstPet, Category::ChildhoodFriend]);

        assert!(synth.next_batch(1, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_remembered_keys_are_skipped() {
        let mut synth = Synthesizer::new(TinyAnswers, 50).unwrap();
        synth.remember([(Category::FirstPet, "Rex".to_string())]);
        let mut rng = StdRng::seed_from_u64(3);

        let batch = synth.next_batch(10, &mut rng).unwrap();
        assert_eq!(batch.len(), 4);
        assert!(!batch.iter().any(|a| a.answer_text == "Rex"));
    }

    #[test]
    fn test_enumeration_finds_values_sampling_misses() {
        let mut synth = Synthesizer::new(StuckEnumerable, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let batch = synth.next_batch(5, &mut rng).unwrap();
        let mut answers: Vec<_> = batch.into_iter().map(|a| a.answer_text).collect();
        answers.sort();
        assert_eq!(answers, vec!["Bella", "Max", "Rex"]);
        assert_eq!(synth.exhausted_lanes(), &[Category::FirstPet]);
    }

    #[test]
    fn test_reload_reopens_lanes() {
        let mut synth = Synthesizer::new(TinyAnswers, 50).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        synth.next_batch(10, &mut rng).unwrap();
        assert!(synth.is_exhausted());

        synth
            .reload([(Category::ChildhoodFriend, "Anna".to_string())])
            .unwrap();
        assert!(!synth.is_exhausted());
        assert_eq!(synth.next_batch(10, &mut rng).unwrap().len(), 4);
    }
}
