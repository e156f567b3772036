//! Sources of identity fields behind one abstraction.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use data_pool::config::AgeBucket;
use data_pool::generators::BirthdatePolicy;
use data_pool::manager::PoolManager;
use data_pool::models::{Category, Gender};
use data_pool::vocabulary::{StaticVocabulary, VocabularySource};
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::name::en::{FirstName, LastName};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::RegistrationError;
use crate::model::Person;

/// Supplies the pool-backed parts of a registration record.
///
/// `Ok(None)` means the source has nothing left for that field; callers
/// substitute another source.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    async fn person(&self) -> Result<Option<Person>, RegistrationError>;

    async fn city(&self) -> Result<Option<String>, RegistrationError>;

    async fn security_answer(
        &self,
        category: Category,
    ) -> Result<Option<String>, RegistrationError>;
}

/// Draws fields from the data pool.
pub struct PooledSource {
    manager: Arc<PoolManager>,
    mark_as_used: bool,
}

impl PooledSource {
    pub fn new(manager: Arc<PoolManager>, mark_as_used: bool) -> Self {
        Self {
            manager,
            mark_as_used,
        }
    }
}

#[async_trait]
impl RecordProvider for PooledSource {
    async fn person(&self) -> Result<Option<Person>, RegistrationError> {
        let name = self.manager.draw_name(None, self.mark_as_used).await?;
        Ok(name.map(|name| {
            debug!("Using pooled name #{}", name.id);
            Person {
                first_name: name.first_name,
                last_name: name.last_name,
                birthdate: name.birthdate,
                gender: name.gender,
            }
        }))
    }

    async fn city(&self) -> Result<Option<String>, RegistrationError> {
        let city = self.manager.draw_city(None, self.mark_as_used).await?;
        Ok(city.map(|city| city.city_name))
    }

    async fn security_answer(
        &self,
        category: Category,
    ) -> Result<Option<String>, RegistrationError> {
        let answer = self
            .manager
            .draw_answer(Some(category), self.mark_as_used)
            .await?;
        Ok(answer.map(|answer| answer.answer_text))
    }
}

/// Generates fields on the fly. Never runs dry.
pub struct SyntheticSource {
    birthdates: BirthdatePolicy,
    pet_names: &'static [&'static str],
    rng: Mutex<StdRng>,
}

impl SyntheticSource {
    /// Birthdates follow the same age buckets as pooled names.
    pub fn new(age_buckets: &[AgeBucket]) -> Result<Self, RegistrationError> {
        Ok(Self {
            birthdates: BirthdatePolicy::today_utc(age_buckets)?,
            pet_names: StaticVocabulary::new().pet_names(),
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    pub fn with_seed(age_buckets: &[AgeBucket], seed: u64) -> Result<Self, RegistrationError> {
        let source = Self::new(age_buckets)?;
        *source.rng() = StdRng::seed_from_u64(seed);
        Ok(source)
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // A panic while holding the lock cannot leave the generator invalid.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn generate_person(&self) -> Result<Person, RegistrationError> {
        let mut rng = self.rng();
        let gender = if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        Ok(Person {
            first_name: FirstName().fake_with_rng(&mut *rng),
            last_name: LastName().fake_with_rng(&mut *rng),
            birthdate: self.birthdates.sample(&mut *rng)?,
            gender: Some(gender),
        })
    }

    pub fn generate_city(&self) -> String {
        CityName().fake_with_rng(&mut *self.rng())
    }

    pub fn generate_answer(&self, category: Category) -> String {
        let mut rng = self.rng();
        match category {
            Category::MotherMaidenName => LastName().fake_with_rng(&mut *rng),
            Category::FirstPet => self
                .pet_names
                .choose(&mut *rng)
                .map(|pet| pet.to_string())
                .unwrap_or_else(|| FirstName().fake_with_rng(&mut *rng)),
            Category::BirthCity => CityName().fake_with_rng(&mut *rng),
            Category::ChildhoodFriend => {
                let given: String = FirstName().fake_with_rng(&mut *rng);
                let family: String = LastName().fake_with_rng(&mut *rng);
                format!("{given} {family}")
            }
        }
    }
}

#[async_trait]
impl RecordProvider for SyntheticSource {
    async fn person(&self) -> Result<Option<Person>, RegistrationError> {
        self.generate_person().map(Some)
    }

    async fn city(&self) -> Result<Option<String>, RegistrationError> {
        Ok(Some(self.generate_city()))
    }

    async fn security_answer(
        &self,
        category: Category,
    ) -> Result<Option<String>, RegistrationError> {
        Ok(Some(self.generate_answer(category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_pool::config::default_age_buckets;
    use data_pool::generators::age_on;

    #[test]
    fn test_synthetic_person() {
        let source = SyntheticSource::with_seed(&default_age_buckets(), 8).unwrap();
        for _ in 0..200 {
            let person = source.generate_person().unwrap();
            assert!(!person.first_name.is_empty());
            assert!(!person.last_name.is_empty());
            let age = age_on(person.birthdate, source.birthdates.today());
            assert!((18..=65).contains(&age));
        }
    }

    #[test]
    fn test_synthetic_pet_answers_come_from_pet_names() {
        let source = SyntheticSource::with_seed(&default_age_buckets(), 9).unwrap();
        let pets = StaticVocabulary::new().pet_names();
        for _ in 0..50 {
            let answer = source.generate_answer(Category::FirstPet);
            assert!(pets.contains(&answer.as_str()));
        }
    }

    #[test]
    fn test_synthetic_childhood_friend_is_a_full_name() {
        let source = SyntheticSource::with_seed(&default_age_buckets(), 10).unwrap();
        let answer = source.generate_answer(Category::ChildhoodFriend);
        let (given, family) = answer.split_once(' ').expect("given and family name");
        assert!(!given.is_empty());
        assert!(!family.is_empty());
    }

    #[tokio::test]
    async fn test_synthetic_source_never_runs_dry() {
        let source = SyntheticSource::new(&default_age_buckets()).unwrap();
        assert!(source.person().await.unwrap().is_some());
        assert!(source.city().await.unwrap().is_some());
        for category in Category::ALL {
            assert!(source.security_answer(category).await.unwrap().is_some());
        }
    }
}
