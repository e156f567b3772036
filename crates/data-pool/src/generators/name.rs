//! Name generation with locale weighting, gender tags and birthdates.

use std::sync::Arc;

use rand::Rng;

use super::{BirthdatePolicy, pick};
use crate::db::NewName;
use crate::error::PoolError;
use crate::models::{Gender, Locale};
use crate::synthesizer::RecordGenerator;
use crate::vocabulary::VocabularySource;

/// Generates name candidates for the enabled locales.
pub struct NameGenerator {
    vocabulary: Arc<dyn VocabularySource>,
    birthdates: BirthdatePolicy,
    weights: Vec<(Locale, f64)>,
}

impl NameGenerator {
    /// `weight` gives each enabled locale its sampling weight.
    pub fn new(
        vocabulary: Arc<dyn VocabularySource>,
        birthdates: BirthdatePolicy,
        weight: impl Fn(Locale) -> f64,
    ) -> Self {
        let weights = vocabulary
            .locales()
            .iter()
            .map(|&locale| (locale, weight(locale)))
            .collect();
        Self {
            vocabulary,
            birthdates,
            weights,
        }
    }

    /// Generates a single name for `locale`.
    pub fn generate(&self, locale: Locale, rng: &mut impl Rng) -> Result<NewName, PoolError> {
        let names = self.vocabulary.names_for(locale)?;
        let gender = if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };

        let first_name = pick(names.given(gender), locale.as_str(), rng)?;
        let last_name = pick(names.family, locale.as_str(), rng)?;

        Ok(NewName {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birthdate: self.birthdates.sample(rng)?,
            locale,
            gender: Some(gender),
        })
    }
}

impl RecordGenerator for NameGenerator {
    type Entry = NewName;
    type Lane = Locale;

    fn lanes(&self) -> Vec<(Locale, f64)> {
        self.weights.clone()
    }

    fn generate(&self, lane: Locale, rng: &mut impl Rng) -> Result<NewName, PoolError> {
        NameGenerator::generate(self, lane, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_age_buckets;
    use crate::generators::age_on;
    use crate::vocabulary::StaticVocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator() -> NameGenerator {
        NameGenerator::new(
            Arc::new(StaticVocabulary::new()),
            BirthdatePolicy::today_utc(&default_age_buckets()).unwrap(),
            |locale| locale.default_weight(),
        )
    }

    #[test]
    fn test_generate_name() {
        let name_gen = generator();
        let mut rng = StdRng::seed_from_u64(3);
        let name = name_gen.generate(Locale::PlPl, &mut rng).unwrap();

        assert!(!name.first_name.is_empty());
        assert!(!name.last_name.is_empty());
        assert_eq!(name.locale, Locale::PlPl);

        let age = age_on(name.birthdate, name_gen.birthdates.today());
        assert!((18..=65).contains(&age));
    }

    #[test]
    fn test_gender_matches_given_name_list() {
        let name_gen = generator();
        let vocab = StaticVocabulary::new();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let name = name_gen.generate(Locale::FrFr, &mut rng).unwrap();
            let gender = name.gender.unwrap();
            let table = vocab.names_for(Locale::FrFr).unwrap();
            assert!(table.given(gender).contains(&name.first_name.as_str()));
        }
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        let name_gen = NameGenerator::new(
            Arc::new(StaticVocabulary::with_locales([Locale::EnUs])),
            BirthdatePolicy::today_utc(&default_age_buckets()).unwrap(),
            |_| 1.0,
        );
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            name_gen.generate(Locale::DeDe, &mut rng),
            Err(PoolError::Vocabulary(_))
        ));
        assert_eq!(name_gen.lanes(), vec![(Locale::EnUs, 1.0)]);
    }
}
