//! City generation from real-world city lists.

use std::sync::Arc;

use rand::Rng;

use super::pick;
use crate::db::NewCity;
use crate::error::PoolError;
use crate::models::Locale;
use crate::synthesizer::RecordGenerator;
use crate::vocabulary::VocabularySource;

pub struct CityGenerator {
    vocabulary: Arc<dyn VocabularySource>,
    weights: Vec<(Locale, f64)>,
}

impl CityGenerator {
    pub fn new(vocabulary: Arc<dyn VocabularySource>, weight: impl Fn(Locale) -> f64) -> Self {
        let weights = vocabulary
            .locales()
            .iter()
            .map(|&locale| (locale, weight(locale)))
            .collect();
        Self {
            vocabulary,
            weights,
        }
    }

    pub fn generate(&self, locale: Locale, rng: &mut impl Rng) -> Result<NewCity, PoolError> {
        let cities = self.vocabulary.cities_for(locale)?;
        Ok(city(pick(cities, locale.as_str(), rng)?, locale))
    }
}

fn city(name: &str, locale: Locale) -> NewCity {
    NewCity {
        city_name: name.to_string(),
        country: locale.country().to_string(),
        locale,
    }
}

impl RecordGenerator for CityGenerator {
    type Entry = NewCity;
    type Lane = Locale;

    fn lanes(&self) -> Vec<(Locale, f64)> {
        self.weights.clone()
    }

    fn generate(&self, lane: Locale, rng: &mut impl Rng) -> Result<NewCity, PoolError> {
        CityGenerator::generate(self, lane, rng)
    }

    fn enumerate(&self, lane: Locale) -> Option<Vec<NewCity>> {
        let cities = self.vocabulary.cities_for(lane).ok()?;
        Some(cities.iter().map(|name| city(name, lane)).collect())
    }
}
