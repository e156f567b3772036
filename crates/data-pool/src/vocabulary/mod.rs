//! Locale vocabulary sources.
//!
//! A [`VocabularySource`] supplies the word lists record synthesis draws
//! from: gendered given names and family names per locale, real city names
//! per locale, and one answer list per security question category.
//! Sources are read-only once constructed.

mod tables;

use std::collections::BTreeSet;

use crate::error::VocabularyError;
use crate::models::{Category, Gender, Locale};

/// Given and family names of one locale.
#[derive(Debug, Clone, Copy)]
pub struct NameTable {
    pub male: &'static [&'static str],
    pub female: &'static [&'static str],
    pub family: &'static [&'static str],
}

impl NameTable {
    /// Given names consistent with a gender tag.
    pub fn given(&self, gender: Gender) -> &'static [&'static str] {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

/// Read-only word lists consumed by the record generators.
pub trait VocabularySource: Send + Sync {
    /// Enabled locales, in a stable order.
    fn locales(&self) -> &[Locale];

    fn names_for(&self, locale: Locale) -> Result<NameTable, VocabularyError>;

    fn cities_for(&self, locale: Locale) -> Result<&'static [&'static str], VocabularyError>;

    fn pet_names(&self) -> &'static [&'static str];

    /// Deduplicated, sorted answers for a category, built from the enabled
    /// locales where the category draws on names or cities.
    ///
    /// Childhood friends pair every given name of a locale with every family
    /// name of the same locale.
    fn answers_for(&self, category: Category) -> Vec<String> {
        let mut answers = BTreeSet::new();
        match category {
            Category::FirstPet => answers.extend(self.pet_names().iter().map(|s| s.to_string())),
            Category::MotherMaidenName => {
                for &locale in self.locales() {
                    if let Ok(names) = self.names_for(locale) {
                        answers.extend(names.family.iter().map(|s| s.to_string()));
                    }
                }
            }
            Category::BirthCity => {
                for &locale in self.locales() {
                    if let Ok(cities) = self.cities_for(locale) {
                        answers.extend(cities.iter().map(|s| s.to_string()));
                    }
                }
            }
            Category::ChildhoodFriend => {
                for &locale in self.locales() {
                    if let Ok(names) = self.names_for(locale) {
                        for given in names.male.iter().chain(names.female) {
                            answers.extend(names.family.iter().map(|f| format!("{given} {f}")));
                        }
                    }
                }
            }
        }
        answers.into_iter().collect()
    }
}

/// Distinct cities across every built-in locale table.
pub fn builtin_city_capacity() -> u64 {
    Locale::ALL
        .iter()
        .map(|&locale| tables::cities(locale).len() as u64)
        .sum()
}

/// The built-in vocabulary covering the 14 supported locales.
///
/// Restricting the enabled locales makes lookups for the others fail with
/// [`VocabularyError::UnknownLocale`].
#[derive(Debug, Clone)]
pub struct StaticVocabulary {
    locales: Vec<Locale>,
}

impl StaticVocabulary {
    pub fn new() -> Self {
        Self {
            locales: Locale::ALL.to_vec(),
        }
    }

    pub fn with_locales(locales: impl IntoIterator<Item = Locale>) -> Self {
        let mut locales: Vec<Locale> = locales.into_iter().collect();
        locales.sort();
        locales.dedup();
        Self { locales }
    }

    fn check(&self, locale: Locale) -> Result<(), VocabularyError> {
        if self.locales.contains(&locale) {
            Ok(())
        } else {
            Err(VocabularyError::UnknownLocale(locale.to_string()))
        }
    }
}

impl Default for StaticVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularySource for StaticVocabulary {
    fn locales(&self) -> &[Locale] {
        &self.locales
    }

    fn names_for(&self, locale: Locale) -> Result<NameTable, VocabularyError> {
        self.check(locale)?;
        Ok(tables::names(locale))
    }

    fn cities_for(&self, locale: Locale) -> Result<&'static [&'static str], VocabularyError> {
        self.check(locale)?;
        Ok(tables::cities(locale))
    }

    fn pet_names(&self) -> &'static [&'static str] {
        tables::PET_NAMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_vocabulary() {
        let vocab = StaticVocabulary::new();
        assert_eq!(vocab.locales().len(), 14);

        for &locale in vocab.locales() {
            let names = vocab.names_for(locale).unwrap();
            assert!(names.male.len() >= 50, "{locale} male names");
            assert!(names.female.len() >= 50, "{locale} female names");
            assert!(names.family.len() >= 80, "{locale} family names");
            assert!(vocab.cities_for(locale).unwrap().len() >= 90, "{locale} cities");
        }
    }

    #[test]
    fn test_disabled_locale_is_unknown() {
        let vocab = StaticVocabulary::with_locales([Locale::EnUs, Locale::DeDe]);
        assert!(vocab.names_for(Locale::DeDe).is_ok());
        assert_eq!(
            vocab.cities_for(Locale::FiFi),
            Err(VocabularyError::UnknownLocale("fi_FI".to_string()))
        );
    }

    #[test]
    fn test_answers_are_sorted_and_distinct() {
        let vocab = StaticVocabulary::new();
        for category in Category::ALL {
            let answers = vocab.answers_for(category);
            assert!(!answers.is_empty());
            assert!(answers.windows(2).all(|w| w[0] < w[1]), "{category}");
        }
    }

    #[test]
    fn test_birth_city_answers_follow_enabled_locales() {
        let vocab = StaticVocabulary::with_locales([Locale::ItIt]);
        let answers = vocab.answers_for(Category::BirthCity);
        assert!(answers.iter().any(|a| a == "Milano"));
        assert!(!answers.iter().any(|a| a == "Chicago"));
    }

    #[test]
    fn test_childhood_friends_stay_within_a_locale() {
        let vocab = StaticVocabulary::with_locales([Locale::PlPl, Locale::FrFr]);
        let answers = vocab.answers_for(Category::ChildhoodFriend);
        assert!(answers.iter().any(|a| a == "Anna Nowak"));
        assert!(!answers.iter().any(|a| a == "Anna Dubois"));
    }

    #[test]
    fn test_builtin_city_capacity_counts_every_locale() {
        let vocab = StaticVocabulary::new();
        let total: usize = Locale::ALL
            .iter()
            .map(|&locale| vocab.cities_for(locale).unwrap().len())
            .sum();
        assert_eq!(builtin_city_capacity(), total as u64);
    }
}
