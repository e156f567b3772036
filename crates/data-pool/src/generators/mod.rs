//! Record generators for each pool.
//!
//! - [`NameGenerator`]: locale-weighted names with gender tags and birthdates
//! - [`CityGenerator`]: real city names per locale
//! - [`SecurityAnswerGenerator`]: one answer vocabulary per question category
//!
//! Generators produce candidates only; deduplication happens in
//! [`Synthesizer`](crate::synthesizer::Synthesizer).

pub mod answer;
pub mod birthdate;
pub mod city;
pub mod name;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{PoolError, VocabularyError};

pub use answer::SecurityAnswerGenerator;
pub use birthdate::{BirthdatePolicy, age_on};
pub use city::CityGenerator;
pub use name::NameGenerator;

/// Picks one word from a vocabulary list.
fn pick<'a, T: AsRef<str>>(
    list: &'a [T],
    what: &str,
    rng: &mut impl Rng,
) -> Result<&'a str, PoolError> {
    list.choose(rng)
        .map(AsRef::as_ref)
        .ok_or_else(|| VocabularyError::EmptyList(what.to_string()).into())
}
