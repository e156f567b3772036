//! Security answer generation, one vocabulary per question category.
//!
//! Childhood friend answers are full names, so that category holds far more
//! answers than the other three together.

use std::collections::BTreeMap;

use rand::Rng;

use super::pick;
use crate::db::NewSecurityAnswer;
use crate::error::PoolError;
use crate::models::Category;
use crate::synthesizer::RecordGenerator;
use crate::vocabulary::VocabularySource;

pub struct SecurityAnswerGenerator {
    answers: BTreeMap<Category, Vec<String>>,
}

impl SecurityAnswerGenerator {
    /// Snapshots every category's answer list from `vocabulary`.
    pub fn new(vocabulary: &dyn VocabularySource) -> Self {
        let answers = Category::ALL
            .into_iter()
            .map(|category| (category, vocabulary.answers_for(category)))
            .collect();
        Self { answers }
    }

    pub fn generate(
        &self,
        category: Category,
        rng: &mut impl Rng,
    ) -> Result<NewSecurityAnswer, PoolError> {
        let list = self.answers.get(&category).map(Vec::as_slice).unwrap_or(&[]);
        Ok(NewSecurityAnswer {
            category,
            answer_text: pick(list, category.as_str(), rng)?.to_string(),
        })
    }
}

impl RecordGenerator for SecurityAnswerGenerator {
    type Entry = NewSecurityAnswer;
    type Lane = Category;

    fn lanes(&self) -> Vec<(Category, f64)> {
        self.answers.keys().map(|&category| (category, 1.0)).collect()
    }

    fn generate(&self, lane: Category, rng: &mut impl Rng) -> Result<NewSecurityAnswer, PoolError> {
        SecurityAnswerGenerator::generate(self, lane, rng)
    }

    fn enumerate(&self, lane: Category) -> Option<Vec<NewSecurityAnswer>> {
        let list = self.answers.get(&lane)?;
        Some(
            list.iter()
                .map(|answer| NewSecurityAnswer {
                    category: lane,
                    answer_text: answer.clone(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Locale;
    use crate::vocabulary::StaticVocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_answers_come_from_category_vocabulary() {
        let vocab = StaticVocabulary::new();
        let answer_gen = SecurityAnswerGenerator::new(&vocab);
        let mut rng = StdRng::seed_from_u64(21);

        for category in Category::ALL {
            let answer = answer_gen.generate(category, &mut rng).unwrap();
            assert_eq!(answer.category, category);
            assert!(
                vocab
                    .answers_for(category)
                    .contains(&answer.answer_text)
            );
        }
    }

    #[test]
    fn test_childhood_friends_are_full_names() {
        let vocab = StaticVocabulary::with_locales([Locale::SvSe]);
        let answer_gen = SecurityAnswerGenerator::new(&vocab);
        let mut rng = StdRng::seed_from_u64(5);

        let names = vocab.names_for(Locale::SvSe).unwrap();
        for _ in 0..50 {
            let answer = answer_gen
                .generate(Category::ChildhoodFriend, &mut rng)
                .unwrap();
            let (given, family) = answer.answer_text.split_once(' ').unwrap();
            assert!(names.male.contains(&given) || names.female.contains(&given));
            assert!(names.family.contains(&family));
        }

        let friends = answer_gen.enumerate(Category::ChildhoodFriend).unwrap();
        let given = names.male.len() + names.female.len();
        assert!(friends.len() > given * names.family.len() / 2);
    }

    #[test]
    fn test_every_category_is_a_lane() {
        let answer_gen = SecurityAnswerGenerator::new(&StaticVocabulary::new());
        let lanes: Vec<Category> = answer_gen.lanes().into_iter().map(|(c, _)| c).collect();
        assert_eq!(lanes, Category::ALL.to_vec());
    }
}
