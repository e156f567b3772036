//! Integration tests for the SQLite pool store.
//!
//! Each test opens its own database file in a temporary directory.

use std::collections::{HashMap, HashSet};

use data_pool::db::{NewCity, NewName, NewSecurityAnswer, PoolStore};
use data_pool::prelude::*;
use tempfile::TempDir;
use time::{Date, Month};

async fn open_store(dir: &TempDir) -> PoolStore {
    PoolStore::open(&dir.path().join("pool.db"), 1)
        .await
        .expect("Failed to open pool store")
}

fn name(first: &str, last: &str, locale: Locale) -> NewName {
    NewName {
        first_name: first.to_string(),
        last_name: last.to_string(),
        birthdate: Date::from_calendar_date(1990, Month::March, 14).unwrap(),
        locale,
        gender: Some(Gender::Female),
    }
}

fn city(city_name: &str, locale: Locale) -> NewCity {
    NewCity {
        city_name: city_name.to_string(),
        country: locale.country().to_string(),
        locale,
    }
}

#[tokio::test]
async fn test_insert_and_read_back() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let inserted = store
        .insert_batch(&[name("Anna", "Kowalska", Locale::PlPl)])
        .await
        .unwrap();
    assert_eq!(inserted, 1);

    let records = store.all_records(PoolKind::Names).await.unwrap();
    assert_eq!(records.len(), 1);
    let PoolRecord::Name(record) = &records[0] else {
        panic!("expected a name record");
    };
    assert_eq!(record.first_name, "Anna");
    assert_eq!(record.last_name, "Kowalska");
    assert_eq!(record.birthdate, Date::from_calendar_date(1990, Month::March, 14).unwrap());
    assert_eq!(record.locale, Locale::PlPl);
    assert_eq!(record.gender, Some(Gender::Female));
    assert!(!record.used);

    assert_eq!(
        store.get(PoolKind::Names, record.id).await.unwrap(),
        Some(records[0].clone())
    );
}

#[tokio::test]
async fn test_duplicate_in_batch_rolls_back_whole_batch() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let first: Vec<NewCity> = ["Oslo", "Bergen", "Tromsø"]
        .iter()
        .map(|c| city(c, Locale::NoNo))
        .collect();
    store.insert_batch(&first).await.unwrap();

    let second = vec![
        city("Stavanger", Locale::NoNo),
        city("Drammen", Locale::NoNo),
        city("Bergen", Locale::NoNo),
    ];
    let err = store.insert_batch(&second).await.unwrap_err();
    assert!(matches!(
        err,
        PoolError::DuplicateKeyRejected {
            kind: PoolKind::Cities
        }
    ));

    // Nothing of the rejected batch is persisted.
    let count = store.count(PoolKind::Cities).await.unwrap();
    assert_eq!(count.total, 3);
    assert_eq!(count.total % first.len() as u64, 0);
}

#[tokio::test]
async fn test_same_city_in_two_locales_is_allowed() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    store
        .insert_batch(&[city("London", Locale::EnGb), city("London", Locale::EnUs)])
        .await
        .unwrap();
    assert_eq!(store.count(PoolKind::Cities).await.unwrap().total, 2);
}

#[tokio::test]
async fn test_draw_marks_and_conserves_counts() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let names: Vec<NewName> = (0..10)
        .map(|i| name(&format!("Given{i}"), "Family", Locale::EnUs))
        .collect();
    store.insert_batch(&names).await.unwrap();

    // Peeking leaves the usage flag alone.
    let peeked = store
        .draw_random(PoolKind::Names, None, false)
        .await
        .unwrap()
        .unwrap();
    assert!(!peeked.used());
    assert_eq!(store.count(PoolKind::Names).await.unwrap(), PoolCount::new(10, 0));

    let drawn = store
        .draw_random(PoolKind::Names, None, true)
        .await
        .unwrap()
        .unwrap();
    assert!(drawn.used());

    let count = store.count(PoolKind::Names).await.unwrap();
    assert_eq!(count.used, 1);
    assert_eq!(count.available, count.total - count.used);

    // Committing a peeked row separately, twice.
    store.mark_used(PoolKind::Names, peeked.id()).await.unwrap();
    store.mark_used(PoolKind::Names, peeked.id()).await.unwrap();
    let count = store.count(PoolKind::Names).await.unwrap();
    let expected_used = if peeked.id() == drawn.id() { 1 } else { 2 };
    assert_eq!(count.used, expected_used);
    assert_eq!(count.available, count.total - count.used);
}

#[tokio::test]
async fn test_filtered_draw_respects_category() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let answers = vec![
        NewSecurityAnswer {
            category: Category::FirstPet,
            answer_text: "Bella".to_string(),
        },
        NewSecurityAnswer {
            category: Category::MotherMaidenName,
            answer_text: "Smith".to_string(),
        },
    ];
    store.insert_batch(&answers).await.unwrap();

    let filter = Some(DrawFilter::Category(Category::FirstPet));
    let drawn = store
        .draw_random(PoolKind::SecurityAnswers, filter, true)
        .await
        .unwrap();
    let Some(PoolRecord::SecurityAnswer(answer)) = drawn else {
        panic!("expected a security answer");
    };
    assert_eq!(answer.category, Category::FirstPet);
    assert_eq!(answer.answer_text, "Bella");

    // The only first_pet row is used; the other category is untouched.
    assert!(
        store
            .draw_random(PoolKind::SecurityAnswers, filter, true)
            .await
            .unwrap()
            .is_none()
    );
    assert_eq!(store.count(PoolKind::SecurityAnswers).await.unwrap().available, 1);
}

#[tokio::test]
async fn test_filter_must_match_pool_kind() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let err = store
        .draw_random(
            PoolKind::Names,
            Some(DrawFilter::Category(Category::BirthCity)),
            false,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PoolError::InvalidFilter { .. }));
}

#[tokio::test]
async fn test_mark_unknown_id() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let err = store.mark_used(PoolKind::Cities, 4242).await.unwrap_err();
    assert!(matches!(
        err,
        PoolError::UnknownRecord {
            kind: PoolKind::Cities,
            id: 4242
        }
    ));
}

/// Draws `draws` records without marking them and counts hits per id.
async fn peek_histogram(
    store: &PoolStore,
    kind: PoolKind,
    filter: Option<DrawFilter>,
    draws: usize,
) -> HashMap<i64, usize> {
    let mut hits = HashMap::new();
    for _ in 0..draws {
        let record = store
            .draw_random(kind, filter, false)
            .await
            .unwrap()
            .expect("pool should not be empty");
        *hits.entry(record.id()).or_insert(0) += 1;
    }
    hits
}

fn assert_hits_within(hits: &HashMap<i64, usize>, rows: usize, bounds: (usize, usize)) {
    assert_eq!(hits.len(), rows, "every candidate row should be drawn");
    let min = hits.values().copied().min().unwrap();
    let max = hits.values().copied().max().unwrap();
    assert!(
        min >= bounds.0 && max <= bounds.1,
        "hits per row ranged {min}..={max}, expected within {bounds:?}"
    );
}

#[tokio::test]
async fn test_draws_are_uniform_over_unused_rows() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let names: Vec<NewName> = (0..100)
        .map(|i| name(&format!("Given{i}"), "Family", Locale::EnGb))
        .collect();
    store.insert_batch(&names).await.unwrap();

    // 200 expected hits per row, bounds are about six standard deviations.
    let hits = peek_histogram(&store, PoolKind::Names, None, 20_000).await;
    assert_hits_within(&hits, 100, (120, 290));

    // Mark every other row; the survivors keep an even share.
    let records = store.all_records(PoolKind::Names).await.unwrap();
    let mut marked = HashSet::new();
    for record in records.iter().step_by(2) {
        store.mark_used(PoolKind::Names, record.id()).await.unwrap();
        marked.insert(record.id());
    }

    let hits = peek_histogram(&store, PoolKind::Names, None, 20_000).await;
    assert!(hits.keys().all(|id| !marked.contains(id)));
    assert_hits_within(&hits, 50, (290, 510));
}

#[tokio::test]
async fn test_sparse_filtered_draws_are_uniform() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    // Five first_pet rows spread through a thousand maiden names.
    let answers: Vec<NewSecurityAnswer> = (0..1000)
        .map(|i| {
            if i % 250 == 0 || i == 999 {
                NewSecurityAnswer {
                    category: Category::FirstPet,
                    answer_text: format!("Pet{i}"),
                }
            } else {
                NewSecurityAnswer {
                    category: Category::MotherMaidenName,
                    answer_text: format!("Maiden{i}"),
                }
            }
        })
        .collect();
    store.insert_batch(&answers).await.unwrap();

    let filter = Some(DrawFilter::Category(Category::FirstPet));
    let hits = peek_histogram(&store, PoolKind::SecurityAnswers, filter, 2_500).await;
    assert_hits_within(&hits, 5, (400, 600));

    for id in hits.keys() {
        let Some(PoolRecord::SecurityAnswer(answer)) =
            store.get(PoolKind::SecurityAnswers, *id).await.unwrap()
        else {
            panic!("expected a security answer");
        };
        assert_eq!(answer.category, Category::FirstPet);
    }
}

#[tokio::test]
async fn test_marking_draws_exhaust_a_sparse_filter() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let mut cities: Vec<NewCity> = (0..300)
        .map(|i| city(&format!("Town{i}"), Locale::DeDe))
        .collect();
    cities.push(city("Oulu", Locale::FiFi));
    cities.push(city("Turku", Locale::FiFi));
    store.insert_batch(&cities).await.unwrap();

    let filter = Some(DrawFilter::Locale(Locale::FiFi));
    let mut drawn = Vec::new();
    while let Some(PoolRecord::City(record)) = store
        .draw_random(PoolKind::Cities, filter, true)
        .await
        .unwrap()
    {
        assert_eq!(record.locale, Locale::FiFi);
        drawn.push(record.city_name);
    }
    drawn.sort();
    assert_eq!(drawn, ["Oulu", "Turku"]);
    assert_eq!(store.count(PoolKind::Cities).await.unwrap().available, 300);
}

#[tokio::test]
async fn test_reopen_keeps_rows() {
    let dir = TempDir::new().unwrap();
    {
        let store = open_store(&dir).await;
        store
            .insert_batch(&[city("Helsinki", Locale::FiFi)])
            .await
            .unwrap();
        store.close().await;
    }

    let store = open_store(&dir).await;
    assert_eq!(store.count(PoolKind::Cities).await.unwrap().total, 1);
    let keys = store.existing_keys::<NewCity>().await.unwrap();
    assert!(keys.contains(&("Helsinki".to_string(), Locale::FiFi)));
}
