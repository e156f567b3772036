//! Integration tests for population, allocation and reset through the
//! pool manager.

use std::collections::HashSet;
use std::sync::Arc;

use data_pool::prelude::*;
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> PoolConfig {
    PoolConfig {
        db_path: dir.path().join("data_pool.db"),
        ..PoolConfig::default()
    }
}

async fn open_manager(config: &PoolConfig) -> PoolManager {
    PoolManager::open(config)
        .await
        .expect("Failed to open pool manager")
}

/// Rendered content of every row; rendering leaves out the usage flag.
async fn content(manager: &PoolManager, kind: PoolKind) -> Vec<String> {
    manager
        .store()
        .all_records(kind)
        .await
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[tokio::test]
async fn test_populate_draw_until_empty() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&test_config(&dir)).await;

    let report = manager.populate(PoolKind::Names, 5000).await.unwrap();
    assert!(report.target_met);
    assert_eq!(report.inserted, 5000);
    assert!(report.exhausted_lanes.is_empty());

    let stats = manager.stats().await.unwrap();
    assert_eq!(
        stats.names,
        PoolCount {
            total: 5000,
            used: 0,
            available: 5000
        }
    );

    let mut seen = HashSet::new();
    for _ in 0..5000 {
        let record = manager
            .draw(PoolKind::Names, true, None)
            .await
            .unwrap()
            .expect("pool should not be empty yet");
        assert!(seen.insert(record.id()), "row {} drawn twice", record.id());
    }

    let stats = manager.stats().await.unwrap();
    assert_eq!(stats.names.available, 0);
    assert_eq!(stats.names.used, 5000);

    assert!(manager.draw(PoolKind::Names, true, None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_default_targets_are_met_by_builtin_vocabulary() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let manager = open_manager(&config).await;

    let targets = PopulationTargets::default();
    let reports = manager.populate_all(&targets).await.unwrap();

    for report in &reports {
        assert!(
            report.target_met,
            "{} stopped at {}/{}",
            report.kind, report.total, report.target
        );
        assert_eq!(report.total, targets.get(report.kind));
    }

    let stats = manager.stats().await.unwrap();
    assert_eq!(stats.names.total, 100_000);
    assert_eq!(stats.cities.total, builtin_city_capacity());
    assert_eq!(stats.security_answers.total, 10_000);

    // The smaller answer categories run dry; full-name friends do not.
    let answers = reports
        .iter()
        .find(|r| r.kind == PoolKind::SecurityAnswers)
        .unwrap();
    assert!(!answers.exhausted_lanes.iter().any(|lane| lane == "childhood_friend"));
    let breakdown = manager.breakdown(PoolKind::SecurityAnswers).await.unwrap();
    assert_eq!(breakdown.len(), Category::ALL.len());
}

#[tokio::test]
async fn test_populate_keys_are_unique() {
    let dir = TempDir::new().unwrap();
    let config = PoolConfig {
        batch_size: 250,
        ..test_config(&dir)
    };
    let manager = open_manager(&config).await;

    manager.populate(PoolKind::Names, 1200).await.unwrap();
    manager.populate(PoolKind::Cities, 300).await.unwrap();
    manager.populate(PoolKind::SecurityAnswers, 400).await.unwrap();

    let mut names = HashSet::new();
    let mut cities = HashSet::new();
    let mut answers = HashSet::new();
    for kind in PoolKind::ALL {
        for record in manager.store().all_records(kind).await.unwrap() {
            let fresh = match record {
                PoolRecord::Name(n) => {
                    names.insert((n.first_name, n.last_name, n.birthdate, n.locale))
                }
                PoolRecord::City(c) => cities.insert((c.city_name, c.locale)),
                PoolRecord::SecurityAnswer(a) => answers.insert((a.category, a.answer_text)),
            };
            assert!(fresh, "duplicate key in {kind} pool");
        }
    }
    assert_eq!(names.len(), 1200);
    assert_eq!(cities.len(), 300);
    assert_eq!(answers.len(), 400);
}

#[tokio::test]
async fn test_populate_is_incremental() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&test_config(&dir)).await;

    manager.populate(PoolKind::Cities, 100).await.unwrap();
    let report = manager.populate(PoolKind::Cities, 150).await.unwrap();
    assert_eq!(report.inserted, 50);
    assert_eq!(report.total, 150);

    let report = manager.populate(PoolKind::Cities, 120).await.unwrap();
    assert!(report.target_met);
    assert_eq!(report.inserted, 0);
    assert_eq!(manager.count(PoolKind::Cities).await.unwrap().total, 150);
}

#[tokio::test]
async fn test_populate_commits_whole_batches() {
    let dir = TempDir::new().unwrap();
    let config = PoolConfig {
        batch_size: 100,
        ..test_config(&dir)
    };
    let manager = open_manager(&config).await;

    manager.populate(PoolKind::Names, 700).await.unwrap();
    let total = manager.count(PoolKind::Names).await.unwrap().total;
    assert_eq!(total % config.batch_size as u64, 0);
}

#[tokio::test]
async fn test_exhaustion_is_reported_not_raised() {
    let dir = TempDir::new().unwrap();
    let config = PoolConfig {
        locales: vec![Locale::FiFi],
        max_retries: 20,
        ..test_config(&dir)
    };
    let manager = open_manager(&config).await;
    let vocabulary_size = manager.vocabulary().cities_for(Locale::FiFi).unwrap().len() as u64;

    let report = manager.populate(PoolKind::Cities, 10_000).await.unwrap();
    assert!(!report.target_met);
    assert_eq!(report.total, vocabulary_size);
    assert_eq!(report.exhausted_lanes, vec!["fi_FI".to_string()]);

    // Every Finnish city made it in despite the retry budget.
    let report = manager.populate(PoolKind::Cities, 10_000).await.unwrap();
    assert_eq!(report.inserted, 0);
    assert!(!report.target_met);
}

#[tokio::test]
async fn test_answer_exhaustion_covers_every_category() {
    let dir = TempDir::new().unwrap();
    let config = PoolConfig {
        locales: vec![Locale::DaDk],
        ..test_config(&dir)
    };
    let manager = open_manager(&config).await;

    let expected: u64 = Category::ALL
        .iter()
        .map(|&c| manager.vocabulary().answers_for(c).len() as u64)
        .sum();

    let report = manager
        .populate(PoolKind::SecurityAnswers, expected + 1)
        .await
        .unwrap();
    assert!(!report.target_met);
    assert_eq!(report.total, expected);
    assert_eq!(report.exhausted_lanes.len(), Category::ALL.len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_draws_never_share_a_row() {
    let dir = TempDir::new().unwrap();
    let config = PoolConfig {
        max_connections: 4,
        ..test_config(&dir)
    };
    let manager = Arc::new(open_manager(&config).await);

    let rows = 64;
    manager.populate(PoolKind::Names, rows).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..rows {
        let manager = manager.clone();
        handles.push(tokio::spawn(async move {
            manager
                .draw(PoolKind::Names, true, None)
                .await
                .expect("draw failed")
                .map(|record| record.id())
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let id = handle.await.unwrap().expect("every caller gets a row");
        assert!(ids.insert(id), "row {id} handed out twice");
    }

    assert_eq!(ids.len() as u64, rows);
    assert_eq!(manager.count(PoolKind::Names).await.unwrap().available, 0);
}

#[tokio::test]
async fn test_reset_all_is_idempotent_and_keeps_content() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&test_config(&dir)).await;

    manager.populate(PoolKind::Names, 50).await.unwrap();
    manager.populate(PoolKind::Cities, 30).await.unwrap();
    manager.populate(PoolKind::SecurityAnswers, 20).await.unwrap();

    for _ in 0..10 {
        manager.draw(PoolKind::Names, true, None).await.unwrap();
        manager.draw(PoolKind::Cities, true, None).await.unwrap();
        manager.draw(PoolKind::SecurityAnswers, true, None).await.unwrap();
    }

    let mut before = Vec::new();
    for kind in PoolKind::ALL {
        before.push(content(&manager, kind).await);
    }

    manager.reset_all().await.unwrap();
    manager.reset_all().await.unwrap();

    let stats = manager.stats().await.unwrap();
    for kind in PoolKind::ALL {
        let count = stats.get(kind);
        assert_eq!(count.used, 0);
        assert_eq!(count.available, count.total);
    }
    assert_eq!(stats.names.total, 50);

    for (kind, before) in PoolKind::ALL.into_iter().zip(before) {
        assert_eq!(before, content(&manager, kind).await, "{kind} rows changed");
    }
}

#[tokio::test]
async fn test_typed_draws_and_filters() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&test_config(&dir)).await;

    manager.populate(PoolKind::Names, 300).await.unwrap();
    manager.populate(PoolKind::Cities, 200).await.unwrap();
    manager.populate(PoolKind::SecurityAnswers, 200).await.unwrap();

    let name = manager
        .draw_name(Some(Locale::EnUs), false)
        .await
        .unwrap()
        .expect("en_US names populated");
    assert_eq!(name.locale, Locale::EnUs);
    assert!(!name.used);

    let answer = manager
        .draw_answer(Some(Category::BirthCity), true)
        .await
        .unwrap()
        .expect("birth_city answers populated");
    assert_eq!(answer.category, Category::BirthCity);
    assert!(answer.used);

    let city = manager.draw_city(None, false).await.unwrap().unwrap();
    manager.mark_used(PoolKind::Cities, city.id).await.unwrap();
    let count = manager.count(PoolKind::Cities).await.unwrap();
    assert_eq!(count.used, 1);
    assert_eq!(count.available, count.total - count.used);
}

#[tokio::test]
async fn test_breakdown_and_gender_counts() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&test_config(&dir)).await;

    manager.populate(PoolKind::Names, 400).await.unwrap();
    manager.populate(PoolKind::SecurityAnswers, 100).await.unwrap();

    let by_locale = manager.breakdown(PoolKind::Names).await.unwrap();
    let sum: u64 = by_locale.iter().map(|(_, count)| count.total).sum();
    assert_eq!(sum, 400);
    assert!(by_locale.iter().all(|(label, _)| label.parse::<Locale>().is_ok()));

    let by_category = manager.breakdown(PoolKind::SecurityAnswers).await.unwrap();
    assert!(
        by_category
            .iter()
            .all(|(label, _)| label.parse::<Category>().is_ok())
    );

    let genders = manager.gender_counts().await.unwrap();
    let tagged: u64 = genders
        .iter()
        .filter(|(gender, _)| gender.is_some())
        .map(|(_, total)| total)
        .sum();
    assert_eq!(tagged, 400);
}
