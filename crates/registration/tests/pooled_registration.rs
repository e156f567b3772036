//! Registration records drawn from a real pool database.

use std::sync::Arc;

use data_pool::prelude::*;
use registration::{RegistrationConfig, RegistrationGenerator, SourceMode};
use tempfile::TempDir;

async fn open_manager(dir: &TempDir) -> Arc<PoolManager> {
    let config = PoolConfig {
        db_path: dir.path().join("data_pool.db"),
        ..PoolConfig::default()
    };
    Arc::new(
        PoolManager::open(&config)
            .await
            .expect("Failed to open pool manager"),
    )
}

#[tokio::test]
async fn test_pooled_records_consume_pool_rows() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&dir).await;
    manager.populate(PoolKind::Names, 20).await.unwrap();
    manager.populate(PoolKind::Cities, 20).await.unwrap();
    manager.populate(PoolKind::SecurityAnswers, 200).await.unwrap();

    let generator =
        RegistrationGenerator::pooled(RegistrationConfig::default(), manager.clone(), true)
            .unwrap();

    let record = generator.generate(SourceMode::Pooled).await.unwrap();

    let names = manager.store().all_records(PoolKind::Names).await.unwrap();
    let drawn = names
        .iter()
        .find_map(|record| match record {
            PoolRecord::Name(name) if name.used => Some(name.clone()),
            _ => None,
        })
        .expect("one name marked used");
    assert_eq!(record.first_name, drawn.first_name);
    assert_eq!(record.last_name, drawn.last_name);
    assert_eq!(record.birthdate, drawn.birthdate);

    let stats = manager.stats().await.unwrap();
    assert_eq!(stats.names.used, 1);
    assert_eq!(stats.cities.used, 1);
    assert_eq!(stats.security_answers.used, 1);
}

#[tokio::test]
async fn test_peek_mode_leaves_flags_alone() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&dir).await;
    manager.populate(PoolKind::Names, 10).await.unwrap();

    let generator =
        RegistrationGenerator::pooled(RegistrationConfig::default(), manager.clone(), false)
            .unwrap();
    generator.generate_batch(5, SourceMode::Pooled).await.unwrap();

    assert_eq!(manager.stats().await.unwrap().names.used, 0);
}

#[tokio::test]
async fn test_empty_pools_fall_back_to_synthetic_values() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&dir).await;
    manager.populate(PoolKind::Names, 2).await.unwrap();

    let generator =
        RegistrationGenerator::pooled(RegistrationConfig::default(), manager.clone(), true)
            .unwrap();

    let records = generator.generate_batch(5, SourceMode::Pooled).await.unwrap();
    assert_eq!(records.len(), 5);
    for record in &records {
        assert!(!record.first_name.is_empty());
        assert!(!record.city.is_empty());
        assert!(!record.security_answer.is_empty());
    }

    let stats = manager.stats().await.unwrap();
    assert_eq!(stats.names.available, 0);
    assert_eq!(stats.cities.total, 0);
}
