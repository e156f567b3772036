use thiserror::Error;

use crate::models::{DrawFilter, PoolKind};

/// Errors raised by a vocabulary source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Empty vocabulary list: {0}")]
    EmptyList(String),
}

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error("Batch rejected: duplicate key in {kind} pool")]
    DuplicateKeyRejected { kind: PoolKind },

    #[error("Filter {filter} does not apply to the {kind} pool")]
    InvalidFilter { kind: PoolKind, filter: DrawFilter },

    #[error("No {kind} record with id {id}")]
    UnknownRecord { kind: PoolKind, id: i64 },

    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    #[error("Date error: {0}")]
    Date(#[from] time::error::ComponentRange),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
