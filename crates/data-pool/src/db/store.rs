//! SQLite-backed storage for the three pools.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use rand::Rng;
use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tracing::{debug, info};

use super::entry::{PoolEntry, decode_record, record_columns};
use crate::error::PoolError;
use crate::models::{DrawFilter, Gender, PoolCount, PoolKind, PoolRecord};

/// Handle to the pool database. Cloning shares the underlying connections.
#[derive(Clone)]
pub struct PoolStore {
    pool: SqlitePool,
}

impl PoolStore {
    /// Opens (creating if missing) the database file and applies migrations.
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self, PoolError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        info!("Pool store opened at {}", path.display());
        Ok(Self { pool })
    }

    /// Closes all connections. Pending operations finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Inserts all entries in one transaction.
    ///
    /// Callers deduplicate beforehand; a key collision with a persisted row
    /// rolls the whole batch back and reports [`PoolError::DuplicateKeyRejected`].
    pub async fn insert_batch<E: PoolEntry>(&self, entries: &[E]) -> Result<u64, PoolError> {
        if entries.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            E::KIND.table(),
            E::COLUMNS.join(", "),
        );

        let mut tx = self.pool.begin().await?;
        for entry in entries {
            if let Err(e) = entry.bind(sqlx::query(&sql))?.execute(&mut *tx).await {
                // Dropping the transaction rolls the batch back.
                return Err(match e {
                    sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                        PoolError::DuplicateKeyRejected { kind: E::KIND }
                    }
                    other => other.into(),
                });
            }
        }
        tx.commit().await?;

        debug!("Committed {} {} rows", entries.len(), E::KIND);
        Ok(entries.len() as u64)
    }

    /// Uniqueness keys of every persisted row of the entry's pool.
    pub async fn existing_keys<E: PoolEntry>(&self) -> Result<HashSet<E::Key>, PoolError> {
        let sql = format!(
            "SELECT {} FROM {}",
            E::COLUMNS.join(", "),
            E::KIND.table()
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(|row| E::from_row(row).map(|e| e.key())).collect()
    }

    /// Picks one unused row uniformly at random, optionally restricted by
    /// `filter`.
    ///
    /// Ids are sampled uniformly between the lowest and highest unused
    /// matching id, and a sample that lands on a used or non-matching row is
    /// rejected. When the matching rows are too sparse for
    /// [`DRAW_ATTEMPTS`] samples to hit one, the draw switches to picking a
    /// uniform rank among the matching unused rows instead.
    ///
    /// With `mark_as_used` each attempt is a single conditional
    /// `UPDATE ... RETURNING`, so concurrent callers never receive the same
    /// row. Returns `None` when no unused row matches.
    pub async fn draw_random(
        &self,
        kind: PoolKind,
        filter: Option<DrawFilter>,
        mark_as_used: bool,
    ) -> Result<Option<PoolRecord>, PoolError> {
        if let Some(filter) = filter
            && !filter.applies_to(kind)
        {
            return Err(PoolError::InvalidFilter { kind, filter });
        }

        let queries = DrawQueries::new(kind, filter.is_some(), mark_as_used);

        let Some((low, high)) = self.unused_id_range(&queries, filter).await? else {
            return Ok(None);
        };
        for _ in 0..DRAW_ATTEMPTS {
            let id = rand::thread_rng().gen_range(low..=high);
            if let Some(record) = self.draw_at(kind, &queries.by_id, id, filter).await? {
                return Ok(Some(record));
            }
        }

        debug!("Sparse {} draw, picking by rank", kind);
        for _ in 0..DRAW_ATTEMPTS {
            let available = self.unused_count(&queries, filter).await?;
            if available == 0 {
                return Ok(None);
            }
            let rank = rand::thread_rng().gen_range(0..available);
            if let Some(record) = self.draw_at(kind, &queries.by_rank, rank, filter).await? {
                return Ok(Some(record));
            }
        }

        // Concurrent callers kept taking the ranked row; settle for the first.
        self.draw_at(kind, &queries.by_rank, 0, filter).await
    }

    async fn unused_id_range(
        &self,
        queries: &DrawQueries,
        filter: Option<DrawFilter>,
    ) -> Result<Option<(i64, i64)>, PoolError> {
        let mut query = sqlx::query(&queries.range);
        if let Some(filter) = filter {
            query = query.bind(filter.value());
        }
        let row = query.fetch_one(&self.pool).await?;
        let low: Option<i64> = row.try_get("low")?;
        let high: Option<i64> = row.try_get("high")?;
        Ok(low.zip(high))
    }

    async fn unused_count(
        &self,
        queries: &DrawQueries,
        filter: Option<DrawFilter>,
    ) -> Result<i64, PoolError> {
        let mut query = sqlx::query(&queries.available);
        if let Some(filter) = filter {
            query = query.bind(filter.value());
        }
        let row = query.fetch_one(&self.pool).await?;
        Ok(row.try_get("available")?)
    }

    async fn draw_at(
        &self,
        kind: PoolKind,
        sql: &str,
        pick: i64,
        filter: Option<DrawFilter>,
    ) -> Result<Option<PoolRecord>, PoolError> {
        let mut query = sqlx::query(sql).bind(pick);
        if let Some(filter) = filter {
            query = query.bind(filter.value());
        }
        let row = query.fetch_optional(&self.pool).await?;
        row.map(|row| decode_record(kind, &row)).transpose()
    }

    /// Marks a row used. Marking an already-used row is a no-op.
    pub async fn mark_used(&self, kind: PoolKind, id: i64) -> Result<(), PoolError> {
        let sql = format!("UPDATE {} SET used = 1 WHERE id = ?", kind.table());
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(PoolError::UnknownRecord { kind, id });
        }
        Ok(())
    }

    pub async fn count(&self, kind: PoolKind) -> Result<PoolCount, PoolError> {
        let sql = format!(
            "SELECT COUNT(*) AS total, COALESCE(SUM(used), 0) AS used FROM {}",
            kind.table()
        );
        let row = sqlx::query(&sql).fetch_one(&self.pool).await?;
        Ok(PoolCount::new(
            row.try_get::<i64, _>("total")? as u64,
            row.try_get::<i64, _>("used")? as u64,
        ))
    }

    /// Clears every usage flag of a pool. Row content is untouched.
    pub async fn reset(&self, kind: PoolKind) -> Result<u64, PoolError> {
        let sql = format!("UPDATE {} SET used = 0 WHERE used = 1", kind.table());
        let result = sqlx::query(&sql).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Counts grouped by locale (names, cities) or category (security answers).
    pub async fn breakdown(&self, kind: PoolKind) -> Result<Vec<(String, PoolCount)>, PoolError> {
        let column = kind.filter_column();
        let sql = format!(
            "SELECT {column} AS label, COUNT(*) AS total, COALESCE(SUM(used), 0) AS used \
             FROM {} GROUP BY {column} ORDER BY {column}",
            kind.table()
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| {
                Ok((
                    row.try_get::<String, _>("label")?,
                    PoolCount::new(
                        row.try_get::<i64, _>("total")? as u64,
                        row.try_get::<i64, _>("used")? as u64,
                    ),
                ))
            })
            .collect()
    }

    /// Name rows per gender tag; untagged rows are counted under `None`.
    pub async fn gender_counts(&self) -> Result<Vec<(Option<Gender>, u64)>, PoolError> {
        let rows = sqlx::query(
            "SELECT gender, COUNT(*) AS total FROM names_pool GROUP BY gender ORDER BY gender",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let gender = row
                    .try_get::<Option<&str>, _>("gender")?
                    .map(Gender::from_str)
                    .transpose()?;
                Ok((gender, row.try_get::<i64, _>("total")? as u64))
            })
            .collect()
    }

    pub async fn get(&self, kind: PoolKind, id: i64) -> Result<Option<PoolRecord>, PoolError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?",
            record_columns(kind),
            kind.table()
        );
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(|row| decode_record(kind, &row)).transpose()
    }

    /// Every row of a pool in id order.
    pub async fn all_records(&self, kind: PoolKind) -> Result<Vec<PoolRecord>, PoolError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            record_columns(kind),
            kind.table()
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(|row| decode_record(kind, row)).collect()
    }
}

/// Uniform id samples tried before a draw falls back to rank selection.
const DRAW_ATTEMPTS: usize = 32;

/// SQL for one kind of draw.
///
/// `range` and `available` take the filter value as `?1`. `by_id` and
/// `by_rank` take the sampled id or rank as `?1` and the filter value as `?2`.
struct DrawQueries {
    range: String,
    available: String,
    by_id: String,
    by_rank: String,
}

impl DrawQueries {
    fn new(kind: PoolKind, filtered: bool, mark_as_used: bool) -> Self {
        let table = kind.table();
        let columns = record_columns(kind);
        let filter = |param: u8| {
            if filtered {
                format!(" AND {} = ?{param}", kind.filter_column())
            } else {
                String::new()
            }
        };

        // Separate subqueries keep each MIN/MAX a single index seek.
        let range = format!(
            "SELECT (SELECT MIN(id) FROM {table} WHERE used = 0{f}) AS low, \
             (SELECT MAX(id) FROM {table} WHERE used = 0{f}) AS high",
            f = filter(1)
        );
        let available = format!(
            "SELECT COUNT(*) AS available FROM {table} WHERE used = 0{}",
            filter(1)
        );

        let by_id_condition = format!("id = ?1 AND used = 0{}", filter(2));
        let by_rank_condition = format!(
            "used = 0 AND id = (SELECT id FROM {table} WHERE used = 0{} \
             ORDER BY id LIMIT 1 OFFSET ?1)",
            filter(2)
        );

        let pick = |condition: &str| {
            if mark_as_used {
                format!("UPDATE {table} SET used = 1 WHERE {condition} RETURNING {columns}")
            } else {
                format!("SELECT {columns} FROM {table} WHERE {condition}")
            }
        };

        Self {
            range,
            available,
            by_id: pick(&by_id_condition),
            by_rank: pick(&by_rank_condition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marking_draw_is_one_conditional_update() {
        let queries = DrawQueries::new(PoolKind::Names, false, true);
        assert!(
            queries
                .by_id
                .starts_with("UPDATE names_pool SET used = 1 WHERE id = ?1 AND used = 0")
        );
        assert!(queries.by_id.contains("RETURNING id, first_name"));
        assert!(queries.by_rank.contains("LIMIT 1 OFFSET ?1) RETURNING"));
        assert!(!queries.by_id.contains("?2"));
    }

    #[test]
    fn test_filtered_queries_number_their_parameters() {
        let queries = DrawQueries::new(PoolKind::SecurityAnswers, true, false);
        assert!(queries.by_id.starts_with("SELECT id, category, answer_text, used"));
        assert!(queries.by_id.ends_with("AND category = ?2"));
        assert_eq!(queries.range.matches("AND category = ?1").count(), 2);
        assert!(queries.available.ends_with("AND category = ?1"));
    }
}
