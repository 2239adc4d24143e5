use async_trait::async_trait;
use livehub_application::ports::CalendarRepository;
use livehub_domain::{CalendarCoverage, DomainError, Granularity};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

use super::visitor_analytics_repository::report_query::calendar_table;

const KEYS_PER_CHUNK: usize = 500;

fn build_insert_sql(table: &str, n: usize) -> String {
    debug_assert!(n > 0 && n <= KEYS_PER_CHUNK);
    let mut sql = format!("INSERT OR IGNORE INTO {} (bucket_key) VALUES ", table);
    for i in 0..n {
        if i > 0 {
            sql.push(',');
        }
        sql.push_str("(?)");
    }
    sql
}

pub struct SqliteCalendarRepository {
    pool: SqlitePool,
}

impl SqliteCalendarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalendarRepository for SqliteCalendarRepository {
    #[instrument(skip(self, keys), fields(keys = keys.len()))]
    async fn insert_missing(
        &self,
        granularity: Granularity,
        keys: Vec<String>,
    ) -> Result<u64, DomainError> {
        let table = calendar_table(granularity);

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin calendar transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut inserted = 0u64;
        for chunk in keys.chunks(KEYS_PER_CHUNK) {
            let sql = build_insert_sql(table, chunk.len());
            let mut q = sqlx::query(&sql);
            for key in chunk {
                q = q.bind(key.as_str());
            }
            let result = q.execute(&mut *tx).await.map_err(|e| {
                error!(error = %e, chunk_size = chunk.len(), "Failed to insert calendar buckets");
                DomainError::DatabaseError(e.to_string())
            })?;
            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit calendar buckets");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(granularity = %granularity, inserted, "Calendar buckets inserted");
        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn count(&self, granularity: Granularity) -> Result<u64, DomainError> {
        let (count,) = sqlx::query_as::<_, (i64,)>(&format!(
            "SELECT COUNT(*) FROM {}",
            calendar_table(granularity)
        ))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to count calendar buckets");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(count as u64)
    }

    #[instrument(skip(self))]
    async fn coverage(
        &self,
        granularity: Granularity,
    ) -> Result<Option<CalendarCoverage>, DomainError> {
        let (first, last, count) = sqlx::query_as::<_, (Option<String>, Option<String>, i64)>(
            &format!(
                "SELECT MIN(bucket_key), MAX(bucket_key), COUNT(*) FROM {}",
                calendar_table(granularity)
            ),
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to read calendar coverage");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(first.zip(last).map(|(first, last)| CalendarCoverage {
            first,
            last,
            count: count as u64,
        }))
    }
}
