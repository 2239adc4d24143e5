use async_trait::async_trait;
use chrono::Utc;
use livehub_application::ports::VisitorLogRepository;
use livehub_domain::{DomainError, NewVisitorLog, VisitorLog, TIMESTAMP_FORMAT};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type VisitorLogRow = (i64, String, Option<i64>, i64, i64, String, Option<String>);

const VISITOR_LOG_COLUMNS: &str = "id, ip, user_id, live_room_id, duration, \
     datetime(created_at) AS created_at, datetime(deleted_at) AS deleted_at";

pub struct SqliteVisitorLogRepository {
    pool: SqlitePool,
}

impl SqliteVisitorLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_log(row: VisitorLogRow) -> VisitorLog {
        let (id, ip, user_id, live_room_id, duration, created_at, deleted_at) = row;
        VisitorLog {
            id,
            ip,
            user_id,
            live_room_id,
            duration,
            created_at,
            deleted_at,
        }
    }
}

#[async_trait]
impl VisitorLogRepository for SqliteVisitorLogRepository {
    #[instrument(skip(self))]
    async fn create(&self, log: NewVisitorLog) -> Result<VisitorLog, DomainError> {
        let created_at = log
            .created_at
            .unwrap_or_else(|| Utc::now().naive_utc())
            .format(TIMESTAMP_FORMAT)
            .to_string();

        let row = sqlx::query_as::<_, VisitorLogRow>(&format!(
            "INSERT INTO visitor_log (ip, user_id, live_room_id, duration, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {}",
            VISITOR_LOG_COLUMNS
        ))
        .bind(&log.ip)
        .bind(log.user_id)
        .bind(log.live_room_id)
        .bind(log.duration)
        .bind(&created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert visitor log");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Self::row_to_log(row))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<VisitorLog>, DomainError> {
        let row = sqlx::query_as::<_, VisitorLogRow>(&format!(
            "SELECT {} FROM visitor_log WHERE id = ?",
            VISITOR_LOG_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query visitor log by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_log))
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let result = sqlx::query(
            "UPDATE visitor_log SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to soft-delete visitor log");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected() > 0)
    }
}
