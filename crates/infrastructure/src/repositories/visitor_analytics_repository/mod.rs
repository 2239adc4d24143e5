pub mod report_query;

use async_trait::async_trait;
use livehub_application::ports::VisitorAnalyticsRepository;
use livehub_domain::{
    DomainError, Granularity, IpVisitColumn, IpVisitRecord, ReportColumn, ReportRow, SortOrder,
    TimeRange, UserVisitColumn, UserVisitRecord,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, error, instrument};

use crate::repositories::sql::BuiltQuery;

pub struct SqliteVisitorAnalyticsRepository {
    pool: SqlitePool,
}

impl SqliteVisitorAnalyticsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch<T>(
        &self,
        query: BuiltQuery,
        map: fn(&SqliteRow) -> Result<T, sqlx::Error>,
        what: &'static str,
    ) -> Result<Vec<T>, DomainError> {
        let rows = query.query().fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, report = what, "Failed to run visitor report");
            DomainError::DatabaseError(e.to_string())
        })?;

        rows.iter()
            .map(map)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| {
                error!(error = %e, report = what, "Failed to decode visitor report row");
                DomainError::DatabaseError(e.to_string())
            })
    }
}

fn row_to_report(row: &SqliteRow) -> Result<ReportRow, sqlx::Error> {
    Ok(ReportRow {
        format_date: row.try_get("format_date")?,
        sum_duration: row.try_get("sum_duration")?,
        unique_ip_str: row.try_get("unique_ip_str")?,
        unique_user_id_str: row.try_get("unique_user_id_str")?,
        ip_str: row.try_get("ip_str")?,
        user_id_str: row.try_get("user_id_str")?,
        duration_str: row.try_get("duration_str")?,
    })
}

fn row_to_user_visit(row: &SqliteRow) -> Result<UserVisitRecord, sqlx::Error> {
    Ok(UserVisitRecord {
        format_date: row.try_get("format_date")?,
        username: row.try_get("username")?,
        is_tourist: row.try_get("is_tourist")?,
        user_id_nums: row.try_get("user_id_nums")?,
        user_id: row.try_get("user_id")?,
        user_role_id: row.try_get("user_role_id")?,
        user_role_name: row.try_get("user_role_name")?,
        parent_user_id: row.try_get("parent_user_id")?,
        parent_user_username: row.try_get("parent_user_username")?,
        sum_duration: row.try_get("sum_duration")?,
        live_room_id_str: row.try_get("live_room_id_str")?,
        duration_str: row.try_get("duration_str")?,
    })
}

fn row_to_ip_visit(row: &SqliteRow) -> Result<IpVisitRecord, sqlx::Error> {
    Ok(IpVisitRecord {
        format_date: row.try_get("format_date")?,
        ip: row.try_get("ip")?,
        ip_nums: row.try_get("ip_nums")?,
        sum_duration: row.try_get("sum_duration")?,
        live_room_id_str: row.try_get("live_room_id_str")?,
        duration_str: row.try_get("duration_str")?,
    })
}

#[async_trait]
impl VisitorAnalyticsRepository for SqliteVisitorAnalyticsRepository {
    #[instrument(skip(self))]
    async fn report(
        &self,
        granularity: Granularity,
        range: TimeRange,
        order: Option<SortOrder<ReportColumn>>,
    ) -> Result<Vec<ReportRow>, DomainError> {
        let query = report_query::build_for(granularity, range, order);
        let rows = self
            .fetch(query, row_to_report, granularity.as_str())
            .await?;

        debug!(buckets = rows.len(), "Visitor report fetched");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn user_visit_record(
        &self,
        user_id: i64,
        range: TimeRange,
        order: Option<SortOrder<UserVisitColumn>>,
    ) -> Result<Vec<UserVisitRecord>, DomainError> {
        let query = report_query::build_user_visit_record(user_id, range, order);
        self.fetch(query, row_to_user_visit, "user_visit_record")
            .await
    }

    #[instrument(skip(self))]
    async fn ip_visit_record(
        &self,
        ip: &str,
        range: TimeRange,
        order: Option<SortOrder<IpVisitColumn>>,
    ) -> Result<Vec<IpVisitRecord>, DomainError> {
        let query = report_query::build_ip_visit_record(ip, range, order);
        self.fetch(query, row_to_ip_visit, "ip_visit_record").await
    }
}
