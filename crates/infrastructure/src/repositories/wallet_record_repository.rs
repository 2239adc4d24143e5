use async_trait::async_trait;
use chrono::Utc;
use livehub_application::ports::WalletRecordRepository;
use livehub_domain::{
    DomainError, ListQuery, WalletRecord, WalletRecordColumn, WalletRecordFilter,
    WalletRecordInput, TIMESTAMP_FORMAT,
};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

use super::sql::{bind_all, BindValue, ListWhere};

type WalletRecordRow = (
    i64,
    i64,
    Option<i64>,
    i64,
    Option<String>,
    i64,
    Option<String>,
    String,
    String,
);

const WALLET_RECORD_COLUMNS: &str = "id, user_id, order_id, record_type, name, amount, remark, \
     datetime(created_at) AS created_at, datetime(updated_at) AS updated_at";

pub struct SqliteWalletRecordRepository {
    pool: SqlitePool,
}

impl SqliteWalletRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: WalletRecordRow) -> WalletRecord {
        let (id, user_id, order_id, record_type, name, amount, remark, created_at, updated_at) =
            row;
        WalletRecord {
            id,
            user_id,
            order_id,
            record_type,
            name,
            amount,
            remark,
            created_at,
            updated_at,
        }
    }
}

#[async_trait]
impl WalletRecordRepository for SqliteWalletRecordRepository {
    #[instrument(skip(self))]
    async fn list(
        &self,
        query: &ListQuery<WalletRecordColumn, WalletRecordFilter>,
    ) -> Result<(Vec<WalletRecord>, u64), DomainError> {
        let filter = &query.filter;
        let mut conditions = ListWhere::new();
        conditions
            .eq("id", filter.id)
            .eq("user_id", filter.user_id)
            .eq("order_id", filter.order_id)
            .eq("record_type", filter.record_type)
            .eq("name", filter.name.clone())
            .keyword(&["name", "remark"], query.keyword.as_deref())
            .time_window(query.time_filter.as_ref());

        let (count_query, rows_query) =
            conditions.build(WALLET_RECORD_COLUMNS, "wallet_record", query);

        let total = count_query.fetch_count(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to count wallet records");
            DomainError::DatabaseError(e.to_string())
        })?;

        let rows = rows_query
            .query()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list wallet records");
                DomainError::DatabaseError(e.to_string())
            })?;

        let records = rows
            .iter()
            .map(|row| {
                <WalletRecordRow as sqlx::FromRow<'_, sqlx::sqlite::SqliteRow>>::from_row(row)
                    .map(Self::row_to_record)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!(error = %e, "Failed to decode wallet record row");
                DomainError::DatabaseError(e.to_string())
            })?;

        debug!(count = records.len(), total, "Wallet records listed");
        Ok((records, total))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<WalletRecord>, DomainError> {
        let row = sqlx::query_as::<_, WalletRecordRow>(&format!(
            "SELECT {} FROM wallet_record WHERE id = ?",
            WALLET_RECORD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query wallet record by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_record))
    }

    #[instrument(skip(self))]
    async fn create(&self, input: WalletRecordInput) -> Result<WalletRecord, DomainError> {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let row = sqlx::query_as::<_, WalletRecordRow>(&format!(
            "INSERT INTO wallet_record (user_id, order_id, record_type, name, amount, remark,
                                        created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {}",
            WALLET_RECORD_COLUMNS
        ))
        .bind(input.user_id)
        .bind(input.order_id)
        .bind(input.record_type.unwrap_or(0))
        .bind(&input.name)
        .bind(input.amount)
        .bind(&input.remark)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create wallet record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Self::row_to_record(row))
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: i64,
        input: WalletRecordInput,
    ) -> Result<WalletRecord, DomainError> {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let mut fields: Vec<(&str, BindValue)> = [
            ("user_id", input.user_id.map(BindValue::Int)),
            ("order_id", input.order_id.map(BindValue::Int)),
            ("record_type", input.record_type.map(BindValue::Int)),
            ("name", input.name.map(BindValue::Text)),
            ("amount", input.amount.map(BindValue::Int)),
            ("remark", input.remark.map(BindValue::Text)),
        ]
        .into_iter()
        .filter_map(|(c, v)| v.map(|v| (c, v)))
        .collect();
        fields.push(("updated_at", BindValue::Text(now)));

        let assignments: Vec<String> = fields.iter().map(|(c, _)| format!("{} = ?", c)).collect();
        let mut binds: Vec<BindValue> = fields.into_iter().map(|(_, v)| v).collect();
        binds.push(BindValue::Int(id));
        let sql = format!(
            "UPDATE wallet_record SET {} WHERE id = ? RETURNING {}",
            assignments.join(", "),
            WALLET_RECORD_COLUMNS
        );

        let row = bind_all(sqlx::query(&sql), &binds)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to update wallet record");
                DomainError::DatabaseError(e.to_string())
            })?
            .ok_or(DomainError::WalletRecordNotFound(id))?;

        <WalletRecordRow as sqlx::FromRow<'_, sqlx::sqlite::SqliteRow>>::from_row(&row)
            .map(Self::row_to_record)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM wallet_record WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete wallet record");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::WalletRecordNotFound(id));
        }

        Ok(())
    }
}
