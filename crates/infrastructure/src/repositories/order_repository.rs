use async_trait::async_trait;
use chrono::Utc;
use livehub_application::ports::OrderRepository;
use livehub_domain::{
    DomainError, ListQuery, NewOrder, Order, OrderColumn, OrderFilter, TradeDetails,
    TIMESTAMP_FORMAT,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, error, instrument};

use super::sql::ListWhere;

const ORDER_COLUMNS: &str = "id, user_id, out_trade_no, total_amount, subject, body, \
     product_code, qr_code, trade_no, trade_status, buyer_logon_id, buyer_pay_amount, \
     buyer_user_id, invoice_amount, point_amount, receipt_amount, send_pay_date, \
     datetime(created_at) AS created_at, datetime(updated_at) AS updated_at";

pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_order(row: &SqliteRow) -> Result<Order, sqlx::Error> {
    Ok(Order {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        out_trade_no: row.try_get("out_trade_no")?,
        total_amount: row.try_get("total_amount")?,
        subject: row.try_get("subject")?,
        body: row.try_get("body")?,
        product_code: row.try_get("product_code")?,
        qr_code: row.try_get("qr_code")?,
        trade: TradeDetails {
            trade_no: row.try_get("trade_no")?,
            trade_status: row.try_get("trade_status")?,
            buyer_logon_id: row.try_get("buyer_logon_id")?,
            buyer_pay_amount: row.try_get("buyer_pay_amount")?,
            buyer_user_id: row.try_get("buyer_user_id")?,
            invoice_amount: row.try_get("invoice_amount")?,
            point_amount: row.try_get("point_amount")?,
            receipt_amount: row.try_get("receipt_amount")?,
            send_pay_date: row.try_get("send_pay_date")?,
        },
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn decode(row: &SqliteRow) -> Result<Order, DomainError> {
    row_to_order(row).map_err(|e| {
        error!(error = %e, "Failed to decode order row");
        DomainError::DatabaseError(e.to_string())
    })
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    #[instrument(skip(self))]
    async fn list(
        &self,
        query: &ListQuery<OrderColumn, OrderFilter>,
    ) -> Result<(Vec<Order>, u64), DomainError> {
        let filter = &query.filter;
        let mut conditions = ListWhere::new();
        conditions
            .eq("id", filter.id)
            .eq("user_id", filter.user_id)
            .eq("trade_status", filter.trade_status.clone())
            .keyword(&["subject", "out_trade_no"], query.keyword.as_deref())
            .time_window(query.time_filter.as_ref());

        let (count_query, rows_query) = conditions.build(ORDER_COLUMNS, "orders", query);

        let total = count_query.fetch_count(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to count orders");
            DomainError::DatabaseError(e.to_string())
        })?;

        let rows = rows_query.query().fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to list orders");
            DomainError::DatabaseError(e.to_string())
        })?;

        let orders = rows.iter().map(decode).collect::<Result<Vec<_>, _>>()?;

        debug!(count = orders.len(), total, "Orders listed");
        Ok((orders, total))
    }

    #[instrument(skip(self))]
    async fn get_by_out_trade_no(&self, out_trade_no: &str) -> Result<Option<Order>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM orders WHERE out_trade_no = ?",
            ORDER_COLUMNS
        ))
        .bind(out_trade_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query order by out_trade_no");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.as_ref().map(decode).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let row = sqlx::query(&format!(
            "INSERT INTO orders (user_id, out_trade_no, total_amount, subject, body,
                                 product_code, qr_code, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {}",
            ORDER_COLUMNS
        ))
        .bind(order.user_id)
        .bind(&order.out_trade_no)
        .bind(&order.total_amount)
        .bind(&order.subject)
        .bind(&order.body)
        .bind(&order.product_code)
        .bind(&order.qr_code)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                DomainError::Validation(format!(
                    "out_trade_no '{}' already exists",
                    order.out_trade_no
                ))
            } else {
                error!(error = %e, "Failed to create order");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        decode(&row)
    }

    #[instrument(skip(self))]
    async fn update_trade(
        &self,
        out_trade_no: &str,
        trade: &TradeDetails,
    ) -> Result<Order, DomainError> {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let row = sqlx::query(&format!(
            "UPDATE orders
             SET trade_no = ?, trade_status = ?, buyer_logon_id = ?, buyer_pay_amount = ?,
                 buyer_user_id = ?, invoice_amount = ?, point_amount = ?, receipt_amount = ?,
                 send_pay_date = ?, updated_at = ?
             WHERE out_trade_no = ?
             RETURNING {}",
            ORDER_COLUMNS
        ))
        .bind(&trade.trade_no)
        .bind(&trade.trade_status)
        .bind(&trade.buyer_logon_id)
        .bind(&trade.buyer_pay_amount)
        .bind(&trade.buyer_user_id)
        .bind(&trade.invoice_amount)
        .bind(&trade.point_amount)
        .bind(&trade.receipt_amount)
        .bind(&trade.send_pay_date)
        .bind(&now)
        .bind(out_trade_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update order trade details");
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| DomainError::OrderNotFound(out_trade_no.to_string()))?;

        decode(&row)
    }
}
