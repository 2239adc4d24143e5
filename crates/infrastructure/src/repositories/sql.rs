//! Dynamic SQL plumbing shared by the repositories: positional bind values
//! collected alongside the SQL text, and the list-endpoint WHERE builder.

use livehub_domain::{AllowedColumn, ListQuery, TimeFilter, TIMESTAMP_FORMAT};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::{Row, SqlitePool};

/// A value bound to one `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        BindValue::Int(value)
    }
}

impl From<bool> for BindValue {
    fn from(value: bool) -> Self {
        BindValue::Int(value as i64)
    }
}

/// SQL text plus its bind values, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

impl BuiltQuery {
    pub(crate) fn query(&self) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        bind_all(sqlx::query(&self.sql), &self.binds)
    }

    /// Runs a `SELECT COUNT(*) ...` query.
    pub(crate) async fn fetch_count(&self, pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let row = self.query().fetch_one(pool).await?;
        Ok(row.try_get::<i64, _>(0)? as u64)
    }
}

pub(crate) fn bind_all<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    binds: &'q [BindValue],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for value in binds {
        query = match value {
            BindValue::Text(s) => query.bind(s.as_str()),
            BindValue::Int(i) => query.bind(*i),
        };
    }
    query
}

/// `WHERE` clause of a paged list endpoint.
#[derive(Debug, Default)]
pub(crate) struct ListWhere {
    clauses: Vec<String>,
    binds: Vec<BindValue>,
}

impl ListWhere {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<column> = ?` when the filter value is present.
    pub fn eq(&mut self, column: &'static str, value: Option<impl Into<BindValue>>) -> &mut Self {
        if let Some(value) = value {
            self.clauses.push(format!("{} = ?", column));
            self.binds.push(value.into());
        }
        self
    }

    /// `(<a> LIKE ? OR <b> LIKE ?)` over the given columns.
    pub fn keyword(&mut self, columns: &[&'static str], keyword: Option<&str>) -> &mut Self {
        let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) else {
            return self;
        };
        let pattern = format!("%{}%", keyword);
        let ors: Vec<String> = columns.iter().map(|c| format!("{} LIKE ?", c)).collect();
        self.clauses.push(format!("({})", ors.join(" OR ")));
        for _ in columns {
            self.binds.push(BindValue::Text(pattern.clone()));
        }
        self
    }

    /// Exclusive window on an allow-listed timestamp column.
    pub fn time_window(&mut self, filter: Option<&TimeFilter>) -> &mut Self {
        if let Some(filter) = filter {
            let column = filter.column.column_name();
            self.clauses
                .push(format!("{} > ? AND {} < ?", column, column));
            self.binds.push(BindValue::Text(
                filter.start.format(TIMESTAMP_FORMAT).to_string(),
            ));
            self.binds
                .push(BindValue::Text(filter.end.format(TIMESTAMP_FORMAT).to_string()));
        }
        self
    }

    /// Renders `SELECT {columns} FROM {table} WHERE ... ORDER BY ... LIMIT ...`
    /// and the matching `COUNT(*)` query.
    pub fn build<C: AllowedColumn, F>(
        &self,
        columns: &str,
        table: &str,
        query: &ListQuery<C, F>,
    ) -> (BuiltQuery, BuiltQuery) {
        let where_sql = if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        };

        let count = BuiltQuery {
            sql: format!("SELECT COUNT(*) FROM {}{}", table, where_sql),
            binds: self.binds.clone(),
        };

        let mut sql = format!("SELECT {} FROM {}{}", columns, table, where_sql);
        let mut binds = self.binds.clone();
        if let Some(order) = &query.order {
            sql.push_str(" ORDER BY ");
            sql.push_str(&order.to_sql());
        }
        if let Some((limit, offset)) = query.page.limit_offset() {
            sql.push_str(" LIMIT ? OFFSET ?");
            binds.push(BindValue::Int(limit as i64));
            binds.push(BindValue::Int(offset as i64));
        }

        (count, BuiltQuery { sql, binds })
    }
}
