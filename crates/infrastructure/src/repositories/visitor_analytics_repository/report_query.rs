//! SQL for the bucketed visitor reports.
//!
//! Every report is the same shape: visitor logs filtered to the range and
//! keyed by their truncated `created_at`, right-joined onto a calendar table
//! so that empty buckets still produce a row, then grouped by bucket.
//!
//! SQLite refuses a custom separator on `GROUP_CONCAT(DISTINCT ..)`, so the
//! distinct lists are joined with `,` and rewritten to `", "`. This is only
//! sound for values without commas: canonical ips and integers.

use crate::repositories::sql::{BindValue, BuiltQuery};
use livehub_domain::{
    AllowedColumn, Granularity, IpVisitColumn, ReportColumn, SortOrder, TimeRange,
    UserVisitColumn,
};

pub(crate) fn calendar_table(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Day => "calendar_day",
        Granularity::Hour => "calendar_hour",
        Granularity::TenMinutes => "calendar_ten_minute",
    }
}

/// Truncates `created_at` to the key of its bucket.
pub(crate) fn bucket_expr(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Day => "strftime('%Y-%m-%d 00:00:00', created_at)",
        Granularity::Hour => "strftime('%Y-%m-%d %H:00:00', created_at)",
        Granularity::TenMinutes => {
            "strftime('%Y-%m-%d %H:', created_at) || \
            printf('%02d', (CAST(strftime('%M', created_at) AS INTEGER) / 10) * 10) || \
            ':00'"
        }
    }
}

fn distinct_list(expr: &str) -> String {
    format!("COALESCE(REPLACE(GROUP_CONCAT(DISTINCT {}), ',', ', '), '')", expr)
}

fn list(expr: &str) -> String {
    format!("COALESCE(GROUP_CONCAT({}, ', '), '')", expr)
}

/// Builder for one bucketed report. Bind values are kept per section so the
/// final list follows placeholder order regardless of call order.
pub struct ReportQueryBuilder {
    granularity: Granularity,
    select: Vec<String>,
    select_binds: Vec<BindValue>,
    visit_columns: &'static str,
    visit_filters: Vec<String>,
    visit_binds: Vec<BindValue>,
    joins: Vec<String>,
    join_binds: Vec<BindValue>,
    range: TimeRange,
    order_by: Option<String>,
}

impl ReportQueryBuilder {
    pub fn new(granularity: Granularity, range: TimeRange, visit_columns: &'static str) -> Self {
        Self {
            granularity,
            select: vec!["b.bucket_key AS format_date".to_string()],
            select_binds: Vec::new(),
            visit_columns,
            visit_filters: Vec::new(),
            visit_binds: Vec::new(),
            joins: Vec::new(),
            join_binds: Vec::new(),
            range,
            order_by: None,
        }
    }

    pub fn select_as(mut self, expr: impl Into<String>, alias: &str) -> Self {
        self.select.push(format!("{} AS {}", expr.into(), alias));
        self
    }

    /// Selected expression containing exactly one `?`.
    pub fn select_bound(mut self, expr: &str, alias: &str, value: BindValue) -> Self {
        self.select.push(format!("{} AS {}", expr, alias));
        self.select_binds.push(value);
        self
    }

    /// Extra condition on the visitor log rows, e.g. `user_id = ?`.
    pub fn filter_visits(mut self, clause: &str, value: BindValue) -> Self {
        self.visit_filters.push(clause.to_string());
        self.visit_binds.push(value);
        self
    }

    pub fn join(mut self, clause: impl Into<String>, binds: Vec<BindValue>) -> Self {
        self.joins.push(clause.into());
        self.join_binds.extend(binds);
        self
    }

    pub fn order_by<C: AllowedColumn>(mut self, order: Option<SortOrder<C>>) -> Self {
        self.order_by = order.map(|o| o.to_sql());
        self
    }

    pub fn build(self) -> BuiltQuery {
        let visit_filters: String = self
            .visit_filters
            .iter()
            .map(|f| format!(" AND {}", f))
            .collect();

        let mut sql = format!(
            "SELECT {select} \
             FROM (SELECT {columns}, {bucket} AS bucket_key \
                   FROM visitor_log \
                   WHERE deleted_at IS NULL{visit_filters} \
                     AND created_at >= ? AND created_at <= ?) AS v \
             RIGHT JOIN {table} AS b ON b.bucket_key = v.bucket_key",
            select = self.select.join(", "),
            columns = self.visit_columns,
            bucket = bucket_expr(self.granularity),
            table = calendar_table(self.granularity),
        );
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        sql.push_str(" WHERE b.bucket_key >= ? AND b.bucket_key <= ? GROUP BY b.bucket_key");
        if let Some(order) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        let start = BindValue::Text(self.range.start_key());
        let end = BindValue::Text(self.range.end_key());

        let mut binds = self.select_binds;
        binds.extend(self.visit_binds);
        binds.push(start.clone());
        binds.push(end.clone());
        binds.extend(self.join_binds);
        binds.push(start);
        binds.push(end);

        BuiltQuery { sql, binds }
    }
}

fn build_report(
    granularity: Granularity,
    range: TimeRange,
    order: Option<SortOrder<ReportColumn>>,
) -> BuiltQuery {
    ReportQueryBuilder::new(granularity, range, "id, ip, user_id, duration")
        .select_as("COALESCE(SUM(v.duration), 0)", "sum_duration")
        .select_as(distinct_list("v.ip"), "unique_ip_str")
        .select_as(distinct_list("v.user_id"), "unique_user_id_str")
        .select_as(list("v.ip"), "ip_str")
        // Guests contribute an empty entry so the per-visit lists stay aligned.
        .select_as(
            list("CASE WHEN v.id IS NULL THEN NULL ELSE COALESCE(v.user_id, '') END"),
            "user_id_str",
        )
        .select_as(list("v.duration"), "duration_str")
        .order_by(order)
        .build()
}

pub fn build_by_day(range: TimeRange, order: Option<SortOrder<ReportColumn>>) -> BuiltQuery {
    build_report(Granularity::Day, range, order)
}

pub fn build_by_hour(range: TimeRange, order: Option<SortOrder<ReportColumn>>) -> BuiltQuery {
    build_report(Granularity::Hour, range, order)
}

pub fn build_by_ten_minutes(
    range: TimeRange,
    order: Option<SortOrder<ReportColumn>>,
) -> BuiltQuery {
    build_report(Granularity::TenMinutes, range, order)
}

pub fn build_for(
    granularity: Granularity,
    range: TimeRange,
    order: Option<SortOrder<ReportColumn>>,
) -> BuiltQuery {
    match granularity {
        Granularity::Day => build_by_day(range, order),
        Granularity::Hour => build_by_hour(range, order),
        Granularity::TenMinutes => build_by_ten_minutes(range, order),
    }
}

/// Day buckets of one user's visits, with the user's profile, roles and
/// parent accounts attached to every row.
///
/// Roles and parents come from single-row aggregate subqueries so they never
/// multiply the visit rows they are joined to.
pub fn build_user_visit_record(
    user_id: i64,
    range: TimeRange,
    order: Option<SortOrder<UserVisitColumn>>,
) -> BuiltQuery {
    ReportQueryBuilder::new(Granularity::Day, range, "user_id, live_room_id, duration")
        .select_as("u.username", "username")
        .select_as("u.is_tourist", "is_tourist")
        .select_as("COUNT(v.user_id)", "user_id_nums")
        .select_bound("COALESCE(u.id, ?)", "user_id", BindValue::Int(user_id))
        .select_as("COALESCE(r.role_ids, '')", "user_role_id")
        .select_as("COALESCE(r.role_names, '')", "user_role_name")
        .select_as("COALESCE(p.parent_ids, '')", "parent_user_id")
        .select_as("COALESCE(p.parent_usernames, '')", "parent_user_username")
        .select_as("COALESCE(SUM(v.duration), 0)", "sum_duration")
        .select_as(distinct_list("v.live_room_id"), "live_room_id_str")
        .select_as(list("v.duration"), "duration_str")
        .filter_visits("user_id = ?", BindValue::Int(user_id))
        .join(
            "LEFT JOIN \"user\" AS u ON u.id = ?",
            vec![BindValue::Int(user_id)],
        )
        .join(
            "LEFT JOIN (SELECT GROUP_CONCAT(role_id, ', ') AS role_ids, \
                               GROUP_CONCAT(role_name, ', ') AS role_names \
                        FROM (SELECT DISTINCT ur.role_id, ro.role_name \
                              FROM user_role AS ur \
                              JOIN role AS ro ON ro.id = ur.role_id \
                              WHERE ur.user_id = ? \
                              ORDER BY ur.role_id)) AS r ON 1 = 1",
            vec![BindValue::Int(user_id)],
        )
        .join(
            "LEFT JOIN (SELECT GROUP_CONCAT(parent_id, ', ') AS parent_ids, \
                               GROUP_CONCAT(username, ', ') AS parent_usernames \
                        FROM (SELECT DISTINCT uc.user_id AS parent_id, pu.username \
                              FROM user_child AS uc \
                              JOIN \"user\" AS pu ON pu.id = uc.user_id \
                              WHERE uc.child_user_id = ? \
                              ORDER BY uc.user_id)) AS p ON 1 = 1",
            vec![BindValue::Int(user_id)],
        )
        .order_by(order)
        .build()
}

/// Day buckets of the visits made from one ip.
pub fn build_ip_visit_record(
    ip: &str,
    range: TimeRange,
    order: Option<SortOrder<IpVisitColumn>>,
) -> BuiltQuery {
    ReportQueryBuilder::new(Granularity::Day, range, "ip, live_room_id, duration")
        .select_bound("COALESCE(v.ip, ?)", "ip", BindValue::from(ip))
        .select_as("COUNT(v.ip)", "ip_nums")
        .select_as("COALESCE(SUM(v.duration), 0)", "sum_duration")
        .select_as(distinct_list("v.live_room_id"), "live_room_id_str")
        .select_as(list("v.duration"), "duration_str")
        .filter_visits("ip = ?", BindValue::from(ip))
        .order_by(order)
        .build()
}
