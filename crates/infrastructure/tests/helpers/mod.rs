use chrono::{NaiveDate, NaiveDateTime};
use livehub_application::ports::{CalendarRepository, VisitorLogRepository};
use livehub_domain::config::DatabaseConfig;
use livehub_domain::{CalendarSpan, Granularity, NewVisitorLog, VisitorLog};
use livehub_infrastructure::database::create_pool;
use livehub_infrastructure::repositories::{SqliteCalendarRepository, SqliteVisitorLogRepository};
use sqlx::SqlitePool;

pub async fn create_test_db() -> SqlitePool {
    let config = DatabaseConfig {
        path: ":memory:".to_string(),
        max_connections: 1,
        busy_timeout_secs: 5,
    };
    create_pool(&config).await.unwrap()
}

#[allow(dead_code)]
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[allow(dead_code)]
pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[allow(dead_code)]
pub async fn seed_calendar(pool: &SqlitePool, from: &str, to: &str) {
    let repo = SqliteCalendarRepository::new(pool.clone());
    let span = CalendarSpan::new(date(from), date(to)).unwrap();
    for granularity in Granularity::ALL {
        repo.insert_missing(granularity, span.bucket_keys(granularity).collect())
            .await
            .unwrap();
    }
}

#[allow(dead_code)]
pub async fn insert_visit(
    pool: &SqlitePool,
    ip: &str,
    user_id: Option<i64>,
    live_room_id: i64,
    duration: i64,
    created_at: &str,
) -> VisitorLog {
    SqliteVisitorLogRepository::new(pool.clone())
        .create(NewVisitorLog {
            ip: ip.to_string(),
            user_id,
            live_room_id,
            duration,
            created_at: Some(ts(created_at)),
        })
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn insert_user(pool: &SqlitePool, id: i64, username: &str, is_tourist: bool) {
    sqlx::query("INSERT INTO \"user\" (id, username, is_tourist) VALUES (?, ?, ?)")
        .bind(id)
        .bind(username)
        .bind(is_tourist)
        .execute(pool)
        .await
        .unwrap();
}
