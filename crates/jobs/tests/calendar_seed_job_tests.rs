use chrono::{NaiveDate, Utc};
use livehub_application::use_cases::SeedCalendarUseCase;
use livehub_domain::Granularity;
use livehub_jobs::CalendarSeedJob;
use std::sync::Arc;
use tokio::time::{sleep, timeout, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockCalendarRepository;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_job(repo: Arc<MockCalendarRepository>, start: NaiveDate, days_ahead: u32) -> CalendarSeedJob {
    let seed = Arc::new(SeedCalendarUseCase::new(repo));
    CalendarSeedJob::new(seed, start, days_ahead)
}

#[test]
fn test_horizon_extends_past_today() {
    let job = make_job(Arc::new(MockCalendarRepository::new()), date(2024, 1, 1), 31);

    assert_eq!(
        job.horizon(date(2024, 3, 10)),
        (date(2024, 1, 1), date(2024, 4, 10))
    );
}

#[test]
fn test_horizon_with_future_start_is_clamped() {
    let job = make_job(Arc::new(MockCalendarRepository::new()), date(2030, 1, 1), 2);

    assert_eq!(
        job.horizon(date(2024, 1, 1)),
        (date(2024, 1, 3), date(2024, 1, 3))
    );
}

#[tokio::test]
async fn test_run_once_seeds_span() {
    let repo = Arc::new(MockCalendarRepository::new());
    let job = make_job(repo.clone(), date(2024, 1, 1), 1);

    let report = job.run_once(date(2024, 1, 2)).await.unwrap();

    assert_eq!(report.days, 3);
    assert_eq!(report.hours, 72);
    assert_eq!(report.ten_minutes, 432);
    assert_eq!(
        repo.keys(Granularity::Day).await.last().map(String::as_str),
        Some("2024-01-03 00:00:00")
    );

    let again = job.run_once(date(2024, 1, 2)).await.unwrap();
    assert_eq!(again.total(), 0);
}

#[tokio::test]
async fn test_start_seeds_on_startup_and_stops_on_cancel() {
    let repo = Arc::new(MockCalendarRepository::new());
    let token = CancellationToken::new();
    let job = Arc::new(
        make_job(repo.clone(), Utc::now().date_naive(), 0)
            .with_interval(3600)
            .with_cancellation(token.clone()),
    );

    let handle = tokio::spawn(job.start());
    sleep(Duration::from_millis(200)).await;

    assert!(repo.insert_calls() >= 3);
    assert!(!repo.keys(Granularity::Day).await.is_empty());

    token.cancel();
    timeout(Duration::from_secs(1), handle)
        .await
        .expect("job did not stop")
        .unwrap();
}

#[tokio::test]
async fn test_start_without_startup_run_waits_for_interval() {
    let repo = Arc::new(MockCalendarRepository::new());
    let token = CancellationToken::new();
    let job = Arc::new(
        make_job(repo.clone(), Utc::now().date_naive(), 0)
            .with_interval(3600)
            .with_run_on_startup(false)
            .with_cancellation(token.clone()),
    );

    let handle = tokio::spawn(job.start());
    sleep(Duration::from_millis(50)).await;

    assert_eq!(repo.insert_calls(), 0);

    token.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_cycle_keeps_job_alive() {
    let repo = Arc::new(MockCalendarRepository::failing());
    let token = CancellationToken::new();
    let job = Arc::new(
        make_job(repo.clone(), Utc::now().date_naive(), 0)
            .with_interval(3600)
            .with_cancellation(token.clone()),
    );

    let handle = tokio::spawn(job.start());
    sleep(Duration::from_millis(50)).await;

    assert_eq!(repo.insert_calls(), 1);
    assert!(!handle.is_finished());

    token.cancel();
    handle.await.unwrap();
}
