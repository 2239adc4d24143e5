use chrono::NaiveDate;
use livehub_application::use_cases::SeedCalendarUseCase;
use livehub_domain::{DomainError, Granularity};
use std::sync::Arc;

mod helpers;
use helpers::MockCalendarRepository;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[tokio::test]
async fn test_seed_fills_every_table() {
    let repo = Arc::new(MockCalendarRepository::new());
    let use_case = SeedCalendarUseCase::new(repo.clone());

    let report = use_case.execute(date(1), date(2)).await.unwrap();

    assert_eq!(report.days, 2);
    assert_eq!(report.hours, 48);
    assert_eq!(report.ten_minutes, 288);
    assert_eq!(
        repo.keys(Granularity::Day).await,
        vec!["2024-01-01 00:00:00", "2024-01-02 00:00:00"]
    );
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let repo = Arc::new(MockCalendarRepository::new());
    let use_case = SeedCalendarUseCase::new(repo.clone());

    use_case.execute(date(1), date(2)).await.unwrap();
    let second = use_case.execute(date(2), date(3)).await.unwrap();

    assert_eq!(second.days, 1);
    assert_eq!(second.hours, 24);
    assert_eq!(second.total(), 1 + 24 + 144);
}

#[tokio::test]
async fn test_seed_rejects_reversed_span() {
    let repo = Arc::new(MockCalendarRepository::new());
    let result = SeedCalendarUseCase::new(repo)
        .execute(date(3), date(1))
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_reseed_only_sends_keys_from_last_seeded_day() {
    let repo = Arc::new(MockCalendarRepository::new());
    let use_case = SeedCalendarUseCase::new(repo.clone());

    use_case.execute(date(1), date(2)).await.unwrap();
    let report = use_case.execute(date(1), date(3)).await.unwrap();

    assert_eq!(report.days, 1);
    assert_eq!(
        repo.last_batch(Granularity::Day).await,
        vec!["2024-01-02 00:00:00", "2024-01-03 00:00:00"]
    );
    assert_eq!(repo.last_batch(Granularity::Hour).await.len(), 48);
    assert_eq!(repo.keys(Granularity::Day).await.len(), 3);
}

#[tokio::test]
async fn test_reseed_of_covered_span_sends_nothing() {
    let repo = Arc::new(MockCalendarRepository::new());
    let use_case = SeedCalendarUseCase::new(repo.clone());

    use_case.execute(date(1), date(5)).await.unwrap();
    let report = use_case.execute(date(2), date(3)).await.unwrap();

    assert_eq!(report.total(), 0);
    assert_eq!(repo.last_batch(Granularity::Day).await.len(), 5);
}

#[tokio::test]
async fn test_earlier_span_fills_gap_before_existing_keys() {
    let repo = Arc::new(MockCalendarRepository::new());
    let use_case = SeedCalendarUseCase::new(repo.clone());

    use_case.execute(date(10), date(11)).await.unwrap();
    use_case.execute(date(1), date(2)).await.unwrap();
    let report = use_case.execute(date(1), date(11)).await.unwrap();

    assert_eq!(report.days, 7);
    assert_eq!(repo.keys(Granularity::Day).await.len(), 11);
}
