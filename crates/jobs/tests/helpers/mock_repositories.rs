#![allow(dead_code)]

use async_trait::async_trait;
use livehub_application::ports::CalendarRepository;
use livehub_domain::{CalendarCoverage, DomainError, Granularity};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockCalendarRepository {
    tables: Arc<RwLock<HashMap<Granularity, BTreeSet<String>>>>,
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl MockCalendarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn insert_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn keys(&self, granularity: Granularity) -> Vec<String> {
        self.tables
            .read()
            .await
            .get(&granularity)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CalendarRepository for MockCalendarRepository {
    async fn insert_missing(
        &self,
        granularity: Granularity,
        keys: Vec<String>,
    ) -> Result<u64, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }
        let mut tables = self.tables.write().await;
        let table = tables.entry(granularity).or_default();
        Ok(keys.into_iter().filter(|k| table.insert(k.clone())).count() as u64)
    }

    async fn count(&self, granularity: Granularity) -> Result<u64, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .get(&granularity)
            .map_or(0, |set| set.len() as u64))
    }

    async fn coverage(
        &self,
        granularity: Granularity,
    ) -> Result<Option<CalendarCoverage>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.get(&granularity).and_then(|set| {
            Some(CalendarCoverage {
                first: set.first()?.clone(),
                last: set.last()?.clone(),
                count: set.len() as u64,
            })
        }))
    }
}
