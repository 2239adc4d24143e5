#![allow(dead_code)]

use async_trait::async_trait;
use livehub_application::ports::{
    CalendarRepository, LiveRoomRepository, OrderRepository, PaymentGateway, PrecreateRequest,
    PrecreateResponse, VisitorAnalyticsRepository, VisitorLogRepository,
    WalletRecordRepository,
};
use livehub_domain::{
    CalendarCoverage, DomainError, Granularity, IpVisitColumn, IpVisitRecord, ListQuery, LiveRoom, LiveRoomColumn,
    LiveRoomFilter, LiveRoomInput, NewOrder, NewVisitorLog, Order, OrderColumn, OrderFilter,
    PageRequest, ReportColumn, ReportRow, SortOrder, TimeRange, TradeDetails, UserVisitColumn,
    UserVisitRecord, VisitorLog, WalletRecord, WalletRecordColumn, WalletRecordFilter,
    WalletRecordInput,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

const NOW: &str = "2024-01-01 00:00:00";

fn paged<T: Clone>(rows: &[T], page: PageRequest) -> (Vec<T>, u64) {
    let total = rows.len() as u64;
    let rows = match page.limit_offset() {
        Some((limit, offset)) => rows
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect(),
        None => rows.to_vec(),
    };
    (rows, total)
}

// ── Visitor logs ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockVisitorLogRepository {
    logs: Arc<RwLock<Vec<VisitorLog>>>,
}

impl MockVisitorLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<VisitorLog> {
        self.logs.read().await.clone()
    }
}

#[async_trait]
impl VisitorLogRepository for MockVisitorLogRepository {
    async fn create(&self, log: NewVisitorLog) -> Result<VisitorLog, DomainError> {
        let mut logs = self.logs.write().await;
        let created = VisitorLog {
            id: logs.len() as i64 + 1,
            ip: log.ip,
            user_id: log.user_id,
            live_room_id: log.live_room_id,
            duration: log.duration,
            created_at: NOW.to_string(),
            deleted_at: None,
        };
        logs.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<VisitorLog>, DomainError> {
        Ok(self.logs.read().await.iter().find(|l| l.id == id).cloned())
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut logs = self.logs.write().await;
        match logs
            .iter_mut()
            .find(|l| l.id == id && l.deleted_at.is_none())
        {
            Some(log) => {
                log.deleted_at = Some(NOW.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── Analytics ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsCall {
    Report(Granularity, Option<SortOrder<ReportColumn>>),
    User(i64),
    Ip(String),
}

/// Returns canned rows and records what it was asked for.
#[derive(Clone, Default)]
pub struct MockVisitorAnalyticsRepository {
    pub rows: Arc<RwLock<Vec<ReportRow>>>,
    pub calls: Arc<RwLock<Vec<AnalyticsCall>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockVisitorAnalyticsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_rows(&self, rows: Vec<ReportRow>) {
        *self.rows.write().await = rows;
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn calls(&self) -> Vec<AnalyticsCall> {
        self.calls.read().await.clone()
    }

    async fn check(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl VisitorAnalyticsRepository for MockVisitorAnalyticsRepository {
    async fn report(
        &self,
        granularity: Granularity,
        _range: TimeRange,
        order: Option<SortOrder<ReportColumn>>,
    ) -> Result<Vec<ReportRow>, DomainError> {
        self.check().await?;
        self.calls
            .write()
            .await
            .push(AnalyticsCall::Report(granularity, order));
        Ok(self.rows.read().await.clone())
    }

    async fn user_visit_record(
        &self,
        user_id: i64,
        _range: TimeRange,
        _order: Option<SortOrder<UserVisitColumn>>,
    ) -> Result<Vec<UserVisitRecord>, DomainError> {
        self.check().await?;
        self.calls.write().await.push(AnalyticsCall::User(user_id));
        Ok(Vec::new())
    }

    async fn ip_visit_record(
        &self,
        ip: &str,
        _range: TimeRange,
        _order: Option<SortOrder<IpVisitColumn>>,
    ) -> Result<Vec<IpVisitRecord>, DomainError> {
        self.check().await?;
        self.calls
            .write()
            .await
            .push(AnalyticsCall::Ip(ip.to_string()));
        Ok(Vec::new())
    }
}

// ── Calendar ─────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockCalendarRepository {
    tables: Arc<RwLock<HashMap<Granularity, BTreeSet<String>>>>,
    batches: Arc<RwLock<HashMap<Granularity, Vec<String>>>>,
}

impl MockCalendarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn keys(&self, granularity: Granularity) -> Vec<String> {
        self.tables
            .read()
            .await
            .get(&granularity)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Keys handed to the most recent insert for `granularity`.
    pub async fn last_batch(&self, granularity: Granularity) -> Vec<String> {
        self.batches
            .read()
            .await
            .get(&granularity)
            .cloned()
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
        self.batches.write().await.insert(granularity, keys.clone());
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

// ── Live rooms ───────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockLiveRoomRepository {
    rooms: Arc<RwLock<Vec<LiveRoom>>>,
    pub last_list_query: Arc<RwLock<Option<ListQuery<LiveRoomColumn, LiveRoomFilter>>>>,
}

impl MockLiveRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_room(name: &str) -> Self {
        let repo = Self::new();
        repo.create(
            LiveRoomInput {
                name: Some(name.to_string()),
                ..Default::default()
            },
            "k".repeat(32),
        )
        .await
        .unwrap();
        repo
    }

    pub async fn count(&self) -> usize {
        self.rooms.read().await.len()
    }
}

#[async_trait]
impl LiveRoomRepository for MockLiveRoomRepository {
    async fn list(
        &self,
        query: &ListQuery<LiveRoomColumn, LiveRoomFilter>,
    ) -> Result<(Vec<LiveRoom>, u64), DomainError> {
        *self.last_list_query.write().await = Some(query.clone());
        let rooms: Vec<LiveRoom> = self
            .rooms
            .read()
            .await
            .iter()
            .filter(|r| query.filter.status.is_none_or(|s| r.status == s))
            .cloned()
            .collect();
        Ok(paged(rooms.as_slice(), query.page))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<LiveRoom>, DomainError> {
        Ok(self.rooms.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, input: LiveRoomInput, key: String) -> Result<LiveRoom, DomainError> {
        let mut rooms = self.rooms.write().await;
        let room = LiveRoom {
            id: rooms.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            name: input.name,
            desc: input.desc,
            remark: input.remark,
            status: input.status.unwrap_or(0),
            is_show: input.is_show.unwrap_or(true),
            is_fake: input.is_fake.unwrap_or(false),
            cover_img: input.cover_img,
            bg_img: input.bg_img,
            key: Some(key),
            room_type: input.room_type.unwrap_or(1),
            cdn: input.cdn.unwrap_or(false),
            pull_is_should_auth: input.pull_is_should_auth.unwrap_or(false),
            weight: input.weight.unwrap_or(0),
            pull: input.pull,
            push: input.push,
            cdn_pull: input.cdn_pull,
            cdn_push: input.cdn_push,
            forward: input.forward,
            created_at: NOW.to_string(),
            updated_at: NOW.to_string(),
        };
        rooms.push(room.clone());
        Ok(room)
    }

    async fn update(&self, id: i64, input: LiveRoomInput) -> Result<LiveRoom, DomainError> {
        let mut rooms = self.rooms.write().await;
        let room = rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::LiveRoomNotFound(id))?;
        if let Some(name) = input.name {
            room.name = Some(name);
        }
        if let Some(status) = input.status {
            room.status = status;
        }
        if let Some(weight) = input.weight {
            room.weight = weight;
        }
        Ok(room.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.rooms.write().await.retain(|r| r.id != id);
        Ok(())
    }
}

// ── Wallet records ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockWalletRecordRepository {
    records: Arc<RwLock<Vec<WalletRecord>>>,
}

impl MockWalletRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WalletRecordRepository for MockWalletRecordRepository {
    async fn list(
        &self,
        query: &ListQuery<WalletRecordColumn, WalletRecordFilter>,
    ) -> Result<(Vec<WalletRecord>, u64), DomainError> {
        let records: Vec<WalletRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| query.filter.user_id.is_none_or(|u| r.user_id == u))
            .cloned()
            .collect();
        Ok(paged(records.as_slice(), query.page))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<WalletRecord>, DomainError> {
        Ok(self.records.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, input: WalletRecordInput) -> Result<WalletRecord, DomainError> {
        let mut records = self.records.write().await;
        let record = WalletRecord {
            id: records.len() as i64 + 1,
            user_id: input.user_id.unwrap_or_default(),
            order_id: input.order_id,
            record_type: input.record_type.unwrap_or(0),
            name: input.name,
            amount: input.amount.unwrap_or_default(),
            remark: input.remark,
            created_at: NOW.to_string(),
            updated_at: NOW.to_string(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: i64,
        input: WalletRecordInput,
    ) -> Result<WalletRecord, DomainError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::WalletRecordNotFound(id))?;
        if let Some(amount) = input.amount {
            record.amount = amount;
        }
        if let Some(remark) = input.remark {
            record.remark = Some(remark);
        }
        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.records.write().await.retain(|r| r.id != id);
        Ok(())
    }
}

// ── Orders ───────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn list(
        &self,
        query: &ListQuery<OrderColumn, OrderFilter>,
    ) -> Result<(Vec<Order>, u64), DomainError> {
        let orders = self.orders.read().await;
        Ok(paged(orders.as_slice(), query.page))
    }

    async fn get_by_out_trade_no(&self, out_trade_no: &str) -> Result<Option<Order>, DomainError> {
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .find(|o| o.out_trade_no == out_trade_no)
            .cloned())
    }

    async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;
        let created = Order {
            id: orders.len() as i64 + 1,
            user_id: order.user_id,
            out_trade_no: order.out_trade_no,
            total_amount: order.total_amount,
            subject: order.subject,
            body: order.body,
            product_code: order.product_code,
            qr_code: order.qr_code,
            trade: TradeDetails::default(),
            created_at: NOW.to_string(),
            updated_at: NOW.to_string(),
        };
        orders.push(created.clone());
        Ok(created)
    }

    async fn update_trade(
        &self,
        out_trade_no: &str,
        trade: &TradeDetails,
    ) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|o| o.out_trade_no == out_trade_no)
            .ok_or_else(|| DomainError::OrderNotFound(out_trade_no.to_string()))?;
        order.trade = trade.clone();
        Ok(order.clone())
    }
}

// ── Payment gateway ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockPaymentGateway {
    pub precreated: Arc<RwLock<Vec<PrecreateRequest>>>,
    trade_status: Arc<RwLock<Option<String>>>,
    reject_queries: Arc<RwLock<bool>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_trade_status(&self, status: &str) {
        *self.trade_status.write().await = Some(status.to_string());
    }

    pub async fn set_reject_queries(&self, reject: bool) {
        *self.reject_queries.write().await = reject;
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn precreate(
        &self,
        request: &PrecreateRequest,
    ) -> Result<PrecreateResponse, DomainError> {
        self.precreated.write().await.push(request.clone());
        Ok(PrecreateResponse {
            qr_code: format!("https://qr.example/{}", request.out_trade_no),
        })
    }

    async fn query_trade(&self, _out_trade_no: &str) -> Result<TradeDetails, DomainError> {
        if *self.reject_queries.read().await {
            return Err(DomainError::PaymentGateway("trade not exist".to_string()));
        }
        Ok(TradeDetails {
            trade_no: Some("2024010122001".to_string()),
            trade_status: self.trade_status.read().await.clone(),
            buyer_logon_id: Some("buy***@example.com".to_string()),
            ..Default::default()
        })
    }
}
