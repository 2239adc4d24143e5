use async_trait::async_trait;
use livehub_domain::{DomainError, ListQuery, NewOrder, Order, OrderColumn, OrderFilter, TradeDetails};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn list(
        &self,
        query: &ListQuery<OrderColumn, OrderFilter>,
    ) -> Result<(Vec<Order>, u64), DomainError>;

    async fn get_by_out_trade_no(&self, out_trade_no: &str) -> Result<Option<Order>, DomainError>;

    async fn create(&self, order: NewOrder) -> Result<Order, DomainError>;

    async fn update_trade(
        &self,
        out_trade_no: &str,
        trade: &TradeDetails,
    ) -> Result<Order, DomainError>;
}
