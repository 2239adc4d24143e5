use livehub_domain::{
    DomainError, ListQuery, Order, OrderColumn, OrderFilter, Page, SortDirection, SortOrder,
};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::OrderRepository;

pub struct GetOrdersUseCase {
    repo: Arc<dyn OrderRepository>,
}

impl GetOrdersUseCase {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        mut query: ListQuery<OrderColumn, OrderFilter>,
    ) -> Result<Page<Order>, DomainError> {
        if query.order.is_none() {
            query.order = Some(SortOrder::new(OrderColumn::Id, SortDirection::Asc));
        }

        let (rows, total) = self.repo.list(&query).await?;
        Ok(Page::new(rows, total, query.page))
    }
}
