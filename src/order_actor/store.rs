use async_trait::async_trait;

use crate::domain::{OrderCreate, OrderId, OrderItemView, OrderView};
use crate::error::StoreError;

/// Persistence port the order service depends on.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn find_order_by_order_id(&self, id: OrderId) -> Result<Option<OrderView>, StoreError>;

    /// Lines of the given order. Empty when the order does not exist.
    async fn find_order_items_by_order_id(
        &self,
        id: OrderId,
    ) -> Result<Vec<OrderItemView>, StoreError>;

    async fn save(&self, order: OrderCreate) -> Result<OrderId, StoreError>;
}
