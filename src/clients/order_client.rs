use async_trait::async_trait;
use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Order, OrderCreate, OrderId, OrderItemView, OrderView};
use crate::error::StoreError;
use crate::order_actor::OrderStore;

/// Client for the Order resource actor.
///
/// Serves the [`OrderStore`] port by projecting the stored entity into the
/// read views the service composes receipts from.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), StoreError> {
        debug!("Sending request");
        Ok(self.inner.shutdown().await?)
    }

    // Test-only method for internal state inspection
    #[cfg(test)]
    pub async fn order_count(&self) -> Result<usize, StoreError> {
        Ok(self.inner.count().await?)
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    #[instrument(skip(self))]
    async fn find_order_by_order_id(&self, id: OrderId) -> Result<Option<OrderView>, StoreError> {
        debug!("Sending request");
        let order = self.inner.get(id).await?;
        Ok(order.as_ref().map(OrderView::from))
    }

    #[instrument(skip(self))]
    async fn find_order_items_by_order_id(
        &self,
        id: OrderId,
    ) -> Result<Vec<OrderItemView>, StoreError> {
        debug!("Sending request");
        let order = self.inner.get(id).await?;
        Ok(order
            .map(|order| order.lines.iter().map(OrderItemView::from).collect())
            .unwrap_or_default())
    }

    #[instrument(skip(self, order), fields(lines = order.lines.len()))]
    async fn save(&self, order: OrderCreate) -> Result<OrderId, StoreError> {
        debug!("Sending request");
        let id = self.inner.create(order).await?;
        info!(order_id = id, "Order persisted");
        Ok(id)
    }
}
