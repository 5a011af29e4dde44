//! Order creation with simulated payment outcomes, and receipt lookup.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::{OrderId, OrderReceipt, OrderReceiptRequest, OrderResultType};
use crate::error::{BusinessError, ErrorKind};
use crate::order_actor::OrderStore;
use crate::random::RandomSource;

/// Upper bound, in time units, of the simulated payment delay. The lower
/// bound is one unit.
pub const MAX_DELAY_UNITS: u32 = 7;

/// Service behind the kiosk's order endpoints.
///
/// Cloning is cheap and every clone shares the same store, random source and
/// cancellation token, so each request can run on its own task.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    random: Arc<dyn RandomSource>,
    delay_unit: Duration,
    cancel: CancellationToken,
}

impl OrderService {
    pub fn new(
        store: Arc<dyn OrderStore>,
        random: Arc<dyn RandomSource>,
        delay_unit: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            store,
            random,
            delay_unit,
            cancel,
        }
    }

    /// Token that interrupts in-flight payment delays when cancelled.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    #[instrument(skip(self))]
    pub async fn get_receipt(&self, order_id: OrderId) -> Result<OrderReceipt, BusinessError> {
        debug!("Processing get_receipt request");

        let order = self
            .store
            .find_order_by_order_id(order_id)
            .await
            .inspect_err(|e| error!(error = %e, "Order lookup failed"))?
            .ok_or_else(|| {
                debug!("Order not found");
                BusinessError::from(ErrorKind::OrderNotFound)
            })?;

        let items = self
            .store
            .find_order_items_by_order_id(order_id)
            .await
            .inspect_err(|e| error!(error = %e, "Order item lookup failed"))?;

        info!(item_count = items.len(), "Receipt composed");
        Ok(OrderReceipt::from_parts(items, order))
    }

    /// Persists the order when `outcome` is a success, otherwise fails with
    /// the outcome's error and stores nothing.
    #[instrument(skip(self, request))]
    pub async fn create_order(
        &self,
        request: OrderReceiptRequest,
        outcome: OrderResultType,
    ) -> Result<OrderId, BusinessError> {
        if !outcome.is_success() {
            let kind = outcome.error_kind();
            warn!(status_code = kind.status_code(), "Payment failed");
            return Err(kind.into());
        }

        let order_id = self
            .store
            .save(request.into_order())
            .await
            .inspect_err(|e| error!(error = %e, "Order save failed"))?;

        info!(order_id, "Order created successfully");
        Ok(order_id)
    }

    /// Waits one to seven time units, then creates the order with a random
    /// outcome. An interrupted wait fails with `ResponseDelay`.
    #[instrument(skip(self, request))]
    pub async fn create_order_with_delay_and_random_succeed(
        &self,
        request: OrderReceiptRequest,
    ) -> Result<OrderId, BusinessError> {
        self.cause_payment_delay().await?;
        let outcome = OrderResultType::draw(self.random.as_ref());
        self.create_order(request, outcome).await
    }

    /// Random outcome without the delay.
    ///
    /// Not routed yet: kept as the fallback for clients that cannot cope with
    /// the delayed response.
    #[instrument(skip(self, request))]
    pub async fn create_order_with_non_delay_and_random_succeed(
        &self,
        request: OrderReceiptRequest,
    ) -> Result<OrderId, BusinessError> {
        let outcome = OrderResultType::draw(self.random.as_ref());
        self.create_order(request, outcome).await
    }

    #[instrument(skip(self, request))]
    pub async fn create_order_with_non_delay_and_always_succeed(
        &self,
        request: OrderReceiptRequest,
    ) -> Result<OrderId, BusinessError> {
        self.create_order(request, OrderResultType::Success).await
    }

    #[instrument(skip(self, request))]
    pub async fn create_order_with_non_delay_and_always_fail(
        &self,
        request: OrderReceiptRequest,
    ) -> Result<OrderId, BusinessError> {
        self.create_order(request, OrderResultType::NetworkError).await
    }

    /// Suspends the calling task for the simulated payment latency.
    async fn cause_payment_delay(&self) -> Result<(), BusinessError> {
        let units = self.random.roll(MAX_DELAY_UNITS);
        let delay = self.delay_unit * units;
        debug!(units, ?delay, "Simulating payment delay");

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                warn!("Payment delay interrupted");
                Err(OrderResultType::ResponseDelay.error_kind().into())
            }
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}
