use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};

use super::{KioskConfig, SystemError};
use crate::actor_framework::ResourceActor;
use crate::clients::OrderClient;
use crate::domain::Order;
use crate::order_service::OrderService;
use crate::random::{RandomSource, ThreadRandom};

/// The kiosk backend: the order store actor plus the service in front of it.
///
/// Responsible for starting the store, wiring the service, and shutting
/// both down.
pub struct KioskSystem {
    pub order_service: OrderService,
    order_client: OrderClient,
    cancel: CancellationToken,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl KioskSystem {
    /// Start the system with thread-local randomness.
    pub fn new(config: &KioskConfig) -> Self {
        Self::with_random(config, Arc::new(ThreadRandom))
    }

    #[instrument(name = "kiosk_system", skip_all)]
    pub fn with_random(config: &KioskConfig, random: Arc<dyn RandomSource>) -> Self {
        info!(
            store_buffer_size = config.store_buffer_size,
            delay_unit_ms = config.delay_unit_ms,
            "Starting kiosk system"
        );

        let order_id_counter = Arc::new(AtomicU64::new(1));
        let next_order_id = move || order_id_counter.fetch_add(1, Ordering::SeqCst);

        // A hand-built config may bypass load-time validation.
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.store_buffer_size.max(1), next_order_id);
        let order_client = OrderClient::new(order_resource_client);
        let handles = vec![tokio::spawn(order_actor.run())];

        let cancel = CancellationToken::new();
        let order_service = OrderService::new(
            Arc::new(order_client.clone()),
            random,
            config.delay_unit(),
            cancel.clone(),
        );

        info!("Kiosk system started successfully");

        Self {
            order_service,
            order_client,
            cancel,
            handles,
        }
    }

    /// Gracefully shutdown the system.
    ///
    /// In-flight delayed orders are interrupted first and resolve to a
    /// `ResponseDelay` failure; then the store actor is stopped and joined.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down kiosk system");

        self.cancel.cancel();
        if let Err(e) = self.order_client.shutdown().await {
            error!(error = %e, "Order store already stopped");
        }

        for handle in self.handles {
            handle.await?;
        }

        info!("Kiosk system shutdown complete");
        Ok(())
    }
}
