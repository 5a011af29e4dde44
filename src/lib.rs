//! # Kiosk Orders
//!
//! Ordering backend for a self-service kiosk: an error catalog, an order
//! service that simulates payment outcomes, and an actor-backed order store.
//!
//! ## Layout
//!
//! - **Error catalog** - symbolic error kinds with status codes and messages → [`ErrorKind`], [`BusinessError`]
//! - **Domain** - requests, the stored order, receipt views and payment outcomes → [`OrderReceiptRequest`], [`OrderReceipt`], [`OrderResultType`]
//! - **Store** - a generic resource actor behind the [`OrderStore`] port → [`ResourceActor`], [`OrderClient`]
//! - **Service** - receipt lookup and the order creation variants → [`OrderService`]
//! - **System** - startup, configuration, tracing and shutdown → [`KioskSystem`], [`KioskConfig`], [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! # use kiosk_orders::{KioskConfig, KioskSystem, OrderReceiptRequest, PaymentMethod};
//! # async fn run() -> Result<(), kiosk_orders::SystemError> {
//! let system = KioskSystem::new(&KioskConfig::default());
//!
//! let request = OrderReceiptRequest {
//!     payment: PaymentMethod::Card,
//!     total_price: 4_500,
//!     received_price: 4_500,
//!     items: Vec::new(),
//! };
//! match system.order_service.create_order_with_delay_and_random_succeed(request).await {
//!     Ok(order_id) => println!("created order {order_id}"),
//!     Err(e) => println!("{} {}", e.status_code(), e.message()),
//! }
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod order_actor;
pub mod order_service;
pub mod random;

#[cfg(test)]
mod mock_framework;

pub use actor_framework::{Entity, FrameworkError, ResourceActor, ResourceClient};
pub use app_system::{setup_tracing, KioskConfig, KioskSystem, SystemError};
pub use clients::OrderClient;
pub use domain::*;
pub use error::{BusinessError, ErrorBody, ErrorDetail, ErrorKind, StoreError};
pub use order_actor::OrderStore;
pub use order_service::OrderService;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
