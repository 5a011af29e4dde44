use tokio::task::JoinSet;
use tracing::{error, info, warn, Instrument};

use kiosk_orders::{
    setup_tracing, KioskConfig, KioskSystem, OrderLineRequest, OrderReceiptRequest,
    PaymentMethod, SystemError,
};

/// Orders placed concurrently by the demo.
const DEMO_ORDERS: usize = 5;

fn demo_request(seat: usize) -> OrderReceiptRequest {
    let quantity = u32::try_from(seat % 3 + 1).unwrap_or(1);
    let unit_price = 4_500;
    let total_price = unit_price * u64::from(quantity);

    OrderReceiptRequest {
        payment: if seat % 2 == 0 { PaymentMethod::Card } else { PaymentMethod::Cash },
        total_price,
        received_price: if seat % 2 == 0 { total_price } else { total_price + 500 },
        items: vec![OrderLineRequest {
            menu_id: 1,
            name: "Americano".to_string(),
            quantity,
            unit_price,
            options: vec!["ICE".to_string()],
        }],
    }
}

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = KioskConfig::load()?;
    setup_tracing(&config.log_filter);

    info!("Starting kiosk with simulated payments");

    let system = KioskSystem::new(&config);

    // Every order runs on its own task so payment delays overlap.
    let mut orders = JoinSet::new();
    for seat in 0..DEMO_ORDERS {
        let service = system.order_service.clone();
        let span = tracing::info_span!("kiosk_order", seat);
        orders.spawn(
            async move {
                service
                    .create_order_with_delay_and_random_succeed(demo_request(seat))
                    .await
            }
            .instrument(span),
        );
    }

    let mut created = Vec::new();
    while let Some(joined) = orders.join_next().await {
        match joined? {
            Ok(order_id) => created.push(order_id),
            Err(e) => warn!(status_code = e.status_code(), message = e.message(), "Order rejected"),
        }
    }

    for order_id in created {
        match system.order_service.get_receipt(order_id).await {
            Ok(receipt) => {
                let json = serde_json::to_string(&receipt)?;
                info!(receipt = %json, "Receipt");
            }
            Err(e) => error!(order_id, error = %e, "Receipt lookup failed"),
        }
    }

    if let Err(e) = system
        .order_service
        .create_order_with_non_delay_and_always_fail(demo_request(0))
        .await
    {
        let body = serde_json::to_string(&e.body())?;
        info!(body = %body, "Forced failure rendered");
    }

    system.shutdown().await?;

    info!("Kiosk demo completed");
    Ok(())
}
