use serde::{Deserialize, Serialize};

use super::order::{Order, OrderId, OrderLine, PaymentMethod};

/// Order header as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    pub order_id: OrderId,
    pub payment: PaymentMethod,
    pub total_price: u64,
    pub received_price: u64,
    pub change: u64,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            payment: order.payment,
            total_price: order.total_price,
            received_price: order.received_price,
            change: order.change(),
        }
    }
}

/// A single receipt line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemView {
    pub menu_id: u64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub options: Vec<String>,
    pub line_total: u64,
}

impl From<&OrderLine> for OrderItemView {
    fn from(line: &OrderLine) -> Self {
        Self {
            menu_id: line.menu_id,
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            options: line.options.clone(),
            line_total: line.line_total(),
        }
    }
}

/// Read-only receipt composed from an order and its lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order: OrderView,
    pub items: Vec<OrderItemView>,
}

impl OrderReceipt {
    pub fn from_parts(items: Vec<OrderItemView>, order: OrderView) -> Self {
        Self { order, items }
    }

    pub fn order_id(&self) -> OrderId {
        self.order.order_id
    }
}
