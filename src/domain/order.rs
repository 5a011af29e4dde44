use serde::{Deserialize, Serialize};

/// Identifier the store assigns to a persisted order.
pub type OrderId = u64;

/// How the customer paid at the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    Cash,
}

/// One menu line of an incoming order request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub menu_id: u64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Parsed order request as handed over by the request layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceiptRequest {
    pub payment: PaymentMethod,
    pub total_price: u64,
    pub received_price: u64,
    pub items: Vec<OrderLineRequest>,
}

impl OrderReceiptRequest {
    /// Builds the payload the store persists.
    pub fn into_order(self) -> OrderCreate {
        OrderCreate {
            payment: self.payment,
            total_price: self.total_price,
            received_price: self.received_price,
            lines: self
                .items
                .into_iter()
                .map(|item| OrderLine {
                    menu_id: item.menu_id,
                    name: item.name,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    options: item.options,
                })
                .collect(),
        }
    }
}

/// A stored order line.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub menu_id: u64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub options: Vec<String>,
}

impl OrderLine {
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// Represents a persisted kiosk order together with its lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub payment: PaymentMethod,
    pub total_price: u64,
    pub received_price: u64,
    pub lines: Vec<OrderLine>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub payment: PaymentMethod,
    pub total_price: u64,
    pub received_price: u64,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Change handed back to the customer. Never negative.
    pub fn change(&self) -> u64 {
        self.received_price.saturating_sub(self.total_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_converts_every_line() {
        let request = OrderReceiptRequest {
            payment: PaymentMethod::Cash,
            total_price: 9_000,
            received_price: 10_000,
            items: vec![
                OrderLineRequest {
                    menu_id: 1,
                    name: "Americano".to_string(),
                    quantity: 2,
                    unit_price: 3_000,
                    options: vec!["ICE".to_string(), "LARGE".to_string()],
                },
                OrderLineRequest {
                    menu_id: 7,
                    name: "Latte".to_string(),
                    quantity: 1,
                    unit_price: 3_000,
                    options: Vec::new(),
                },
            ],
        };

        let order = request.into_order();

        assert_eq!(order.payment, PaymentMethod::Cash);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines[0].options, vec!["ICE", "LARGE"]);
        assert_eq!(order.lines[0].line_total(), 6_000);
    }

    #[test]
    fn change_saturates_at_zero() {
        let order = Order {
            id: 1,
            payment: PaymentMethod::Card,
            total_price: 5_000,
            received_price: 0,
            lines: Vec::new(),
        };
        assert_eq!(order.change(), 0);
    }

    #[test]
    fn request_deserializes_without_options() {
        let json = r#"{
            "payment": "CARD",
            "total_price": 4500,
            "received_price": 4500,
            "items": [{ "menu_id": 3, "name": "Mocha", "quantity": 1, "unit_price": 4500 }]
        }"#;

        let request: OrderReceiptRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.payment, PaymentMethod::Card);
        assert!(request.items[0].options.is_empty());
    }
}
