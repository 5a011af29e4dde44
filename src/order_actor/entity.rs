use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderId};

impl Entity for Order {
    type Id = OrderId;
    type CreatePayload = OrderCreate;

    fn id(&self) -> &OrderId { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// Lines are stored inside the order so a save is a single insert.
    fn from_create(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            payment: params.payment,
            total_price: params.total_price,
            received_price: params.received_price,
            lines: params.lines,
        }
    }
}
