//! # Mock Framework
//!
//! Utilities for testing clients and the order service in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then
//! [`expect_create`] or [`expect_get`] to answer requests by hand.
//! [`FixedRandom`] and [`ScriptedRandom`] stand in for real randomness.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::random::RandomSource;
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test owns, so the test plays the actor:
/// it inspects each request and decides the reply (success, failure, or a
/// dropped responder).
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Always rolls the same value, clamped to the die.
pub struct FixedRandom(pub u32);

impl RandomSource for FixedRandom {
    fn roll(&self, faces: u32) -> u32 {
        self.0.clamp(1, faces.max(1))
    }
}

/// Replays a fixed sequence of rolls in order.
pub struct ScriptedRandom {
    rolls: Mutex<VecDeque<u32>>,
}

impl ScriptedRandom {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self { rolls: Mutex::new(rolls.into_iter().collect()) }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.lock().unwrap().len()
    }
}

impl RandomSource for ScriptedRandom {
    fn roll(&self, faces: u32) -> u32 {
        let roll = self.rolls.lock().unwrap().pop_front().expect("ScriptedRandom ran out of rolls");
        assert!((1..=faces).contains(&roll), "scripted roll {roll} outside 1..={faces}");
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, OrderCreate, PaymentMethod};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Order>(10);

        let create_task = tokio::spawn(async move {
            let params = OrderCreate {
                payment: PaymentMethod::Card,
                total_price: 3_000,
                received_price: 3_000,
                lines: Vec::new(),
            };
            client.create(params).await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.total_price, 3_000);
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(1));
    }

    #[test]
    fn test_scripted_random_replays_in_order() {
        let random = ScriptedRandom::new([3, 9]);
        assert_eq!(random.roll(7), 3);
        assert_eq!(random.roll(10), 9);
        assert_eq!(random.remaining(), 0);
    }

    #[test]
    fn test_fixed_random_clamps_to_die() {
        assert_eq!(FixedRandom(9).roll(7), 7);
        assert_eq!(FixedRandom(9).roll(10), 9);
    }
}
