//! Order persistence: the entity wiring for the resource actor and the
//! store port it serves.

pub mod entity;
pub mod store;

pub use store::*;
