//! System orchestration, configuration, startup, and shutdown logic.

pub mod kiosk_system;
pub mod config;
pub mod tracing;
pub mod error;

pub use self::kiosk_system::*;
pub use self::config::*;
pub use self::tracing::*;
pub use self::error::*;
