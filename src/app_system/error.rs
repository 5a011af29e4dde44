use thiserror::Error;

/// Failures while starting, running or stopping the kiosk system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
