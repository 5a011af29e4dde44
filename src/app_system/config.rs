use std::time::Duration;

use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for the kiosk backend.
///
/// Read from an optional `kiosk.toml` and overridden by `KIOSK_*`
/// environment variables, e.g. `KIOSK_DELAY_UNIT_MS=200`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    /// Channel capacity of the order store actor.
    pub store_buffer_size: usize,
    /// Length of one simulated payment delay unit, in milliseconds.
    pub delay_unit_ms: u64,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            store_buffer_size: 100,
            delay_unit_ms: 1_000,
            log_filter: "info".to_string(),
        }
    }
}

impl KioskConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("kiosk")
    }

    /// Loads `<file_stem>.toml` (if present) overlaid by the environment.
    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(File::with_name(file_stem).required(false))
            .add_source(Environment::with_prefix("KIOSK").try_parsing(true))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// The store channel needs room for at least one request.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.store_buffer_size == 0 {
            return Err(ConfigError::Message(
                "store_buffer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn delay_unit(&self) -> Duration {
        Duration::from_millis(self.delay_unit_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = KioskConfig::load_from("does-not-exist/kiosk").unwrap();
        assert_eq!(config.store_buffer_size, KioskConfig::default().store_buffer_size);
        assert_eq!(config.delay_unit(), Duration::from_secs(1));
    }

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("kiosk-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut file = std::fs::File::create(dir.join("kiosk.toml")).unwrap();
        writeln!(file, "{contents}").unwrap();
        dir
    }

    #[test]
    fn zero_store_buffer_is_rejected() {
        let dir = write_config("zero-buffer", "store_buffer_size = 0");

        let stem = dir.join("kiosk");
        let error = KioskConfig::load_from(stem.to_str().unwrap()).unwrap_err();
        assert!(error.to_string().contains("store_buffer_size"), "{error}");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = write_config("overrides", "delay_unit_ms = 250\nlog_filter = \"debug\"");

        let stem = dir.join("kiosk");
        let config = KioskConfig::load_from(stem.to_str().unwrap()).unwrap();

        assert_eq!(config.delay_unit(), Duration::from_millis(250));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.store_buffer_size, 100);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
