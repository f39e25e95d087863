use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub publish: PublishConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScanConfig {
    /// How many orders a full inbox scan produces
    #[serde(default = "default_order_count")]
    pub order_count: usize,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PublishConfig {
    /// Simulated ERP latency per publish
    #[serde(default = "default_publish_delay_ms")]
    pub delay_ms: u64,
    /// How many parsed orders the demo run publishes
    #[serde(default = "default_publish_count")]
    pub count: usize,
}

fn default_order_count() -> usize {
    50
}

fn default_tick_interval_ms() -> u64 {
    16
}

fn default_publish_delay_ms() -> u64 {
    1000
}

fn default_publish_count() -> usize {
    3
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            order_count: default_order_count(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_publish_delay_ms(),
            count: default_publish_count(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::Environment::with_prefix("OTRACK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.order_count, 50);
        assert_eq!(config.publish.delay_ms, 1000);
        assert!(config.publish.count > 0);
    }
}
