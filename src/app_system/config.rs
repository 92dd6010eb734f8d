use crate::app_system::SystemError;

pub const CHANNEL_CAPACITY_VAR: &str = "INVENTORY_CHANNEL_CAPACITY";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Requests that may queue up for the inventory actor.
    pub channel_capacity: usize,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads `INVENTORY_CHANNEL_CAPACITY` and `RUST_LOG`, falling back to defaults.
    pub fn from_env() -> Result<Self, SystemError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SystemError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(SystemError::InvalidConfig(format!(
                        "{} must be a positive integer, got {:?}",
                        CHANNEL_CAPACITY_VAR, raw
                    )))
                }
            };
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SystemConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_reads_overrides() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            (CHANNEL_CAPACITY_VAR, " 8 "),
            (LOG_FILTER_VAR, "inventory_ledger=debug"),
        ]))
        .unwrap();
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.log_filter, "inventory_ledger=debug");
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = SystemConfig::from_lookup(lookup_from(&[(CHANNEL_CAPACITY_VAR, "0")])).unwrap_err();
        assert!(matches!(err, SystemError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_non_numeric_capacity() {
        let err = SystemConfig::from_lookup(lookup_from(&[(CHANNEL_CAPACITY_VAR, "lots")])).unwrap_err();
        assert!(err.to_string().contains("lots"));
    }
}
