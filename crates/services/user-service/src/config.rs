//! User service configuration.

use std::env;

use common::{ServiceConfig, StoreConfig};

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Service name and log level
    pub service: ServiceConfig,
    /// In-memory store settings
    pub store: StoreConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                log_level: env::var("USER_SERVICE_LOG_LEVEL")
                    .unwrap_or(defaults.service.log_level),
                ..defaults.service
            },
            store: StoreConfig {
                initial_capacity: env::var("USER_SERVICE_STORE_CAPACITY")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.store.initial_capacity),
            },
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                ..ServiceConfig::default()
            },
            store: StoreConfig::default(),
        }
    }
}
