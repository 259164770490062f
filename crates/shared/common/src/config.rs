//! Shared configuration structures.

/// Base service configuration shared by all services.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// In-memory store configuration.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Number of entries to reserve up front
    pub initial_capacity: usize,
}
