//! Process configuration loaded via OrthoConfig.
//!
//! Values come from `CONCIERGE_*` environment variables, configuration files
//! and command-line flags, in OrthoConfig's usual precedence. Every field is
//! optional; accessors apply the documented defaults.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::DEFAULT_RESTRICTED_COMPANY_CODE;
use crate::inbound::http::state::DEFAULT_PLACEMENT_COUNT;
use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Invalid configuration value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid bind address '{value}': {message}")]
    BindAddr { value: String, message: String },
    #[error("default placement count must be between 1 and {max}, got {value}")]
    PlacementCount { value: usize, max: usize },
}

/// Configuration for the concierge HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONCIERGE")]
pub struct ConciergeSettings {
    /// PostgreSQL URL of the content store. Fixture ports are used when unset.
    pub database_url: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Company code that selects the restricted visibility segment.
    pub restricted_company_code: Option<String>,
    /// Hotels per placement surface when the caller gives no count.
    pub default_placement_count: Option<usize>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
}

impl ConciergeSettings {
    /// Parse the listen address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self
            .bind_addr
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// The restricted segment's company code, defaulting to `sk`.
    pub fn restricted_company_code(&self) -> &str {
        self.restricted_company_code
            .as_deref()
            .unwrap_or(DEFAULT_RESTRICTED_COMPANY_CODE)
    }

    /// Default placement count, validated against the per-request limit.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::PlacementCount`] for zero or values above
    /// [`MAX_PLACEMENT_COUNT`](crate::domain::ports::MAX_PLACEMENT_COUNT).
    pub fn default_placement_count(&self) -> Result<usize, SettingsError> {
        use crate::domain::ports::MAX_PLACEMENT_COUNT;

        let value = self
            .default_placement_count
            .unwrap_or(DEFAULT_PLACEMENT_COUNT);
        if (1..=MAX_PLACEMENT_COUNT).contains(&value) {
            Ok(value)
        } else {
            Err(SettingsError::PlacementCount {
                value,
                max: MAX_PLACEMENT_COUNT,
            })
        }
    }

    /// Pool configuration, or `None` when no database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self
            .database_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())?;
        let mut config = PoolConfig::new(url);
        if let Some(max_size) = self.pool_max_size {
            config = config.with_max_size(max_size);
        }
        if let Some(secs) = self.pool_connection_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Some(config)
    }
}
