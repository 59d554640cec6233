//! Startup configuration for the gateway.
//!
//! Configuration is a single JSON document read once at startup through a
//! capability-scoped directory handle. Every field has a default, so an empty
//! object `{}` is a valid configuration that routes every operation to the
//! local backend.
//!
//! ```json
//! {
//!   "listen_addr": "0.0.0.0:8080",
//!   "database_url": "postgres://gateway@db/accounts",
//!   "audit_database_url": "postgres://gateway@audit-db/audit",
//!   "routes": {
//!     "place_order": { "kind": "downstream", "base_url": "http://orders:9000" }
//!   }
//! }
//! ```

mod queries;

pub use queries::QueryCatalog;

use crate::gateway::domain::Operation;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Where a logical operation is executed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteConfig {
    /// Handled by the gateway's own store logic.
    Local,
    /// Relayed to a downstream HTTP service.
    Downstream {
        /// Base URL the original endpoint path is appended to.
        base_url: String,
    },
}

/// Gateway configuration loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    /// Socket address the HTTP front binds to.
    pub listen_addr: String,
    /// Connection URL of the account and order store.
    pub database_url: Option<String>,
    /// Connection URL of the audit store; falls back to `database_url`.
    pub audit_database_url: Option<String>,
    /// Maximum connections per pool.
    pub pool_size: u32,
    /// Connect and read timeout for downstream calls, in milliseconds.
    pub downstream_timeout_ms: u64,
    /// Upper bound on one audit write, in milliseconds; also the audit
    /// pool's connection checkout timeout.
    pub audit_timeout_ms: u64,
    /// Per-operation routing; unlisted operations run locally.
    pub routes: BTreeMap<Operation, RouteConfig>,
    /// Statement texts for the relational store.
    pub queries: QueryCatalog,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_owned(),
            database_url: None,
            audit_database_url: None,
            pool_size: 8,
            downstream_timeout_ms: 5_000,
            audit_timeout_ms: 2_000,
            routes: BTreeMap::new(),
            queries: QueryCatalog::default(),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Read {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for this schema.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A downstream route has an unusable base URL.
    #[error("route for {operation} has invalid base URL '{base_url}'")]
    InvalidRoute {
        /// Operation the route belongs to.
        operation: Operation,
        /// Rejected URL.
        base_url: String,
    },

    /// The pool size is zero.
    #[error("pool_size must be at least 1")]
    InvalidPoolSize,

    /// The audit timeout is zero.
    #[error("audit_timeout_ms must be at least 1")]
    InvalidAuditTimeout,
}

impl GatewayConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be opened,
    /// [`ConfigError::Parse`] for malformed JSON, or a validation error from
    /// [`GatewayConfig::validate`].
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_string(),
            source,
        };
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let file_name = path.file_name().ok_or_else(|| {
            read_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path has no file name",
            ))
        })?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let text = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json(&text)
    }

    /// Parses and validates configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or a validation
    /// error from [`GatewayConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRoute`] for a downstream base URL that
    /// is not `http://` or `https://`, [`ConfigError::InvalidPoolSize`] or
    /// [`ConfigError::InvalidAuditTimeout`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidPoolSize);
        }
        if self.audit_timeout_ms == 0 {
            return Err(ConfigError::InvalidAuditTimeout);
        }
        for (operation, route) in &self.routes {
            if let RouteConfig::Downstream { base_url } = route
                && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
            {
                return Err(ConfigError::InvalidRoute {
                    operation: *operation,
                    base_url: base_url.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns the route for an operation, defaulting to local handling.
    #[must_use]
    pub fn route(&self, operation: Operation) -> RouteConfig {
        self.routes
            .get(&operation)
            .cloned()
            .unwrap_or(RouteConfig::Local)
    }

    /// Returns the audit write timeout.
    #[must_use]
    pub const fn audit_timeout(&self) -> Duration {
        Duration::from_millis(self.audit_timeout_ms)
    }

    /// Returns the audit store URL, falling back to the primary store.
    #[must_use]
    pub fn audit_url(&self) -> Option<&str> {
        self.audit_database_url
            .as_deref()
            .or(self.database_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GatewayConfig, RouteConfig};
    use crate::gateway::domain::Operation;
    use rstest::rstest;

    #[rstest]
    fn empty_document_uses_defaults() {
        let config = GatewayConfig::from_json("{}").expect("defaults should parse");
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.route(Operation::CreateAccount), RouteConfig::Local);
    }

    #[rstest]
    fn downstream_route_is_parsed() {
        let config = GatewayConfig::from_json(
            r#"{"routes": {"place_order": {"kind": "downstream", "base_url": "http://orders:9000"}}}"#,
        )
        .expect("route should parse");

        assert_eq!(
            config.route(Operation::PlaceOrder),
            RouteConfig::Downstream {
                base_url: "http://orders:9000".to_owned()
            }
        );
    }

    #[rstest]
    fn query_overrides_keep_other_defaults() {
        let config = GatewayConfig::from_json(
            r#"{"queries": {"account_update_name": "UPDATE people SET nick = $2 WHERE nick = $1"}}"#,
        )
        .expect("override should parse");

        assert_eq!(
            config.queries.account_update_name,
            "UPDATE people SET nick = $2 WHERE nick = $1"
        );
        assert_eq!(
            config.queries.account_insert,
            GatewayConfig::default().queries.account_insert
        );
    }

    #[rstest]
    fn rejects_non_http_base_url() {
        let result = GatewayConfig::from_json(
            r#"{"routes": {"place_order": {"kind": "downstream", "base_url": "ftp://orders"}}}"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidRoute { .. })));
    }

    #[rstest]
    fn rejects_unknown_keys() {
        let result = GatewayConfig::from_json(r#"{"listen_port": 80}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[rstest]
    fn audit_timeout_is_configurable() {
        let config = GatewayConfig::from_json(r#"{"audit_timeout_ms": 250}"#)
            .expect("config should parse");
        assert_eq!(config.audit_timeout(), std::time::Duration::from_millis(250));
    }

    #[rstest]
    fn rejects_zero_audit_timeout() {
        let result = GatewayConfig::from_json(r#"{"audit_timeout_ms": 0}"#);
        assert!(matches!(result, Err(ConfigError::InvalidAuditTimeout)));
    }

    #[rstest]
    fn audit_url_falls_back_to_primary_store() {
        let config = GatewayConfig::from_json(r#"{"database_url": "postgres://db/main"}"#)
            .expect("config should parse");
        assert_eq!(config.audit_url(), Some("postgres://db/main"));
    }
}
