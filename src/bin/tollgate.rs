//! Runs the Tollgate HTTP gateway.
//!
//! Usage:
//!
//! ```text
//! TOLLGATE_CONFIG=/etc/tollgate/config.json tollgate
//! ```
//!
//! Without `TOLLGATE_CONFIG` the gateway starts with default settings and
//! in-memory stores. Log verbosity follows `RUST_LOG` (default `info`).

use camino::Utf8PathBuf;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::DefaultClock;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Builder;
use tollgate::account::adapters::{
    memory::InMemoryAccountRepository, postgres::PostgresAccountRepository,
};
use tollgate::account::services::AccountService;
use tollgate::audit::adapters::{memory::InMemoryAuditStore, postgres::PostgresAuditStore};
use tollgate::audit::ports::AuditStore;
use tollgate::audit::services::AuditSink;
use tollgate::config::{ConfigError, GatewayConfig};
use tollgate::gateway::adapters::{LocalBackend, RoutedBackend, UreqTransport, http};
use tollgate::gateway::ports::Backend;
use tollgate::gateway::services::GatewayPipeline;
use tollgate::order::adapters::{
    memory::InMemoryOrderRepository, postgres::PostgresOrderRepository,
};
use tollgate::order::services::OrderService;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "TOLLGATE_CONFIG";
const STORE_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Errors that can stop the gateway from starting.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{variable} is not valid UTF-8")]
    ConfigPath { variable: &'static str },

    #[error("failed to open {store} connection pool: {source}")]
    Pool {
        store: &'static str,
        source: PoolError,
    },

    #[error("failed to start runtime: {0}")]
    Runtime(std::io::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(StartupError::Runtime)?;

    let local = build_local_backend(&config)?;
    let transport = Arc::new(UreqTransport::new(Duration::from_millis(
        config.downstream_timeout_ms,
    )));
    let backend = Arc::new(RoutedBackend::from_config(&config, local, &transport));

    match config.audit_url() {
        Some(url) => {
            let pool = open_pool(url, config.pool_size, config.audit_timeout(), "audit")?;
            let store = Arc::new(PostgresAuditStore::new(pool));
            runtime.block_on(serve(&config, backend, store))?;
        }
        None => {
            tracing::warn!("no audit database configured, audit trail is kept in memory");
            let store = Arc::new(InMemoryAuditStore::new());
            runtime.block_on(serve(&config, backend, store))?;
        }
    }
    Ok(())
}

fn load_config() -> Result<GatewayConfig, StartupError> {
    match env::var(CONFIG_ENV) {
        Ok(raw) => {
            let path = Utf8PathBuf::from(raw);
            tracing::info!(%path, "loading configuration");
            Ok(GatewayConfig::load(&path)?)
        }
        Err(env::VarError::NotPresent) => {
            tracing::info!("{CONFIG_ENV} not set, using default configuration");
            Ok(GatewayConfig::default())
        }
        Err(env::VarError::NotUnicode(_)) => Err(StartupError::ConfigPath {
            variable: CONFIG_ENV,
        }),
    }
}

fn open_pool(
    url: &str,
    max_size: u32,
    checkout_timeout: Duration,
    store: &'static str,
) -> Result<PgPool, StartupError> {
    Pool::builder()
        .max_size(max_size)
        .connection_timeout(checkout_timeout)
        .build(ConnectionManager::<PgConnection>::new(url))
        .map_err(|source| StartupError::Pool { store, source })
}

fn build_local_backend(config: &GatewayConfig) -> Result<Arc<dyn Backend>, StartupError> {
    let clock = Arc::new(DefaultClock);
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("no database configured, accounts and orders are kept in memory");
        let accounts = AccountService::new(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::clone(&clock),
        );
        let orders = OrderService::new(Arc::new(InMemoryOrderRepository::new()), clock);
        return Ok(Arc::new(LocalBackend::new(accounts, orders)));
    };

    let pool = open_pool(url, config.pool_size, STORE_CHECKOUT_TIMEOUT, "account")?;
    let queries = Arc::new(config.queries.clone());
    let accounts = AccountService::new(
        Arc::new(PostgresAccountRepository::new(pool.clone(), Arc::clone(&queries))),
        Arc::clone(&clock),
    );
    let orders = OrderService::new(
        Arc::new(PostgresOrderRepository::new(pool, queries)),
        clock,
    );
    Ok(Arc::new(LocalBackend::new(accounts, orders)))
}

async fn serve<S>(
    config: &GatewayConfig,
    backend: Arc<RoutedBackend>,
    store: Arc<S>,
) -> Result<(), StartupError>
where
    S: AuditStore + 'static,
{
    let clock = Arc::new(DefaultClock);
    let audit = AuditSink::new(store, Arc::clone(&clock)).with_timeout(config.audit_timeout());
    let pipeline = Arc::new(GatewayPipeline::new(backend, audit, clock));
    let app = http::router(pipeline);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.listen_addr.clone(),
            source,
        })?;
    tracing::info!(addr = %config.listen_addr, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;
    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
