//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the web adapter: the concrete probe, the runner, and the GUI facade are
//! all instantiated here.

use std::sync::Arc;

use anyhow::Result;

use syscheck_core::{CheckConfig, TestRunner};
use syscheck_gui::{GuiBackend, GuiDeps};
use syscheck_runtime::DefaultSystemProbe;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Check pipeline tunables.
    pub check: CheckConfig,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with defaults.
    pub fn with_defaults() -> Self {
        Self {
            port: 8080,
            check: CheckConfig::default(),
            cors: CorsConfig::default(),
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the initialized services API handlers delegate to.
pub struct AxumContext {
    /// The GUI backend facade (shared with any desktop shell).
    pub gui: Arc<GuiBackend>,
}

/// Bootstrap the Axum adapter's services.
///
/// Mirrors the CLI bootstrap: the same `GuiDeps` → `GuiBackend`
/// construction around the default probe.
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    tracing::info!(
        port = config.port,
        min_memory_bytes = config.check.min_memory_bytes,
        liveness_delay = ?config.check.liveness_delay,
        "Axum bootstrap"
    );

    let probe: Arc<dyn syscheck_core::ports::SystemProbePort> = Arc::new(DefaultSystemProbe::new());
    let runner = TestRunner::new(Arc::clone(&probe), config.check.clone());
    let gui = Arc::new(GuiBackend::new(GuiDeps::new(runner, probe)));

    AxumContext { gui }
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config);
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("syscheck web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
