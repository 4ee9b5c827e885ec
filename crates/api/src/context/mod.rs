//! Application context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;

use i95connect_core::{BatchRunner, Dispatcher, HttpTransport};
use i95connect_domain::{ConnectorConfig, Result};
use i95connect_infra::{config, ReqwestTransport};

/// Type alias for the transport port trait object
type DynHttpTransport = dyn HttpTransport + 'static;

/// Application context - holds configuration and the shared transport
pub struct AppContext {
    /// Loaded connector configuration.
    pub config: ConnectorConfig,
    /// Transport shared by every executor.
    pub transport: Arc<DynHttpTransport>,
}

impl AppContext {
    /// Build the context from configuration using the reqwest transport.
    ///
    /// # Errors
    /// Fails when the HTTP client cannot be built.
    pub fn new(config: ConnectorConfig) -> Result<Self> {
        let transport = ReqwestTransport::from_settings(&config.http)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Build the context with an explicit transport.
    #[must_use]
    pub const fn with_transport(config: ConnectorConfig, transport: Arc<DynHttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Load configuration from `path`, or via the default strategy when
    /// `None`, and build the context.
    ///
    /// # Errors
    /// Fails when no valid configuration is found.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config = match path {
            Some(path) => config::load_from_file(Some(path))?,
            None => config::load()?,
        };
        tracing::info!(
            base_url = %config.credentials.api_base(),
            timeout_secs = config.http.timeout_secs,
            "Configuration ready"
        );
        Self::new(config)
    }

    /// Dispatcher over this context's transport and configuration.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::from_config(Arc::clone(&self.transport), &self.config)
    }

    /// Batch runner with the given continue-on-fail setting.
    #[must_use]
    pub fn runner(&self, continue_on_fail: bool) -> BatchRunner {
        BatchRunner::new(self.dispatcher()).with_continue_on_fail(continue_on_fail)
    }
}
