//! Shared application state.

use std::sync::Arc;

use thiserror::Error;

use crate::config::{BackendMode, PortalConfig};
use crate::geocode::{GeocodeClient, GeocodeError};
use crate::ops::mock::MockBackend;
use crate::ops::DealerOps;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("live backend is not yet available; set BACKEND_MODE=mock")]
    LiveBackendUnavailable,

    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}

/// Shared application state passed to all route handlers.
///
/// Cheap to clone; the inner state is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

struct AppStateInner {
    config: PortalConfig,
    geocoder: GeocodeClient,
    ops: Arc<dyn DealerOps>,
}

impl AppState {
    /// Builds the state for the configured backend mode.
    ///
    /// # Errors
    ///
    /// Returns error if the geocoding client fails to build, or if
    /// `BACKEND_MODE=live` is requested before the live ERP adapter ships.
    pub fn new(config: PortalConfig) -> Result<Self, StateError> {
        let geocoder = GeocodeClient::new(&config.geocoder)?;
        let ops: Arc<dyn DealerOps> = match config.backend {
            BackendMode::Mock => Arc::new(MockBackend::seeded()),
            BackendMode::Live => return Err(StateError::LiveBackendUnavailable),
        };
        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                geocoder,
                ops,
            }),
        })
    }

    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    pub fn geocoder(&self) -> &GeocodeClient {
        &self.inner.geocoder
    }

    pub fn ops(&self) -> &dyn DealerOps {
        self.inner.ops.as_ref()
    }
}
