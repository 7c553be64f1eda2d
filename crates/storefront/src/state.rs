//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{Catalog, FilterModel};
use crate::config::StorefrontConfig;
use crate::services::auth::{AuthError, Authenticator};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// static catalog, the account directory, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    /// Create a new application state with the seeded catalog and the
    /// configured account directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the account directory cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, AuthError> {
        let authenticator = config.auth_backend.build()?;
        Ok(Self::with_parts(config, Catalog::seeded(), authenticator))
    }

    /// Create application state from explicit parts.
    #[must_use]
    pub fn with_parts(
        config: StorefrontConfig,
        catalog: Catalog,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                authenticator,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the static shop data.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the account directory.
    #[must_use]
    pub fn authenticator(&self) -> &dyn Authenticator {
        self.inner.authenticator.as_ref()
    }

    /// Structural filter model new sessions start with.
    #[must_use]
    pub fn filter_model(&self) -> FilterModel {
        self.inner.config.filter_model
    }
}
