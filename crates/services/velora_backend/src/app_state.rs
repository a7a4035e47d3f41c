// --- File: crates/services/velora_backend/src/app_state.rs ---
use crate::service_factory::VeloraServiceFactory;
use std::sync::Arc;
use velora_config::AppConfig;

/// Application state shared across all routes.
///
/// Constructed once at startup: the configuration, the service factory and
/// everything the factory built (database client, stores, notifier) live
/// here and are handed to the routers by reference. Request handlers never
/// reach for module-level globals.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration loaded at startup.
    pub config: Arc<AppConfig>,

    /// Factory holding the constructed stores and the notifier.
    pub service_factory: Arc<VeloraServiceFactory>,
}

impl AppState {
    /// Create a new AppState with the given configuration.
    ///
    /// Builds the service factory, which in turn connects the database and
    /// initializes the schemas for the enabled features.
    pub async fn new(config: Arc<AppConfig>) -> Self {
        let service_factory = Arc::new(VeloraServiceFactory::new(config.clone()).await);

        Self {
            config,
            service_factory,
        }
    }
}
