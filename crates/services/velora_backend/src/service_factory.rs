// --- File: crates/services/velora_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! This module wires the concrete stores and the notifier together, once
//! per process. Everything the routers need is built here and handed out
//! as trait objects, so request handlers never touch module-level globals.
use std::sync::Arc;
use tracing::{error, info};
use velora_common::models::Order;
use velora_common::services::{
    BoxFuture, BoxedError, NotificationService, OrderStore, ScheduleStore, ServiceFactory,
};
use velora_config::AppConfig;
use velora_db::{
    DbClient, OrderRepository, OrderRepositoryFactory, RepositoryFactory, SqlOrderRepository,
};

#[cfg(feature = "appointments")]
use velora_appointments::service::ClinicScheduleService;

#[cfg(feature = "notify")]
use velora_notify::WebhookNotificationService;

// Adapter exposing the SQL order repository through the common OrderStore
// trait. The shop crate only knows the trait.
struct SqlOrderStore {
    repository: SqlOrderRepository,
}

impl OrderStore for SqlOrderStore {
    type Error = BoxedError;

    fn create_order(&self, order: Order) -> BoxFuture<'_, Order, BoxedError> {
        let repository = self.repository.clone();
        Box::pin(async move {
            repository
                .create_order(order)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }

    fn find_order(&self, reference: &str) -> BoxFuture<'_, Option<Order>, BoxedError> {
        let repository = self.repository.clone();
        let reference = reference.to_string();
        Box::pin(async move {
            repository
                .find_by_reference(&reference)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }
}

/// Service factory implementation.
///
/// Initializes services based on the application configuration and feature
/// flags, and makes them available through the [`ServiceFactory`] trait.
pub struct VeloraServiceFactory {
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    db_client: Option<DbClient>,
    #[cfg(feature = "appointments")]
    schedule_store: Option<Arc<dyn ScheduleStore<Error = BoxedError>>>,
    #[cfg(feature = "shop")]
    order_store: Option<Arc<dyn OrderStore<Error = BoxedError>>>,
    #[cfg(feature = "notify")]
    notification_service: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
}

impl VeloraServiceFactory {
    /// Create a new service factory.
    pub async fn new(config: Arc<AppConfig>) -> Self {
        // One pool for every repository; features share it.
        let db_client = if config.database.is_some() {
            match DbClient::new(&config).await {
                Ok(client) => Some(client),
                Err(err) => {
                    error!("Failed to create database client: {}", err);
                    None
                }
            }
        } else {
            None
        };

        #[cfg(feature = "appointments")]
        let schedule_store = {
            if velora_common::is_appointments_enabled(&config) {
                match &db_client {
                    Some(client) => {
                        info!("Initializing schedule store...");
                        let service = ClinicScheduleService::new(client.clone());
                        match service.init_schema().await {
                            Ok(()) => Some(service.into_store()),
                            Err(err) => {
                                error!("Failed to initialize schedule schema: {}", err);
                                None
                            }
                        }
                    }
                    None => None,
                }
            } else {
                None
            }
        };

        #[cfg(feature = "shop")]
        let order_store: Option<Arc<dyn OrderStore<Error = BoxedError>>> = {
            if velora_common::is_shop_enabled(&config) {
                match &db_client {
                    Some(client) => {
                        info!("Initializing order store...");
                        let repository = OrderRepositoryFactory.create_repository(client.clone());
                        match repository.init_schema().await {
                            Ok(()) => Some(Arc::new(SqlOrderStore { repository })),
                            Err(err) => {
                                error!("Failed to initialize order schema: {}", err);
                                None
                            }
                        }
                    }
                    None => None,
                }
            } else {
                None
            }
        };

        #[cfg(feature = "notify")]
        let notification_service: Option<Arc<dyn NotificationService<Error = BoxedError>>> = {
            if velora_common::is_notifier_enabled(&config) {
                let notifier_config = config.notifier.as_ref().expect("checked by flag helper");
                info!("Initializing webhook notifier...");
                Some(Arc::new(WebhookNotificationService::from_config(
                    notifier_config,
                )))
            } else {
                None
            }
        };

        Self {
            config,
            db_client,
            #[cfg(feature = "appointments")]
            schedule_store,
            #[cfg(feature = "shop")]
            order_store,
            #[cfg(feature = "notify")]
            notification_service,
        }
    }

    /// The shared database client, when one is configured and reachable.
    pub fn db_client(&self) -> Option<&DbClient> {
        self.db_client.as_ref()
    }
}

impl ServiceFactory for VeloraServiceFactory {
    fn schedule_store(&self) -> Option<Arc<dyn ScheduleStore<Error = BoxedError>>> {
        #[cfg(feature = "appointments")]
        {
            self.schedule_store.clone()
        }
        #[cfg(not(feature = "appointments"))]
        {
            None
        }
    }

    fn order_store(&self) -> Option<Arc<dyn OrderStore<Error = BoxedError>>> {
        #[cfg(feature = "shop")]
        {
            self.order_store.clone()
        }
        #[cfg(not(feature = "shop"))]
        {
            None
        }
    }

    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>> {
        #[cfg(feature = "notify")]
        {
            self.notification_service.clone()
        }
        #[cfg(not(feature = "notify"))]
        {
            None
        }
    }
}
