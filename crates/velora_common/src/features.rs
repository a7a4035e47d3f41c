//! Feature flag handling for the Velora application.
//!
//! Feature flags are used in two ways:
//!
//! 1. Compile-time feature flags using `#[cfg(feature = "...")]`
//! 2. Runtime feature flags using configuration values
//!
//! ## Available Features
//!
//! - `openapi`: Enables OpenAPI documentation generation
//! - `appointments`: Enables appointment availability and booking
//! - `shop`: Enables the product shop
//! - `notify`: Enables outbound webhook notifications
//!
//! This module provides helper functions for checking if features are
//! enabled at runtime based on configuration values.

use std::sync::Arc;
use velora_config::AppConfig;

/// Check if a feature is enabled at runtime based on configuration.
///
/// A feature counts as enabled when its runtime flag is set and its
/// configuration section is present.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the appointments feature is enabled at runtime.
///
/// Appointments need a database; the scheduling section itself is optional
/// (buffer defaults to zero).
#[cfg(feature = "appointments")]
pub fn is_appointments_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_appointments, config.database.as_ref())
}

/// Check if the shop feature is enabled at runtime.
#[cfg(feature = "shop")]
pub fn is_shop_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_shop, config.shop.as_ref())
}

/// Check if the notifier feature is enabled at runtime.
#[cfg(feature = "notify")]
pub fn is_notifier_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_notifier, config.notifier.as_ref())
}
