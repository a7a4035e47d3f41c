

// --- File: crates/velora_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;     // Error handling
pub mod features;  // Feature flag handling
pub mod http;      // HTTP utilities
pub mod logging;   // Logging utilities
pub mod models;    // Shared domain records
pub mod services;  // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    conflict, config_error, external_service_error, internal_error, not_found, validation_error,
    Context, HttpStatusCode, VeloraError,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, get, post, HTTP_CLIENT},
    handle_json_result, map_json_error, IntoHttpResponse,
};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;

// Conditionally re-export feature-specific functions
#[cfg(feature = "appointments")]
pub use features::is_appointments_enabled;

#[cfg(feature = "shop")]
pub use features::is_shop_enabled;

#[cfg(feature = "notify")]
pub use features::is_notifier_enabled;

// This crate provides common functionality that can be used across the
// application: shared models, error handling, service traits, HTTP and
// logging utilities.
