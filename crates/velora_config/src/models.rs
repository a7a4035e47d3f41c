// --- File: crates/velora_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via VELORA_DATABASE__URL or DATABASE_URL
}

// --- Scheduling Config ---
// Knobs for the appointment slot calculator. The weekly opening hours and
// blocked dates live in the database; only cross-cutting defaults sit here.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SchedulingConfig {
    /// Minutes of turnaround inserted between consecutive bookable slots.
    #[serde(default)]
    pub buffer_minutes: i64,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Product {
    /// Stable catalog identifier, referenced by order requests.
    pub sku: String,
    pub name: String,
    /// Price in the smallest currency unit (e.g. cents).
    pub unit_amount: i64,
    /// Optional currency code for this product.
    pub currency: Option<String>,
    pub description: Option<String>,
}

// --- Shop Config ---
// The product catalog is a flat config-driven price list; the clinic sells a
// handful of care products alongside appointments.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShopConfig {
    pub default_currency: Option<String>,
    /// List of sellable products.
    #[serde(default)] // Defaults to an empty vec if not present in config
    pub products: Vec<Product>,
}

// --- Notifier Config ---
// Holds non-secret notifier config. The signing secret can be supplied via
// env var: VELORA_NOTIFIER__SHARED_SECRET.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotifierConfig {
    /// Endpoint that receives booking/order notices.
    pub webhook_url: String,
    /// Shared secret for signing outgoing payloads.
    pub shared_secret: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_appointments: bool,
    #[serde(default)]
    pub use_shop: bool,
    #[serde(default)]
    pub use_notifier: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>, // Central DB config
    #[serde(default)]
    pub scheduling: Option<SchedulingConfig>,
    #[serde(default)]
    pub shop: Option<ShopConfig>,
    #[serde(default)]
    pub notifier: Option<NotifierConfig>,
}
