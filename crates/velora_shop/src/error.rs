// --- File: crates/velora_shop/src/error.rs ---
use thiserror::Error;
use velora_common::VeloraError;

/// Errors specific to the shop feature.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Shop configuration error: {0}")]
    ConfigError(String),

    #[error("Order store error: {0}")]
    StoreError(String),
}

impl From<ShopError> for VeloraError {
    fn from(err: ShopError) -> Self {
        match err {
            ShopError::UnknownProduct(sku) => {
                VeloraError::ValidationError(format!("Unknown product: {}", sku))
            }
            ShopError::InvalidQuantity(quantity) => {
                VeloraError::ValidationError(format!("Invalid quantity: {}", quantity))
            }
            ShopError::ValidationError(message) => VeloraError::ValidationError(message),
            ShopError::ConfigError(message) => VeloraError::ConfigError(message),
            ShopError::StoreError(message) => VeloraError::DatabaseError(message),
        }
    }
}
