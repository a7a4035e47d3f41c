// --- File: crates/velora_notify/src/lib.rs ---
// Declare modules within this crate
pub mod service;

pub use service::{sign_payload, NotifyError, WebhookNotificationService, SIGNATURE_HEADER};
