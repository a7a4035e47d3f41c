// --- File: crates/velora_notify/src/service.rs ---
//! Webhook notification service implementation.
//!
//! Notices are POSTed as JSON to the configured endpoint. When a shared
//! secret is configured the payload is signed with HMAC-SHA256 and the
//! signature travels in the `X-Velora-Signature` header as
//! `t=<unix>,v1=<hex digest>`, computed over `"{timestamp}.{body}"`.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info};
use velora_common::services::{
    BoxFuture, BoxedError, Notice, NotificationResult, NotificationService,
};
use velora_common::HTTP_CLIENT;
use velora_config::NotifierConfig;

/// Header carrying the payload signature.
pub const SIGNATURE_HEADER: &str = "X-Velora-Signature";

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to serialize notice: {0}")]
    SerializeError(String),
    #[error("Webhook request failed: {0}")]
    RequestError(String),
}

type HmacSha256 = Hmac<Sha256>;

/// Computes the signature header value for a payload.
pub fn sign_payload(secret: &str, timestamp: i64, payload: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    let digest = hex::encode(mac.finalize().into_bytes());
    format!("t={},v1={}", timestamp, digest)
}

/// Webhook notification service.
///
/// Constructed once by the backend and shared across features.
pub struct WebhookNotificationService {
    webhook_url: String,
    shared_secret: Option<String>,
}

impl WebhookNotificationService {
    /// Create a new webhook notification service from its configuration.
    pub fn from_config(config: &NotifierConfig) -> Self {
        Self {
            webhook_url: config.webhook_url.clone(),
            shared_secret: config.shared_secret.clone(),
        }
    }

    async fn deliver_inner(&self, notice: Notice) -> Result<NotificationResult, NotifyError> {
        let payload = serde_json::to_vec(&notice)
            .map_err(|err| NotifyError::SerializeError(err.to_string()))?;

        let mut request = HTTP_CLIENT
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .body(payload.clone());

        if let Some(secret) = &self.shared_secret {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs() as i64)
                .unwrap_or(0);
            request = request.header(SIGNATURE_HEADER, sign_payload(secret, timestamp, &payload));
        }

        let response = request
            .send()
            .await
            .map_err(|err| NotifyError::RequestError(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!("Delivered notice {} to webhook", notice.kind);
            Ok(NotificationResult {
                delivered: true,
                detail: None,
            })
        } else {
            info!("Webhook rejected notice {}: {}", notice.kind, status);
            Ok(NotificationResult {
                delivered: false,
                detail: Some(format!("webhook responded with {}", status)),
            })
        }
    }
}

impl NotificationService for WebhookNotificationService {
    type Error = BoxedError;

    fn deliver(&self, notice: Notice) -> BoxFuture<'_, NotificationResult, BoxedError> {
        Box::pin(async move {
            self.deliver_inner(notice)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_deterministic_for_identical_inputs() {
        let first = sign_payload("whsec_test", 1_757_000_000, b"{\"kind\":\"booking.created\"}");
        let second = sign_payload("whsec_test", 1_757_000_000, b"{\"kind\":\"booking.created\"}");
        assert_eq!(first, second);
    }

    #[test]
    fn signature_carries_timestamp_and_hex_digest() {
        let header = sign_payload("whsec_test", 1_757_000_000, b"payload");

        let (timestamp_part, digest_part) = header.split_once(',').expect("two parts");
        assert_eq!(timestamp_part, "t=1757000000");
        let digest = digest_part.strip_prefix("v1=").expect("v1 prefix");
        assert_eq!(digest.len(), 64); // SHA-256, hex-encoded
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_depends_on_secret_timestamp_and_payload() {
        let base = sign_payload("whsec_test", 1_757_000_000, b"payload");
        assert_ne!(base, sign_payload("whsec_other", 1_757_000_000, b"payload"));
        assert_ne!(base, sign_payload("whsec_test", 1_757_000_001, b"payload"));
        assert_ne!(base, sign_payload("whsec_test", 1_757_000_000, b"payload2"));
    }
}
