use std::sync::Arc;

use axum::http::{HeaderMap, HeaderValue};

// Current and legacy names of each signature header.
const ID_HEADERS: [&str; 2] = ["webhook-id", "svix-id"];
const TIMESTAMP_HEADERS: [&str; 2] = ["webhook-timestamp", "svix-timestamp"];
const SIGNATURE_HEADERS: [&str; 2] = ["webhook-signature", "svix-signature"];

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook verification failed: {0}")]
    Verification(#[from] svix::webhooks::WebhookError),
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] axum::http::header::InvalidHeaderValue),
}

/// Verifies webhook signatures with the [`svix`] webhook primitive.
///
/// Secrets are accepted with or without their `whsec_` prefix. Signature
/// headers are read under both the `webhook-*` and the legacy `svix-*` names,
/// and timestamps more than five minutes away from the local clock are
/// rejected.
#[derive(Clone)]
pub struct WebhookVerifier {
    webhook: Arc<svix::webhooks::Webhook>,
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier").finish_non_exhaustive()
    }
}

impl WebhookVerifier {
    pub fn new(secret: &str) -> Result<Self, WebhookError> {
        Ok(Self {
            webhook: Arc::new(svix::webhooks::Webhook::new(secret)?),
        })
    }

    /// Signs a payload, returning a `v1,<base64>` signature entry.
    pub fn sign(&self, msg_id: &str, timestamp: i64, payload: &[u8]) -> Result<String, WebhookError> {
        Ok(self.webhook.sign(msg_id, timestamp, payload)?)
    }

    /// Builds the signature headers for a payload under both header naming schemes.
    pub fn signature_headers(&self, msg_id: &str, timestamp: i64, payload: &[u8]) -> Result<HeaderMap, WebhookError> {
        let id = HeaderValue::from_str(msg_id)?;
        let timestamp_value = HeaderValue::from_str(&timestamp.to_string())?;
        let signature = HeaderValue::from_str(&self.sign(msg_id, timestamp, payload)?)?;

        let mut headers = HeaderMap::with_capacity(6);
        for (names, value) in [
            (ID_HEADERS, id),
            (TIMESTAMP_HEADERS, timestamp_value),
            (SIGNATURE_HEADERS, signature),
        ] {
            for name in names {
                headers.insert(name, value.clone());
            }
        }
        Ok(headers)
    }

    /// Verifies the payload against the signature headers using the local clock.
    pub fn verify(&self, headers: &HeaderMap, payload: &[u8]) -> Result<(), WebhookError> {
        Ok(self.webhook.verify(payload, headers)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test vector published with the Svix libraries.
    const SECRET: &str = "whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw";
    const MSG_ID: &str = "msg_p5jXN8AQM9LWM0D4loKWxJek";
    const TIMESTAMP: i64 = 1614265330;
    const PAYLOAD: &[u8] = br#"{"test": 2432232314}"#;
    const SIGNATURE: &str = "v1,g0hM9SsE+OTPJTGt/tmIKtSyZlE3uFJELVlNIOLJ1OE=";

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    #[test]
    fn known_signature_is_reproduced() -> anyhow::Result<()> {
        let verifier = WebhookVerifier::new(SECRET)?;
        assert_eq!(SIGNATURE, verifier.sign(MSG_ID, TIMESTAMP, PAYLOAD)?);
        Ok(())
    }

    #[test]
    fn prefix_on_secret_is_optional() -> anyhow::Result<()> {
        let with_prefix = WebhookVerifier::new(SECRET)?;
        let without_prefix = WebhookVerifier::new(SECRET.trim_start_matches("whsec_"))?;

        assert_eq!(
            with_prefix.sign(MSG_ID, TIMESTAMP, PAYLOAD)?,
            without_prefix.sign(MSG_ID, TIMESTAMP, PAYLOAD)?
        );
        Ok(())
    }

    #[test]
    fn signed_headers_are_accepted() -> anyhow::Result<()> {
        let verifier = WebhookVerifier::new(SECRET)?;
        let headers = verifier.signature_headers(MSG_ID, now(), PAYLOAD)?;

        verifier.verify(&headers, PAYLOAD)?;
        Ok(())
    }

    #[test]
    fn any_matching_entry_is_accepted() -> anyhow::Result<()> {
        let verifier = WebhookVerifier::new(SECRET)?;
        let timestamp = now();
        let mut headers = verifier.signature_headers(MSG_ID, timestamp, PAYLOAD)?;
        let signature = verifier.sign(MSG_ID, timestamp, PAYLOAD)?;
        for name in SIGNATURE_HEADERS {
            headers.insert(name, HeaderValue::from_str(&format!("v1,bm90LXRoaXM= {signature}"))?);
        }

        verifier.verify(&headers, PAYLOAD)?;
        Ok(())
    }

    #[test]
    fn tampered_payload_is_rejected() -> anyhow::Result<()> {
        let verifier = WebhookVerifier::new(SECRET)?;
        let headers = verifier.signature_headers(MSG_ID, now(), PAYLOAD)?;

        assert!(verifier.verify(&headers, br#"{"test": 2432232315}"#).is_err());
        Ok(())
    }

    #[test]
    fn stale_and_future_timestamps_are_rejected() -> anyhow::Result<()> {
        let verifier = WebhookVerifier::new(SECRET)?;

        let stale = verifier.signature_headers(MSG_ID, now() - 10 * 60, PAYLOAD)?;
        assert!(verifier.verify(&stale, PAYLOAD).is_err());

        let future = verifier.signature_headers(MSG_ID, now() + 10 * 60, PAYLOAD)?;
        assert!(verifier.verify(&future, PAYLOAD).is_err());
        Ok(())
    }

    #[test]
    fn missing_headers_are_rejected() -> anyhow::Result<()> {
        let verifier = WebhookVerifier::new(SECRET)?;

        assert!(verifier.verify(&HeaderMap::new(), PAYLOAD).is_err());
        Ok(())
    }

    #[test]
    fn invalid_secret_is_rejected() {
        assert!(matches!(
            WebhookVerifier::new("whsec_not base64!"),
            Err(WebhookError::Verification(_))
        ));
    }
}
