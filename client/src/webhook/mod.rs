//! Inbound webhooks pushed by Instruqt.
//!
//! Requests are authenticated with [`WebhookVerifier`] before their body is
//! parsed into a [`WebhookEvent`], then handed to a caller supplied callback by
//! [`WebhookHandler`].

mod handler;
mod signature;

use std::collections::HashMap;

pub use handler::WebhookHandler;
pub use signature::{WebhookError, WebhookVerifier};

use crate::api::types::DateTime;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(<Option<T> as serde::Deserialize>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope of every webhook event.
///
/// Fields not carried by a given event type keep their default value, whether
/// they are absent or explicitly `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct WebhookEvent {
    /// Event discriminator, e.g. `track.started` or `challenge.completed`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub event_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub track_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub track_slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub participant_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub invite_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub claim_id: String,
    pub timestamp: Option<DateTime>,
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
    /// Seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_parameters: HashMap<String, String>,

    #[serde(deserialize_with = "null_as_default")]
    pub challenge_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub challenge_index: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_challenges: i32,

    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub review_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub score: i32,
}
