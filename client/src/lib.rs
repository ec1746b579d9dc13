//! Typed client for the Instruqt GraphQL API.
//!
//! [`InstruqtClient`] covers tracks, challenges, plays, sandboxes, reviews,
//! invites, users and team keys. With the `webhook` feature, the [`webhook`]
//! module verifies and dispatches events pushed by Instruqt.

/// Request and response shapes of the Instruqt API.
pub mod api;
mod client;
/// Errors returned by the Instruqt client.
pub mod errors;
mod options;
#[cfg(feature = "webhook")]
pub mod webhook;

#[cfg(any(test, feature = "testing"))]
pub use client::testing::{MockExecutor, OperationKind, RecordedOperation};
pub use client::{DEFAULT_ENDPOINT, GraphQlExecutor, HttpExecutor, InstruqtClient, InstruqtClientConfig};
pub use options::{Ordering, QueryOptions};
