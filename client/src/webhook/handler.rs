use std::{future::Future, pin::Pin, sync::Arc};

use axum::{
    Router,
    extract::Request,
    http::{Method, StatusCode, request::Parts},
    response::{IntoResponse, Response},
    routing::any,
};

use super::{WebhookError, WebhookEvent, WebhookVerifier};

/// Largest accepted webhook body.
const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

type CallbackFuture = Pin<Box<dyn Future<Output = Result<Response, String>> + Send>>;
type Callback = dyn Fn(Parts, WebhookEvent) -> CallbackFuture + Send + Sync;

/// Authenticates inbound webhook requests and dispatches their events.
///
/// Each request goes through the following steps, the first failing one
/// determining the response:
/// 1. anything but `POST` is rejected with `405`,
/// 2. an unreadable body is rejected with `400`,
/// 3. a body not matching the signature headers is rejected with `401`,
/// 4. a body that is not a [`WebhookEvent`] is rejected with `400`,
/// 5. an event without a type is rejected with `400`,
/// 6. the callback is invoked; its response is returned as is, its error
///    becomes a `500` carrying the error text.
///
/// The body is only parsed once its signature is verified.
#[derive(Clone)]
pub struct WebhookHandler {
    verifier: WebhookVerifier,
    callback: Arc<Callback>,
    body_limit: usize,
}

impl std::fmt::Debug for WebhookHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookHandler")
            .field("verifier", &self.verifier)
            .field("body_limit", &self.body_limit)
            .finish_non_exhaustive()
    }
}

impl WebhookHandler {
    /// Creates a handler verifying requests with the given webhook secret.
    ///
    /// The callback receives the request head and the decoded event and is
    /// responsible for producing the success response.
    pub fn new<F, Fut, R, Err>(secret: &str, callback: F) -> Result<Self, WebhookError>
    where
        F: Fn(Parts, WebhookEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, Err>> + Send + 'static,
        R: IntoResponse + 'static,
        Err: std::fmt::Display + 'static,
    {
        Ok(Self::with_verifier(WebhookVerifier::new(secret)?, callback))
    }

    pub fn with_verifier<F, Fut, R, Err>(verifier: WebhookVerifier, callback: F) -> Self
    where
        F: Fn(Parts, WebhookEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, Err>> + Send + 'static,
        R: IntoResponse + 'static,
        Err: std::fmt::Display + 'static,
    {
        let callback = move |parts: Parts, event: WebhookEvent| -> CallbackFuture {
            let fut = callback(parts, event);
            Box::pin(async move {
                fut.await
                    .map(IntoResponse::into_response)
                    .map_err(|error| error.to_string())
            })
        };

        Self {
            verifier,
            callback: Arc::new(callback),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }

    /// Processes one webhook request.
    pub async fn handle(&self, request: Request) -> Response {
        if request.method() != Method::POST {
            tracing::warn!(method = %request.method(), "rejecting webhook with invalid method");
            return (StatusCode::METHOD_NOT_ALLOWED, "Invalid request method").into_response();
        }

        let (parts, body) = request.into_parts();

        let payload = match axum::body::to_bytes(body, self.body_limit).await {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(%error, "failed to read webhook body");
                return (StatusCode::BAD_REQUEST, "No payload").into_response();
            }
        };

        if let Err(error) = self.verifier.verify(&parts.headers, &payload) {
            tracing::warn!(%error, "rejecting webhook with invalid signature");
            return (StatusCode::UNAUTHORIZED, "Invalid webhook signature").into_response();
        }

        let event = match serde_json::from_slice::<WebhookEvent>(&payload) {
            Ok(event) => event,
            Err(error) => {
                tracing::warn!(%error, "failed to decode webhook payload");
                return (StatusCode::BAD_REQUEST, "Failed to decode webhook payload").into_response();
            }
        };

        if event.event_type.is_empty() {
            tracing::warn!("rejecting webhook without event type");
            return (StatusCode::BAD_REQUEST, "Invalid webhook payload").into_response();
        }

        tracing::debug!(event_type = %event.event_type, "dispatching webhook event");

        match (self.callback)(parts, event).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(%error, "webhook callback failed");
                (StatusCode::INTERNAL_SERVER_ERROR, error).into_response()
            }
        }
    }

    /// Mounts the handler on `path` for every HTTP method.
    ///
    /// Non-`POST` requests reach the handler so they are answered with `405`.
    pub fn into_router(self, path: &str) -> Router {
        Router::new().route(
            path,
            any(move |request: Request| {
                let handler = self.clone();
                async move { handler.handle(request).await }
            }),
        )
    }
}
