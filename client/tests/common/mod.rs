#![allow(dead_code)]

use std::sync::Arc;

use instruqt_client::{InstruqtClient, InstruqtClientConfig};

pub const TOKEN: &str = "test-token";
pub const TEAM: &str = "acme";

#[derive(Clone, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize)]
pub enum Body {
    Json(serde_json::Value),
    Raw(String),
}

#[derive(Clone, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize)]
pub struct RecordedRequestBody {
    pub method: String,
    pub path_and_query: String,
    pub authorization: Option<String>,
    pub body: Option<Body>,
}

impl RecordedRequestBody {
    /// Returns the GraphQL variables of a recorded JSON request.
    pub fn variables(&self) -> &serde_json::Value {
        match &self.body {
            Some(Body::Json(json)) => &json["variables"],
            _ => &serde_json::Value::Null,
        }
    }

    pub fn query(&self) -> &str {
        match &self.body {
            Some(Body::Json(json)) => json["query"].as_str().unwrap_or_default(),
            _ => "",
        }
    }
}

impl From<&mockito::Request> for RecordedRequestBody {
    fn from(value: &mockito::Request) -> Self {
        Self {
            method: value.method().to_string(),
            path_and_query: value.path_and_query().to_string(),
            authorization: value
                .header("authorization")
                .first()
                .and_then(|h| h.to_str().ok())
                .map(str::to_owned),
            body: match value.header("content-type").first() {
                Some(h) if h.as_bytes() == b"application/json" => {
                    Some(Body::Json(serde_json::from_slice(value.body().unwrap()).unwrap()))
                }
                _ => Some(Body::Raw(value.utf8_lossy_body().unwrap().to_string())),
            },
        }
    }
}

pub struct RequestRecorder {
    requests: Arc<parking_lot::Mutex<Vec<RecordedRequestBody>>>,
}

impl std::fmt::Debug for RequestRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestRecorder")
            .field("requests", &self.requests.lock())
            .finish()
    }
}

impl Default for RequestRecorder {
    fn default() -> Self {
        Self {
            requests: Arc::new(parking_lot::Mutex::new(Vec::with_capacity(2))),
        }
    }
}

impl RequestRecorder {
    pub fn as_matcher(&self) -> impl Fn(&mockito::Request) -> bool + use<> {
        let requests = self.requests.clone();
        move |req| {
            requests.lock().push(RecordedRequestBody::from(req));
            true
        }
    }

    pub fn requests(self) -> Vec<RecordedRequestBody> {
        self.requests.lock().clone()
    }
}

/// Creates a client talking to the given mock server.
pub fn client_for(server: &mockito::Server) -> anyhow::Result<InstruqtClient> {
    let cfg = InstruqtClientConfig {
        endpoint: format!("{}/graphql", server.url()),
        ..Default::default()
    };

    Ok(InstruqtClient::new(TOKEN, TEAM, cfg)?)
}
