use std::{collections::VecDeque, sync::Arc};

use cynic::GraphQlResponse;
use serde::{Serialize, de::DeserializeOwned};

use super::{GraphQlExecutor, response_to_data};
use crate::errors::{ErrorKind, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// An operation as seen by the [`MockExecutor`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedOperation {
    pub kind: OperationKind,
    pub query: String,
    pub variables: serde_json::Value,
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<serde_json::Value>,
    operations: Vec<RecordedOperation>,
}

/// [`GraphQlExecutor`] for testing purposes.
///
/// Replays queued GraphQL responses in order and records every operation it
/// receives, so tests can assert on call counts and forwarded variables
/// without a server. Clones share the same queue and recording.
#[derive(Clone, Debug, Default)]
pub struct MockExecutor {
    state: Arc<parking_lot::Mutex<MockState>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response carrying the given `data` object.
    pub fn with_data(self, data: serde_json::Value) -> Self {
        self.push_response(serde_json::json!({ "data": data }));
        self
    }

    /// Queues a raw GraphQL response, e.g. one carrying `errors`.
    pub fn with_response(self, response: serde_json::Value) -> Self {
        self.push_response(response);
        self
    }

    pub fn push_response(&self, response: serde_json::Value) {
        self.state.lock().responses.push_back(response);
    }

    /// Returns all operations received so far.
    pub fn operations(&self) -> Vec<RecordedOperation> {
        self.state.lock().operations.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().operations.len()
    }

    fn execute<Q, V>(&self, kind: OperationKind, op: cynic::Operation<Q, V>) -> Result<Q>
    where
        Q: DeserializeOwned,
        V: Serialize,
    {
        let mut serialized = serde_json::to_value(&op)?;
        let operation = RecordedOperation {
            kind,
            query: op.query,
            variables: serialized
                .get_mut("variables")
                .map(serde_json::Value::take)
                .unwrap_or_default(),
        };
        tracing::debug!(?operation, "mock executor received operation");

        let response = {
            let mut state = self.state.lock();
            state.operations.push(operation);
            state.responses.pop_front()
        }
        .ok_or_else(|| ErrorKind::MockClientError("no response queued".into()))?;

        response_to_data(serde_json::from_value::<GraphQlResponse<Q>>(response)?)
    }
}

#[async_trait::async_trait]
impl GraphQlExecutor for MockExecutor {
    async fn query<Q, V>(&self, op: cynic::Operation<Q, V>) -> Result<Q>
    where
        Q: DeserializeOwned + Send + 'static,
        V: Serialize + Send + 'static,
    {
        self.execute(OperationKind::Query, op)
    }

    async fn mutate<Q, V>(&self, op: cynic::Operation<Q, V>) -> Result<Q>
    where
        Q: DeserializeOwned + Send + 'static,
        V: Serialize + Send + 'static,
    {
        self.execute(OperationKind::Mutation, op)
    }
}
