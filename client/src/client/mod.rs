mod challenges;
mod invites;
mod plays;
mod reviews;
mod sandboxes;
mod teams;
#[cfg(any(test, feature = "testing"))]
pub(crate) mod testing;
mod tracks;
mod transport;
mod users;

use std::time::Duration;

use cynic::GraphQlResponse;
use serde::{Serialize, de::DeserializeOwned};

use crate::errors::{ErrorKind, Result};

/// Production GraphQL endpoint of Instruqt.
pub const DEFAULT_ENDPOINT: &str = "https://play.instruqt.com/graphql";

/// Configuration for the [`InstruqtClient`].
#[derive(Clone, Debug, PartialEq, Eq, smart_default::SmartDefault)]
pub struct InstruqtClientConfig {
    /// GraphQL endpoint all operations are posted to.
    #[default(DEFAULT_ENDPOINT.into())]
    pub endpoint: String,
    /// Timeout applied to every request.
    #[default(Duration::from_secs(30))]
    pub timeout: Duration,
    #[default(format!("instruqt-client/{}", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
}

/// Executes typed GraphQL operations.
///
/// Implementations perform exactly one round trip per call and never retry.
#[async_trait::async_trait]
pub trait GraphQlExecutor: Send + Sync {
    async fn query<Q, V>(&self, op: cynic::Operation<Q, V>) -> Result<Q>
    where
        Q: DeserializeOwned + Send + 'static,
        V: Serialize + Send + 'static;

    async fn mutate<Q, V>(&self, op: cynic::Operation<Q, V>) -> Result<Q>
    where
        Q: DeserializeOwned + Send + 'static,
        V: Serialize + Send + 'static;
}

/// [`GraphQlExecutor`] posting operations to the Instruqt endpoint over HTTPS.
///
/// Clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpExecutor {
    http: reqwest::Client,
    endpoint: url::Url,
    timeout: Duration,
}

impl HttpExecutor {
    /// Creates an executor authenticating every request with the given API token.
    pub fn new(token: &str, cfg: &InstruqtClientConfig) -> Result<Self> {
        Ok(Self {
            http: transport::build_reqwest_client(token, &cfg.user_agent)?,
            endpoint: cfg.endpoint.parse().map_err(ErrorKind::from)?,
            timeout: cfg.timeout,
        })
    }

    /// Returns a copy of this executor with a different request timeout.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout,
            ..self.clone()
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    async fn execute<Q, V>(&self, op: cynic::Operation<Q, V>) -> Result<Q>
    where
        Q: DeserializeOwned,
        V: Serialize,
    {
        tracing::debug!(query = %op.query, "sending Instruqt operation");

        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .json(&op)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        tracing::trace!(%status, body = %String::from_utf8_lossy(body.as_ref()), "received Instruqt response");

        if !status.is_success() {
            return Err(ErrorKind::HttpStatus {
                status,
                body: String::from_utf8_lossy(body.as_ref()).into_owned(),
            }
            .into());
        }

        response_to_data(serde_json::from_slice::<GraphQlResponse<Q>>(&body)?)
    }
}

#[async_trait::async_trait]
impl GraphQlExecutor for HttpExecutor {
    async fn query<Q, V>(&self, op: cynic::Operation<Q, V>) -> Result<Q>
    where
        Q: DeserializeOwned + Send + 'static,
        V: Serialize + Send + 'static,
    {
        self.execute(op).await
    }

    async fn mutate<Q, V>(&self, op: cynic::Operation<Q, V>) -> Result<Q>
    where
        Q: DeserializeOwned + Send + 'static,
        V: Serialize + Send + 'static,
    {
        self.execute(op).await
    }
}

/// Client of the Instruqt GraphQL API, scoped to one team.
///
/// Every resource method performs its round trips sequentially and returns
/// the first error encountered. Absent identifiers short-circuit to an empty
/// result without touching the network.
#[derive(Clone, Debug)]
pub struct InstruqtClient<E = HttpExecutor> {
    executor: E,
    team_slug: String,
}

impl InstruqtClient<HttpExecutor> {
    /// Creates a new client for the given API token and team.
    pub fn new(token: &str, team_slug: impl Into<String>, cfg: InstruqtClientConfig) -> Result<Self> {
        Ok(Self {
            executor: HttpExecutor::new(token, &cfg)?,
            team_slug: team_slug.into(),
        })
    }

    /// Derives a client whose requests use a different timeout.
    ///
    /// The original client is left untouched.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            executor: self.executor.with_timeout(timeout),
            team_slug: self.team_slug.clone(),
        }
    }

    /// Returns the per-request timeout of this client.
    pub fn timeout(&self) -> Duration {
        self.executor.timeout()
    }
}

impl<E: GraphQlExecutor> InstruqtClient<E> {
    /// Creates a client on top of a custom executor.
    pub fn with_executor(executor: E, team_slug: impl Into<String>) -> Self {
        Self {
            executor,
            team_slug: team_slug.into(),
        }
    }

    /// Returns the slug of the team this client is scoped to.
    pub fn team_slug(&self) -> &str {
        &self.team_slug
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }
}

pub(crate) fn response_to_data<Q>(response: GraphQlResponse<Q>) -> Result<Q> {
    match (response.data, response.errors) {
        (Some(data), None) => Ok(data),
        (Some(data), Some(errors)) => {
            tracing::error!(?errors, "operation succeeded but errors were encountered");
            Ok(data)
        }
        (None, Some(errors)) => Err(errors
            .into_iter()
            .reduce(|mut acc, next_err| {
                acc.message += &format!("{}{}", if acc.message.is_empty() { "" } else { ", " }, next_err.message);

                if let Some(next_locs) = next_err.locations {
                    acc.locations.get_or_insert_default().extend(next_locs);
                }

                if let Some(next_paths) = next_err.path {
                    acc.path.get_or_insert_default().extend(next_paths);
                }

                acc
            })
            .map(ErrorKind::GraphQLError)
            .unwrap_or(ErrorKind::NoData)
            .into()),
        (None, None) => Err(ErrorKind::NoData.into()),
    }
}
