/// Classifies the failure behind an [`InstruqtClientError`].
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {status}: {body}")]
    HttpStatus { status: reqwest::StatusCode, body: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("GraphQL error: {}", .0.message)]
    GraphQLError(cynic::GraphQlError),
    #[error("no data returned")]
    NoData,
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("invalid API token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
    #[error("invalid team public key: {0}")]
    InvalidPublicKey(String),
    #[error("encryption failed: {0}")]
    Encryption(#[from] rsa::Error),
    #[cfg(any(test, feature = "testing"))]
    #[error("mock executor: {0}")]
    MockClientError(String),
}

/// Error returned by every [`InstruqtClient`](crate::InstruqtClient) operation.
#[derive(Debug, thiserror::Error)]
pub enum InstruqtClientError {
    /// The error of a nested call, prefixed with the operation that issued it.
    #[error("[{operation}] {source}")]
    Operation {
        operation: &'static str,
        source: Box<InstruqtClientError>,
    },
    #[error(transparent)]
    Kind(#[from] ErrorKind),
}

impl InstruqtClientError {
    /// Returns the underlying [`ErrorKind`], skipping all operation prefixes.
    pub fn kind(&self) -> &ErrorKind {
        match self {
            Self::Operation { source, .. } => source.kind(),
            Self::Kind(kind) => kind,
        }
    }

    /// Returns the outermost operation name, if any.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Operation { operation, .. } => Some(operation),
            Self::Kind(_) => None,
        }
    }
}

impl From<reqwest::Error> for InstruqtClientError {
    fn from(value: reqwest::Error) -> Self {
        ErrorKind::from(value).into()
    }
}

impl From<serde_json::Error> for InstruqtClientError {
    fn from(value: serde_json::Error) -> Self {
        ErrorKind::from(value).into()
    }
}

pub type Result<T> = std::result::Result<T, InstruqtClientError>;

/// Prefixes errors with the name of the operation that produced them.
pub(crate) trait OperationContext<T> {
    fn context(self, operation: &'static str) -> Result<T>;
}

impl<T, E: Into<InstruqtClientError>> OperationContext<T> for std::result::Result<T, E> {
    fn context(self, operation: &'static str) -> Result<T> {
        self.map_err(|error| InstruqtClientError::Operation {
            operation,
            source: Box::new(error.into()),
        })
    }
}
