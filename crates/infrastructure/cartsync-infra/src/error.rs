#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("cart endpoint returned {status}")]
    Remote { status: reqwest::StatusCode },
    #[error("cart document is malformed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid cart endpoint {0}")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    Network,
    Remote,
    Codec,
    Config,
}

impl GatewayError {
    pub fn kind(&self) -> GatewayErrorKind {
        match self {
            GatewayError::Network(_) => GatewayErrorKind::Network,
            GatewayError::Remote { .. } => GatewayErrorKind::Remote,
            GatewayError::Decode(_) => GatewayErrorKind::Codec,
            GatewayError::InvalidEndpoint(_) => GatewayErrorKind::Config,
        }
    }
}
