use cartsync_core::{CartDocument, CartPayload};
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::GatewayError;

/// Read/replace access to the single remote cart document.
#[async_trait::async_trait]
pub trait CartGateway: Send + Sync + 'static {
    async fn fetch_cart(&self) -> Result<CartPayload, GatewayError>;
    /// Full overwrite of the remote document. The response body is ignored.
    async fn write_cart(&self, payload: &CartPayload) -> Result<(), GatewayError>;
}

/// HTTP gateway: `GET` reads the document, `PUT` replaces it.
pub struct HttpCartGateway {
    client: Client,
    endpoint: Url,
}

impl HttpCartGateway {
    pub fn new(client: Client, endpoint: &str) -> Result<Self, GatewayError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| GatewayError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl CartGateway for HttpCartGateway {
    async fn fetch_cart(&self) -> Result<CartPayload, GatewayError> {
        debug!("GET {}", self.endpoint);
        let resp = self.client.get(self.endpoint.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("cart fetch from {} failed with {}", self.endpoint, status);
            return Err(GatewayError::Remote { status });
        }

        let bytes = resp.bytes().await?;
        // An endpoint that has never been written answers `null`.
        let doc: Option<CartDocument> = serde_json::from_slice(&bytes)?;
        let payload = CartPayload::from(doc.unwrap_or_default());
        debug!(
            "fetched cart: {} items, total quantity {}",
            payload.items.len(),
            payload.total_quantity
        );
        Ok(payload)
    }

    async fn write_cart(&self, payload: &CartPayload) -> Result<(), GatewayError> {
        debug!(
            "PUT {} ({} items, total quantity {})",
            self.endpoint,
            payload.items.len(),
            payload.total_quantity
        );
        let resp = self
            .client
            .put(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!("cart write to {} failed with {}", self.endpoint, status);
            return Err(GatewayError::Remote { status });
        }
        Ok(())
    }
}
