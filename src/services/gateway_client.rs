use crate::app::config::Config;
use crate::models::payment::{PaymentCreationRequest, PaymentCreationResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Transport-level failure talking to the gateway. A business rejection is
/// not an error here: it arrives inside a 2xx body with `Sucesso = false`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("payment gateway returned HTTP {0}")]
    Status(StatusCode),
    #[error("payment gateway call cancelled")]
    Cancelled,
}

/// Capability the handler depends on to initiate a payment. One production
/// implementation over HTTP; tests substitute their own.
#[async_trait]
pub trait PaymentGatewayClient: Send + Sync {
    async fn create_payment(
        &self,
        request: &PaymentCreationRequest,
        cancel: &CancellationToken,
    ) -> Result<PaymentCreationResponse, GatewayError>;
}

pub struct HttpPaymentGatewayClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpPaymentGatewayClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.gateway_base_url.clone(),
            token: config.gateway_token.clone(),
        }
    }

    async fn send_request(
        &self,
        request: &PaymentCreationRequest,
    ) -> Result<PaymentCreationResponse, GatewayError> {
        let response = self
            .client
            .post(format!("{}/pagamentos", self.base_url))
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(
                "Gateway returned status {} for purchase {}",
                response.status(),
                request.compra_id
            );
            return Err(GatewayError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PaymentGatewayClient for HttpPaymentGatewayClient {
    async fn create_payment(
        &self,
        request: &PaymentCreationRequest,
        cancel: &CancellationToken,
    ) -> Result<PaymentCreationResponse, GatewayError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(GatewayError::Cancelled),
            result = self.send_request(request) => result,
        }
    }
}
