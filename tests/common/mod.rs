#![allow(dead_code)]

use async_trait::async_trait;
use fcg_payment_worker::models::payment::{PaymentCreationRequest, PaymentCreationResponse};
use fcg_payment_worker::services::{GatewayError, PaymentGatewayClient};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// What the stub gateway should do for every call.
pub enum StubBehavior {
    Respond(PaymentCreationResponse),
    FailStatus(StatusCode),
    BlockUntilCancelled,
}

/// Stand-in gateway client that records every request it receives.
pub struct StubGatewayClient {
    behavior: StubBehavior,
    calls: Mutex<Vec<PaymentCreationRequest>>,
}

impl StubGatewayClient {
    pub fn new(behavior: StubBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn rejecting(message: &str) -> Arc<Self> {
        Self::new(StubBehavior::Respond(PaymentCreationResponse {
            sucesso: false,
            mensagem: Some(message.to_string()),
            ..Default::default()
        }))
    }

    pub fn succeeding(pagamento_id: i64, status: &str) -> Arc<Self> {
        Self::new(StubBehavior::Respond(PaymentCreationResponse {
            sucesso: true,
            pagamento_id: Some(pagamento_id),
            status: Some(status.to_string()),
            ..Default::default()
        }))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn recorded_calls(&self) -> Vec<PaymentCreationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGatewayClient for StubGatewayClient {
    async fn create_payment(
        &self,
        request: &PaymentCreationRequest,
        cancel: &CancellationToken,
    ) -> Result<PaymentCreationResponse, GatewayError> {
        self.calls.lock().unwrap().push(request.clone());

        match &self.behavior {
            StubBehavior::Respond(response) => Ok(response.clone()),
            StubBehavior::FailStatus(status) => Err(GatewayError::Status(*status)),
            StubBehavior::BlockUntilCancelled => {
                cancel.cancelled().await;
                Err(GatewayError::Cancelled)
            }
        }
    }
}
