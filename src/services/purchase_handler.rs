use crate::models::payment::PaymentCreationRequest;
use crate::models::purchase::PurchaseCompletedEvent;
use crate::queue::purchase_queue::InvocationContext;
use crate::services::gateway_client::{GatewayError, PaymentGatewayClient};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Outcome of one handler invocation. Callers must be able to tell a payload
/// that never reached the gateway apart from a gateway rejection, so the
/// variants are never collapsed into one another.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("invalid purchase event payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("{0}")]
    PaymentRejected(String),
    #[error(transparent)]
    Gateway(GatewayError),
    #[error("purchase processing cancelled")]
    Cancelled,
}

/// Orchestrates one purchase-completed event: deserialize, build the payment
/// request, call the gateway exactly once, interpret the answer. Holds no
/// per-invocation state, so a single instance serves concurrent deliveries.
pub struct PurchaseEventHandler {
    gateway: Arc<dyn PaymentGatewayClient>,
}

impl PurchaseEventHandler {
    pub fn new(gateway: Arc<dyn PaymentGatewayClient>) -> Self {
        Self { gateway }
    }

    pub async fn process(
        &self,
        payload: &str,
        invocation: &InvocationContext,
        cancel: &CancellationToken,
    ) -> Result<(), ProcessError> {
        // Any parse failure aborts before the gateway is touched.
        let event: PurchaseCompletedEvent = serde_json::from_str(payload)?;

        info!(
            invocation_id = %invocation.invocation_id,
            attempt = invocation.attempt,
            "Processing purchase {} for user {}",
            event.compra_id,
            event.usuario_id
        );

        let request = PaymentCreationRequest::from(&event);

        if cancel.is_cancelled() {
            return Err(ProcessError::Cancelled);
        }

        let response = match self.gateway.create_payment(&request, cancel).await {
            Ok(response) => response,
            Err(GatewayError::Cancelled) => return Err(ProcessError::Cancelled),
            Err(e) => return Err(ProcessError::Gateway(e)),
        };

        if !response.sucesso {
            let message = response.mensagem.unwrap_or_default();
            warn!(
                invocation_id = %invocation.invocation_id,
                "Payment rejected for purchase {}: {}",
                event.compra_id,
                message
            );
            return Err(ProcessError::PaymentRejected(message));
        }

        info!(
            invocation_id = %invocation.invocation_id,
            "Payment created for purchase {} (pagamento {:?}, status {:?})",
            event.compra_id,
            response.pagamento_id,
            response.status
        );
        Ok(())
    }
}
