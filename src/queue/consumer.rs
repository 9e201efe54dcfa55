use crate::queue::purchase_queue::Delivery;
use crate::services::purchase_handler::{ProcessError, PurchaseEventHandler};
use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Drives the purchase handler from the message queue and applies the
/// channel's redelivery policy: malformed payloads are poison messages and
/// dead-letter immediately, everything else is redelivered up to the
/// configured attempt cap.
pub struct QueueConsumer {
    handler: Arc<PurchaseEventHandler>,
    redelivery: Sender<Delivery>,
    max_attempts: u32,
}

impl QueueConsumer {
    pub fn new(
        handler: Arc<PurchaseEventHandler>,
        redelivery: Sender<Delivery>,
        max_attempts: u32,
    ) -> Self {
        Self {
            handler,
            redelivery,
            max_attempts,
        }
    }

    pub async fn run(&self, mut receiver: Receiver<Delivery>, shutdown: CancellationToken) {
        info!("Starting purchase queue consumer");

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Queue consumer shutting down");
                    break;
                }
                delivery = receiver.recv() => {
                    let Some(delivery) = delivery else { break };
                    self.dispatch(delivery, &shutdown).await;
                }
            }
        }
    }

    async fn dispatch(&self, delivery: Delivery, shutdown: &CancellationToken) {
        let cancel = shutdown.child_token();
        let invocation = delivery.invocation.clone();

        match self
            .handler
            .process(&delivery.payload, &invocation, &cancel)
            .await
        {
            Ok(()) => {
                info!(
                    invocation_id = %invocation.invocation_id,
                    "Delivery acknowledged"
                );
            }
            Err(ProcessError::InvalidPayload(e)) => {
                // Redelivery cannot fix a malformed payload.
                error!(
                    invocation_id = %invocation.invocation_id,
                    "Poison message dead-lettered: {}", e
                );
            }
            Err(ProcessError::Cancelled) => {
                warn!(
                    invocation_id = %invocation.invocation_id,
                    "Delivery cancelled mid-flight; channel will redeliver on restart"
                );
            }
            Err(e) => {
                if invocation.attempt < self.max_attempts {
                    warn!(
                        invocation_id = %invocation.invocation_id,
                        attempt = invocation.attempt,
                        "Delivery failed, scheduling redelivery: {}", e
                    );
                    let redelivery = Delivery {
                        payload: delivery.payload,
                        invocation: invocation.next_attempt(),
                    };
                    // This task is the only reader of the queue, so awaiting
                    // a send here can never complete once the buffer is full.
                    let sender = self.redelivery.clone();
                    tokio::spawn(async move {
                        if sender.send(redelivery).await.is_err() {
                            error!("Redelivery queue closed, dropping message");
                        }
                    });
                } else {
                    error!(
                        invocation_id = %invocation.invocation_id,
                        attempt = invocation.attempt,
                        "Delivery exhausted {} attempts, dead-lettered: {}",
                        self.max_attempts, e
                    );
                }
            }
        }
    }
}
