use anyhow::Result;
use fcg_payment_worker::app::config::Config;
use fcg_payment_worker::queue::{create_queue, Delivery, QueueConsumer};
use fcg_payment_worker::services::{HttpPaymentGatewayClient, PurchaseEventHandler};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env();
    info!(
        "Starting payment worker against gateway {}",
        config.gateway_base_url
    );

    let gateway = Arc::new(HttpPaymentGatewayClient::new(&config));
    let handler = Arc::new(PurchaseEventHandler::new(gateway));
    let (sender, receiver) = create_queue(config.queue_buffer_size);
    let shutdown = CancellationToken::new();

    // Consumer task
    let consumer_task = tokio::spawn({
        let consumer = QueueConsumer::new(handler, sender.clone(), config.max_delivery_attempts);
        let shutdown = shutdown.clone();
        async move {
            consumer.run(receiver, shutdown).await;
        }
    });

    // Feed task: one raw JSON payload per stdin line
    tokio::spawn({
        let sender = sender.clone();
        async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) if !line.trim().is_empty() => {
                        if sender.send(Delivery::new(line)).await.is_err() {
                            break;
                        }
                    }
                    Ok(Some(_)) => {}
                    Ok(None) => break,
                    Err(e) => {
                        error!("Failed to read payload from stdin: {}", e);
                        break;
                    }
                }
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    shutdown.cancel();
    drop(sender);

    consumer_task.await?;
    Ok(())
}
