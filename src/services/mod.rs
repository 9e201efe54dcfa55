pub mod gateway_client;
pub mod purchase_handler;

pub use gateway_client::{GatewayError, HttpPaymentGatewayClient, PaymentGatewayClient};
pub use purchase_handler::{ProcessError, PurchaseEventHandler};
