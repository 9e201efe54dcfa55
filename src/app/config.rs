use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub gateway_base_url: String,
    pub gateway_token: String,
    pub request_timeout_ms: u64,
    pub queue_buffer_size: usize,
    pub max_delivery_attempts: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gateway_base_url: env::var("GATEWAY_BASE_URL")
                .unwrap_or_else(|_| "http://payment-gateway:8080".to_string()),
            gateway_token: env::var("GATEWAY_TOKEN")
                .unwrap_or_else(|_| "123".to_string()),
            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            queue_buffer_size: env::var("QUEUE_BUFFER_SIZE")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap_or(1000),
            max_delivery_attempts: env::var("MAX_DELIVERY_ATTEMPTS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),
        }
    }
}
