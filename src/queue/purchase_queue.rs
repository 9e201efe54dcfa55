use tokio::sync::mpsc::{self, Receiver, Sender};
use uuid::Uuid;

/// Per-invocation metadata supplied by the channel runtime.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub invocation_id: Uuid,
    pub attempt: u32,
}

impl InvocationContext {
    pub fn new() -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            attempt: 1,
        }
    }

    /// Context for a redelivery of the same message.
    pub fn next_attempt(&self) -> Self {
        Self {
            invocation_id: self.invocation_id,
            attempt: self.attempt + 1,
        }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// One message as handed to the consumer: the raw payload plus the
/// invocation metadata the runtime attaches to it.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub payload: String,
    pub invocation: InvocationContext,
}

impl Delivery {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            invocation: InvocationContext::new(),
        }
    }
}

pub fn create_queue(buffer: usize) -> (Sender<Delivery>, Receiver<Delivery>) {
    mpsc::channel(buffer)
}
