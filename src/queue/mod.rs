pub mod consumer;
pub mod purchase_queue;

pub use consumer::QueueConsumer;
pub use purchase_queue::{create_queue, Delivery, InvocationContext};
