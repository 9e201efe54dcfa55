pub mod payment;
pub mod purchase;
