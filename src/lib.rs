pub mod app;
pub mod models;
pub mod queue;
pub mod services;
