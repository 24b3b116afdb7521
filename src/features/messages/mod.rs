//! Contact form submissions (append-only).

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::MessageService;
