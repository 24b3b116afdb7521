//! Editable page copy (home, about, contact, and any other slug).

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PageService;
