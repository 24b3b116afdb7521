//! Features layer - one module per slice of the site
//!
//! Each feature owns its models, DTOs, service, handlers and routes.

pub mod auth;
pub mod categories;
pub mod messages;
pub mod pages;
pub mod products;
pub mod site;
pub mod users;
