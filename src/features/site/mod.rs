//! Localized public views.
//!
//! Each endpoint takes `?lang=en|zh` (default `en`) and returns text already
//! resolved to that language, falling back to English for empty values.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/site/home` | Home copy + featured products |
//! | GET | `/api/site/about` | About page |
//! | GET | `/api/site/contact` | Contact page |
//! | GET | `/api/site/products` | Catalog, `?category=` selects a category |
//! | GET | `/api/site/products/{id}` | Product detail |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::SiteService;
