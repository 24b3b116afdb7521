//! Product catalog.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/products` | No | Catalog, `?category=` includes direct children |
//! | GET | `/api/products/{id}` | No | Product + category + display images |
//! | GET | `/api/admin/products` | Session | Search with `?q=` and exact `?category=` |
//! | POST | `/api/admin/products` | Session | Create |
//! | PUT | `/api/admin/products/{id}` | Session | Save at id |
//! | DELETE | `/api/admin/products/{id}` | Session | Delete |
//! | POST | `/api/admin/products/{id}/images` | Session | Upload gallery images (multipart) |
//! | DELETE | `/api/admin/products/{id}/images/{index}` | Session | Remove a gallery image |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
