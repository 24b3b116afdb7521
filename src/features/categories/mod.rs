//! Product categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | Flat list, or tree with `?tree=true` |
//! | GET | `/api/categories/{id}` | No | Single category |
//! | POST | `/api/admin/categories` | Session | Create |
//! | PUT | `/api/admin/categories/{id}` | Session | Save at id |
//! | DELETE | `/api/admin/categories/{id}` | Session | Delete (no cascade) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
