//! CMS account management (super admin only).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/admin/users` | List accounts |
//! | POST | `/api/admin/users` | Create an account |
//! | PUT | `/api/admin/users/{id}` | Edit an account / reset its password |
//! | DELETE | `/api/admin/users/{id}` | Delete an account (never yourself) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
