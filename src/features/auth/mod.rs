//! CMS login and the current session.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/login` | No | Log in with username and password |
//! | POST | `/api/auth/logout` | Session | End the current session |
//! | GET | `/api/auth/me` | Session | Current session user |

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use services::AuthService;
