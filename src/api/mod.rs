//! # API Module
//!
//! HTTP endpoints served by the short-lived local server used during the
//! OAuth login.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the redirect from Jamendo's authorize page,
//!   checks the `state` value and exchanges the `code` for a token.
//! - [`health`] - Returns status and version, handy to check the server is up.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use jamendo::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
