//! # Jamendo API Client
//!
//! Thin client for the Jamendo v3 REST API. It builds requests against the
//! documented endpoints, normalizes their parameters and decodes the JSON
//! envelope the API answers with.
//!
//! ## Layout
//!
//! ```text
//! Application Layer (CLI, TokenManager)
//!          ↓
//! Jamendo client
//!     ├── catalog  (GET albums, artists, tracks, playlists, users, ...)
//!     ├── oauth    (authorize URL, code and refresh grants)
//!     └── user     (POST /setuser/* writes)
//!          ↓
//! request core (params normalization, retry, envelope decoding)
//!          ↓
//! HTTP Layer (reqwest, JSON / form bodies)
//! ```
//!
//! ## Parameters
//!
//! Every request goes through [`Parameters::normalize`]:
//! - `client_id` is always injected and `format` defaults to `json`
//! - list values are joined with a space, which ends up as `+` on the wire
//! - date ranges become `YYYY-MM-DD_YYYY-MM-DD`
//!
//! ## Errors
//!
//! Failures are either network-level ([`JamendoError::Network`]), which the
//! client retries when asked to, or API-level ([`JamendoError::Api`]) carrying
//! the code and message from the response headers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let jamendo = Jamendo::builder().client_id("83039c0d").retry(true).build()?;
//! let tracks = jamendo.tracks(Parameters::new().with("id", 245)).await?;
//! println!("{}", tracks.results[0]["name"]);
//! ```
//!
//! [`JamendoError::Network`]: crate::error::JamendoError::Network
//! [`JamendoError::Api`]: crate::error::JamendoError::Api

pub mod catalog;
pub mod client;
pub mod oauth;
pub mod params;
pub mod user;

pub use client::{Jamendo, JamendoBuilder, RetryPolicy};
pub use params::{ParamValue, Parameters};
