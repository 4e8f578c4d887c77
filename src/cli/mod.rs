//! # CLI Module
//!
//! Command implementations of the `jamendo` binary. Each command delegates to
//! the [`crate::jamendo`] client and handles progress feedback and error
//! presentation.
//!
//! ## Commands
//!
//! - [`auth`] - Interactive OAuth login, stores the token in the data directory
//! - [`catalog`] - Lists a catalog collection as a table or JSON
//! - [`query`] - Raw GET on any API path, printed as JSON
//! - [`user_action`] - Fan/favorite/like/dislike/myalbum writes with the stored token
//!
//! ## Usage Patterns
//!
//! ```bash
//! jamendo auth
//! jamendo tracks --param id=245
//! jamendo albums --param artist_name=Both --between 2008-01-01..2009-12-31
//! jamendo query artists/musicinfo --param id=5 --param lang=en
//! jamendo favorite 245
//! ```

mod auth;
mod catalog;
mod user;

pub use auth::auth;
pub use auth::wait_for_token;
pub use catalog::Resource;
pub use catalog::catalog;
pub use catalog::query;
pub use user::UserAction;
pub use user::user_action;
