//! Configuration management for the Jamendo client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files: API credentials, the API location, OAuth settings
//! and the address of the local callback server.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{
    error::{JamendoError, Result},
    jamendo::{Jamendo, JamendoBuilder},
};

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str = "music";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Directory holding the `.env` file and the token cache.
///
/// - Linux: `~/.local/share/jamendo`
/// - macOS: `~/Library/Application Support/jamendo`
/// - Windows: `%LOCALAPPDATA%/jamendo`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("jamendo");
    path
}

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Creates the directory if needed. A missing `.env` file is not an error,
/// since every setting can also come from the process environment; a file
/// that exists but cannot be parsed is.
pub async fn load_env() -> Result<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map(|_| ())
        .map_err(|e| JamendoError::Config(format!("cannot load {}: {e}", path.display())))
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(JamendoError::Config(format!("{name} must be set"))),
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// `JAMENDO_CLIENT_ID`: application id from the Jamendo developer portal.
pub fn jamendo_client_id() -> Result<String> {
    required("JAMENDO_CLIENT_ID")
}

/// `JAMENDO_CLIENT_SECRET`: only needed for the OAuth token exchange.
///
/// Keep it out of logs and version control.
pub fn jamendo_client_secret() -> Option<String> {
    optional("JAMENDO_CLIENT_SECRET")
}

/// `JAMENDO_API_VERSION`, e.g. `v3.0`.
pub fn jamendo_api_version() -> Option<String> {
    optional("JAMENDO_API_VERSION")
}

/// `JAMENDO_API_URL`: full base URL, overrides protocol and version.
pub fn jamendo_api_url() -> Option<String> {
    optional("JAMENDO_API_URL")
}

/// `JAMENDO_REDIRECT_URI`: must match the one registered for the application.
pub fn jamendo_redirect_uri() -> String {
    optional("JAMENDO_REDIRECT_URI").unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string())
}

/// `JAMENDO_AUTH_SCOPE`, `music` unless set.
pub fn jamendo_scope() -> String {
    optional("JAMENDO_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string())
}

/// `JAMENDO_RETRY`: retry transient network failures (`true`, `1`, `yes`).
pub fn jamendo_retry() -> bool {
    optional("JAMENDO_RETRY")
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

/// `SERVER_ADDRESS`: where the OAuth callback server binds.
pub fn server_addr() -> String {
    optional("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string())
}

pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Builder pre-filled from the environment.
pub fn builder_from_env() -> Result<JamendoBuilder> {
    let mut builder = Jamendo::builder()
        .client_id(jamendo_client_id()?)
        .retry(jamendo_retry());

    if let Some(secret) = jamendo_client_secret() {
        builder = builder.client_secret(secret);
    }
    if let Some(version) = jamendo_api_version() {
        builder = builder.version(version);
    }
    if let Some(url) = jamendo_api_url() {
        builder = builder.base_url(url);
    }

    Ok(builder)
}

/// Client configured from the environment.
pub fn client() -> Result<Jamendo> {
    builder_from_env()?.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_data_dir_ends_with_app_name() {
        assert!(data_dir().ends_with("jamendo"));
    }
}
