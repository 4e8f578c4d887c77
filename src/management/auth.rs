use std::path::PathBuf;

use chrono::Utc;

use crate::{
    config,
    error::{JamendoError, Result},
    jamendo::Jamendo,
    types::Token,
};

/// Seconds before the real expiry at which a token is treated as expired.
const EXPIRY_MARGIN: u64 = 240;

pub struct TokenManager {
    token: Token,
    path: PathBuf,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        Self::with_path(token, Self::token_path())
    }

    /// Manager storing its token at `path` instead of the data directory.
    pub fn with_path(token: Token, path: PathBuf) -> Self {
        TokenManager { token, path }
    }

    pub async fn load() -> Result<Self> {
        Self::load_from(Self::token_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self> {
        let content = async_fs::read_to_string(&path).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token, path })
    }

    pub async fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Returns an access token that is not about to expire, refreshing and
    /// persisting it first when needed.
    pub async fn get_valid_token(&mut self, jamendo: &Jamendo) -> Result<String> {
        if self.is_expired() {
            if self.token.refresh_token.is_empty() {
                return Err(JamendoError::MissingAccessToken);
            }
            let new_token = jamendo.refresh(&self.token.refresh_token).await?;
            self.token = new_token;
            self.persist().await?;
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN >= self.token.obtained_at + self.token.expires_in
    }

    pub fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
