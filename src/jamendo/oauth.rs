use chrono::Utc;
use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::{
    error::{JamendoError, Result},
    jamendo::{client::Jamendo, params::Parameters},
    types::{GrantResponse, Token},
};

pub const AUTHORIZE_PATH: &str = "/oauth/authorize";
pub const GRANT_PATH: &str = "/oauth/grant";

impl Jamendo {
    /// URL of the page where the user grants the application access.
    ///
    /// Jamendo redirects back to `redirect_uri` with `code` and the same
    /// `state`, which the caller must check before calling [`Jamendo::grant`].
    pub fn authorize_url(&self, redirect_uri: &str, scope: &str, state: &str) -> Result<Url> {
        let params = Parameters::new()
            .with("redirect_uri", redirect_uri)
            .with("response_type", "code")
            .with("scope", scope)
            .with("state", state);

        let pairs: Vec<(String, String)> = params
            .normalize(self.client_id())?
            .into_iter()
            .filter(|(k, _)| k != "format")
            .collect();

        Url::parse_with_params(&self.url_for(AUTHORIZE_PATH), &pairs)
            .map_err(|e| JamendoError::Config(format!("invalid API url: {e}")))
    }

    /// Exchanges an authorization code for a token.
    pub async fn grant(&self, code: &str, redirect_uri: &str) -> Result<Token> {
        let params = Parameters::new()
            .with("grant_type", "authorization_code")
            .with("code", code)
            .with("redirect_uri", redirect_uri);
        self.token_request(params).await
    }

    /// Trades a refresh token for a fresh access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Token> {
        let params = Parameters::new()
            .with("grant_type", "refresh_token")
            .with("refresh_token", refresh_token);
        self.token_request(params).await
    }

    async fn token_request(&self, mut params: Parameters) -> Result<Token> {
        let secret = self
            .client_secret()
            .ok_or(JamendoError::MissingClientSecret)?;
        params.set("client_secret", secret);

        debug!("requesting token with {:?} grant", params.get("grant_type"));
        let body = self.send(Method::POST, GRANT_PATH, &params).await?;

        let grant: GrantResponse = serde_json::from_value(body)?;
        Ok(grant.into_token(Utc::now().timestamp() as u64))
    }
}
