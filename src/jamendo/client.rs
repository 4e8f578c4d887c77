use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use crate::{
    error::{JamendoError, Result},
    jamendo::params::Parameters,
    types::{ApiResponse, ResponseHeaders},
};

pub const DEFAULT_PROTOCOL: &str = "https";
pub const DEFAULT_HOST: &str = "api.jamendo.com";
pub const DEFAULT_VERSION: &str = "v3.0";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("jamendo-rs/", env!("CARGO_PKG_VERSION"));

/// How transient failures are retried.
///
/// The n-th retry waits `delay * n` before going out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    fn backoff(&self, attempt: u32) -> Duration {
        self.delay.checked_mul(attempt).unwrap_or(Duration::MAX)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

/// Client for the Jamendo API.
///
/// Cheap to clone: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Jamendo {
    http: Client,
    base_url: String,
    client_id: String,
    client_secret: Option<String>,
    retry: Option<RetryPolicy>,
}

impl Jamendo {
    /// Client with default settings: `https://api.jamendo.com/v3.0`, no retry.
    pub fn new(client_id: impl Into<String>) -> Result<Self> {
        Self::builder().client_id(client_id).build()
    }

    pub fn builder() -> JamendoBuilder {
        JamendoBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.retry
    }

    /// Sends a GET request to `path` with the normalized parameters and
    /// returns the response envelope.
    pub async fn request(&self, path: &str, params: Parameters) -> Result<ApiResponse> {
        let body = self.send(Method::GET, path, &params).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Sends a POST request with the normalized parameters as a form body.
    pub async fn post(&self, path: &str, params: Parameters) -> Result<ApiResponse> {
        let body = self.send(Method::POST, path, &params).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Builds the GET URL for `path` without sending anything.
    ///
    /// File and stream endpoints answer with a redirect to audio data, so the
    /// URL itself is what callers want.
    pub fn endpoint_url(&self, path: &str, params: &Parameters) -> Result<Url> {
        let pairs = params.normalize(&self.client_id)?;
        let url = Url::parse_with_params(&self.url_for(path), &pairs)
            .map_err(|e| JamendoError::Config(format!("invalid API url: {e}")))?;
        Ok(url)
    }

    pub(crate) fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request, retrying transient failures when a retry policy is
    /// set, and returns the decoded JSON body.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        params: &Parameters,
    ) -> Result<Value> {
        let pairs = params.normalize(&self.client_id)?;
        let url = self.url_for(path);
        let mut attempt: u32 = 0;

        loop {
            debug!("{} {} with {} params", method, url, pairs.len());

            let mut request = self.http.request(method.clone(), &url);
            request = if method == Method::GET {
                request.query(&pairs)
            } else {
                request.form(&pairs)
            };

            let retries_left = self
                .retry
                .map(|policy| attempt < policy.max_retries)
                .unwrap_or(false);

            let response = match request.send().await {
                Ok(resp) => resp,
                Err(err) => {
                    if retries_left && is_transient(&err) {
                        attempt += 1;
                        warn!("{} {} failed ({}), retry {}", method, url, err, attempt);
                        self.pause(attempt).await;
                        continue;
                    }
                    return Err(JamendoError::Network(err));
                }
            };

            let status = response.status();
            if retries_left && is_retryable_status(status) {
                attempt += 1;
                warn!("{} {} answered {}, retry {}", method, url, status, attempt);
                self.pause(attempt).await;
                continue;
            }

            let text = response.text().await?;
            return decode_body(status, &text);
        }
    }

    async fn pause(&self, attempt: u32) {
        if let Some(policy) = self.retry {
            sleep(policy.backoff(attempt)).await;
        }
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.is_request()
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT
    )
}

/// Turns a raw response into JSON, surfacing API failures as errors.
pub(crate) fn decode_body(status: StatusCode, text: &str) -> Result<Value> {
    let json: Value = match serde_json::from_str(text) {
        Ok(json) => json,
        Err(e) => {
            if status.is_success() {
                return Err(JamendoError::Json(e));
            }
            return Err(JamendoError::Http {
                status: status.as_u16(),
                body: text.to_string(),
            });
        }
    };

    if let Some(headers) = json.get("headers") {
        if let Ok(headers) = serde_json::from_value::<ResponseHeaders>(headers.clone()) {
            if headers.is_failed() {
                warn!(
                    "Jamendo API error ({}): {}",
                    headers.code, headers.error_message
                );
                return Err(JamendoError::Api {
                    code: headers.code,
                    message: headers.error_message,
                });
            }
        }
    }

    // OAuth endpoints answer with a flat `error` object, usually on a 400.
    if let Some(error) = json.get("error").and_then(Value::as_str) {
        let message = json
            .get("error_description")
            .and_then(Value::as_str)
            .unwrap_or(error)
            .to_string();
        warn!("Jamendo OAuth error ({}): {}", error, message);
        return Err(JamendoError::Api { code: 0, message });
    }

    if !status.is_success() {
        return Err(JamendoError::Http {
            status: status.as_u16(),
            body: text.to_string(),
        });
    }

    Ok(json)
}

/// Builder for [`Jamendo`].
#[derive(Debug, Clone)]
pub struct JamendoBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    protocol: String,
    version: String,
    base_url: Option<String>,
    retry: Option<RetryPolicy>,
    timeout: Duration,
    user_agent: String,
    http: Option<Client>,
}

impl Default for JamendoBuilder {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            protocol: DEFAULT_PROTOCOL.to_string(),
            version: DEFAULT_VERSION.to_string(),
            base_url: None,
            retry: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http: None,
        }
    }
}

impl JamendoBuilder {
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// API version path segment, `v3.0` by default.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Replaces protocol, host and version with a full base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Turns retrying of transient failures on with the default policy, or off.
    pub fn retry(mut self, enabled: bool) -> Self {
        self.retry = enabled.then(RetryPolicy::default);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Uses an existing HTTP client; timeout and user agent are then ignored.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn build(self) -> Result<Jamendo> {
        let client_id = self
            .client_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(JamendoError::MissingClientId)?;

        let http = match self.http {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.timeout)
                .user_agent(self.user_agent)
                .build()?,
        };

        let base_url = match self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!(
                "{}://{}/{}",
                self.protocol, DEFAULT_HOST, self.version
            ),
        };

        Ok(Jamendo {
            http,
            base_url,
            client_id,
            client_secret: self.client_secret.filter(|s| !s.is_empty()),
            retry: self.retry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let jamendo = Jamendo::new("83039c0d").unwrap();
        assert_eq!(jamendo.base_url(), "https://api.jamendo.com/v3.0");
        assert_eq!(jamendo.client_id(), "83039c0d");
        assert!(jamendo.client_secret().is_none());
        assert!(jamendo.retry_policy().is_none());
    }

    #[test]
    fn test_builder_version_and_protocol() {
        let jamendo = Jamendo::builder()
            .client_id("abc")
            .protocol("http")
            .version("v3.1")
            .retry(true)
            .build()
            .unwrap();
        assert_eq!(jamendo.base_url(), "http://api.jamendo.com/v3.1");
        assert_eq!(jamendo.retry_policy(), Some(RetryPolicy::default()));
    }

    #[test]
    fn test_builder_requires_client_id() {
        let err = Jamendo::builder().build().unwrap_err();
        assert!(matches!(err, JamendoError::MissingClientId));

        let err = Jamendo::new("  ").unwrap_err();
        assert!(matches!(err, JamendoError::MissingClientId));
    }

    #[test]
    fn test_decode_failed_envelope() {
        let body = r#"{"headers":{"status":"failed","code":5,"error_message":"Invalid client_id","warnings":"","results_count":0},"results":[]}"#;
        let err = decode_body(StatusCode::OK, body).unwrap_err();
        match err {
            JamendoError::Api { code, message } => {
                assert_eq!(code, 5);
                assert_eq!(message, "Invalid client_id");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_non_json_error() {
        let err = decode_body(StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>").unwrap_err();
        assert!(matches!(err, JamendoError::Http { status: 500, .. }));

        let err = decode_body(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, JamendoError::Json(_)));
    }

    #[test]
    fn test_backoff_grows_linearly() {
        let policy = RetryPolicy::new(3, Duration::from_millis(100));
        assert_eq!(policy.backoff(1), Duration::from_millis(100));
        assert_eq!(policy.backoff(3), Duration::from_millis(300));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::new(3, Duration::MAX);
        assert_eq!(policy.backoff(1), Duration::MAX);
        assert_eq!(policy.backoff(2), Duration::MAX);
    }

    #[test]
    fn test_decode_oauth_error() {
        let body = r#"{"error":"invalid_grant","error_description":"Authorization code expired"}"#;
        let err = decode_body(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert!(matches!(
            err,
            JamendoError::Api { code: 0, ref message } if message == "Authorization code expired"
        ));

        let err = decode_body(StatusCode::UNAUTHORIZED, r#"{"error":"invalid_client"}"#).unwrap_err();
        assert!(matches!(
            err,
            JamendoError::Api { ref message, .. } if message == "invalid_client"
        ));
    }
}
