use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config, error,
    jamendo::Jamendo,
    management::TokenManager,
    server::{bind, start_api_server},
    success,
    types::{OAuthState, Token},
    utils, warning,
};

/// Runs the interactive OAuth login.
///
/// 1. Generates a random `state` and stores it in the shared state
/// 2. Starts the local callback server
/// 3. Opens the Jamendo authorize page in the browser
/// 4. Waits for the callback to exchange the code for a token
/// 5. Persists the token for later write requests
pub async fn auth(jamendo: Jamendo, shared_state: Arc<Mutex<Option<OAuthState>>>) {
    if jamendo.client_secret().is_none() {
        error!("JAMENDO_CLIENT_SECRET must be set to log in.");
    }

    let redirect_uri = config::jamendo_redirect_uri();
    let state = utils::generate_state();

    let auth_url = match jamendo.authorize_url(&redirect_uri, &config::jamendo_scope(), &state) {
        Ok(url) => url,
        Err(e) => error!("Cannot build authorization url: {}", e),
    };

    {
        let mut lock = shared_state.lock().await;
        *lock = Some(OAuthState {
            state,
            redirect_uri,
            token: None,
        });
    }

    let listener = match bind(&config::server_addr()).await {
        Ok(l) => l,
        Err(e) => error!("Failed to start callback server: {}", e),
    };

    let server_state = Arc::clone(&shared_state);
    let server_client = jamendo.clone();
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(listener, server_client, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state, Duration::from_secs(60)).await;
    server.abort();

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Polls the shared state once per second until the callback stored a token
/// or `max_wait` elapsed.
pub async fn wait_for_token(
    shared_state: Arc<Mutex<Option<OAuthState>>>,
    max_wait: Duration,
) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();
    let poll = Duration::from_secs(1).min(max_wait);

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|s| s.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(poll).await;
    }

    None
}
