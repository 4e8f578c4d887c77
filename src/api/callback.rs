use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{jamendo::Jamendo, types::OAuthState, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(jamendo): Extension<Jamendo>,
    Extension(shared_state): Extension<Arc<Mutex<Option<OAuthState>>>>,
) -> Html<&'static str> {
    if let Some(reason) = params.get("error") {
        warning!("Authorization denied: {}", reason);
        return Html("<h4>Authorization denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let (expected_state, redirect_uri) = {
        let state = shared_state.lock().await;
        let Some(pending) = state.as_ref() else {
            return Html("<h4>No authorization in progress.</h4>");
        };

        // Jamendo echoes the state we sent; anything else is not our request.
        if params.get("state") != Some(&pending.state) {
            warning!("Ignoring callback with unexpected state");
            return Html("<h4>State mismatch.</h4>");
        }
        (pending.state.clone(), pending.redirect_uri.clone())
    };

    let token = match jamendo.grant(code, &redirect_uri).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return Html("<h4>Login failed.</h4>");
        }
    };

    let mut state = shared_state.lock().await;
    match state.as_mut() {
        Some(pending) if pending.state == expected_state => {
            pending.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>You can close this window.</p>")
        }
        _ => {
            warning!("Authorization was reset while the code was being exchanged");
            Html("<h4>Login failed.</h4>")
        }
    }
}
