use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::debug;

use crate::{
    api,
    error::{JamendoError, Result},
    jamendo::Jamendo,
    types::OAuthState,
};

pub fn router(jamendo: Jamendo, state: Arc<Mutex<Option<OAuthState>>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(state))
        .layer(Extension(jamendo))
}

/// Binds the callback server to `addr`.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| JamendoError::Config(format!("invalid server address {addr}: {e}")))?;
    Ok(TcpListener::bind(&addr).await?)
}

/// Serves the callback routes until the task is dropped.
pub async fn start_api_server(
    listener: TcpListener,
    jamendo: Jamendo,
    state: Arc<Mutex<Option<OAuthState>>>,
) -> Result<()> {
    debug!("callback server listening on {:?}", listener.local_addr());
    axum::serve(listener, router(jamendo, state)).await?;
    Ok(())
}
