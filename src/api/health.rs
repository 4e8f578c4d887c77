use std::sync::Arc;

use axum::{Extension, response::Json};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::types::OAuthState;

#[derive(Debug, Serialize)]
pub struct Health {
    service: &'static str,
    status: &'static str,
    version: &'static str,
    /// A login was started and no token has arrived yet.
    authorization_pending: bool,
}

pub async fn health(
    Extension(shared_state): Extension<Arc<Mutex<Option<OAuthState>>>>,
) -> Json<Health> {
    let authorization_pending = shared_state
        .lock()
        .await
        .as_ref()
        .is_some_and(|pending| pending.token.is_none());

    Json(Health {
        service: env!("CARGO_PKG_NAME"),
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        authorization_pending,
    })
}
