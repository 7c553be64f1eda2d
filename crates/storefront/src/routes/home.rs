//! Root and health check handlers.

use axum::response::{IntoResponse, Redirect};

use crate::middleware::{LOGIN_PATH, OptionalShopSession};

/// Send the visitor to their active tab, or to the login page.
pub async fn home(OptionalShopSession(shop): OptionalShopSession) -> impl IntoResponse {
    let target = shop.map_or(LOGIN_PATH, |shop| shop.active_tab().path());
    Redirect::to(target)
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
