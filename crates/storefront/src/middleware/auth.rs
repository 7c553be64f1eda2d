//! Session extractors for the logged-in shop state.
//!
//! A [`ShopSession`] is stored under a single session key while someone is
//! logged in (as a user or as a guest). Tab pages require it; the login page
//! only peeks at it.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{ShopSession, session_keys};

/// Path of the login page that unauthenticated requests are sent to.
pub const LOGIN_PATH: &str = "/auth/login";

/// Extractor that requires a logged-in shop session.
///
/// If nobody is logged in, returns a redirect to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireShopSession(shop): RequireShopSession,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", shop.user().name)
/// }
/// ```
pub struct RequireShopSession(pub ShopSession);

/// Error returned when a shop session is required but absent.
#[derive(Debug)]
pub enum SessionRejection {
    /// Redirect to the login page.
    RedirectToLogin,
    /// The session layer is not installed on this route.
    MissingLayer,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
            Self::MissingLayer => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireShopSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(SessionRejection::MissingLayer)?;

        let shop = load_shop_session(session)
            .await
            .ok_or(SessionRejection::RedirectToLogin)?;

        Ok(Self(shop))
    }
}

/// Extractor that optionally gets the logged-in shop session.
///
/// Unlike `RequireShopSession`, this does not reject the request when nobody
/// is logged in.
pub struct OptionalShopSession(pub Option<ShopSession>);

impl<S> FromRequestParts<S> for OptionalShopSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let shop = match parts.extensions.get::<Session>() {
            Some(session) => load_shop_session(session).await,
            None => None,
        };

        Ok(Self(shop))
    }
}

async fn load_shop_session(session: &Session) -> Option<ShopSession> {
    match session.get::<ShopSession>(session_keys::SHOP_SESSION).await {
        Ok(shop) => shop,
        Err(e) => {
            // An undecodable record is treated as logged out.
            tracing::warn!(error = %e, "Failed to load shop session");
            None
        }
    }
}

/// Store the shop session (after login or any state change).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_shop_session(
    session: &Session,
    shop: &ShopSession,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::SHOP_SESSION, shop).await
}

/// Remove the shop session entirely (logout).
///
/// The next login starts from a fresh [`ShopSession`].
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_shop_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<ShopSession>(session_keys::SHOP_SESSION)
        .await?;
    Ok(())
}
