//! Authentication route handlers.
//!
//! Handles login against the configured account directory, guest entry and
//! logout. A failed login re-renders the form with an error notice and leaves
//! any existing session untouched.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{
    LOGIN_PATH, OptionalShopSession, clear_shop_session, push_notice, save_shop_session,
    take_notices,
};
use crate::models::{Notice, ShopSession, Tab};
use crate::services::auth::{AuthError, demo_accounts};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub login: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// A demo account hint shown under the login form.
pub struct AccountHint {
    pub login: String,
    pub password: String,
    pub role_label: &'static str,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub notices: Vec<Notice>,
    /// Login to prefill after a failed attempt.
    pub login: String,
    pub hints: Vec<AccountHint>,
}

impl LoginTemplate {
    fn new(notices: Vec<Notice>, login: String) -> Self {
        let hints = demo_accounts()
            .into_iter()
            .map(|account| AccountHint {
                login: account.login.into_inner(),
                password: account.password.expose_secret().to_owned(),
                role_label: account.role.label(),
            })
            .collect();

        Self {
            notices,
            login,
            hints,
        }
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
///
/// Someone already logged in is sent back to their active tab.
pub async fn login_page(
    session: Session,
    OptionalShopSession(shop): OptionalShopSession,
) -> Result<Response> {
    if let Some(shop) = shop {
        return Ok(Redirect::to(shop.active_tab().path()).into_response());
    }

    let notices = take_notices(&session).await?;
    Ok(LoginTemplate::new(notices, String::new()).into_response())
}

/// Handle login form submission.
///
/// Success starts a fresh session on the catalog tab.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let login = form.login;
    let password = SecretString::from(form.password);

    match state.authenticator().authenticate(&login, &password) {
        Ok(user) => {
            // New identity, new session ID
            session.cycle_id().await?;

            let shop = ShopSession::start(user, state.filter_model());
            save_shop_session(&session, &shop).await?;
            push_notice(&session, Notice::welcome(&shop.user().name)).await?;
            set_sentry_user(shop.user().login.as_str(), shop.role().as_str());

            tracing::info!(login = %login, role = %shop.role(), "User logged in");
            Ok(Redirect::to(Tab::Catalog.path()).into_response())
        }
        Err(AuthError::NotFound) => {
            tracing::info!(login = %login, "Login failed");
            Ok(LoginTemplate::new(vec![Notice::invalid_credentials()], login).into_response())
        }
        Err(e) => Err(AppError::Internal(e.to_string())),
    }
}

/// Enter the shop as a guest.
pub async fn guest(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    session.cycle_id().await?;

    let shop = ShopSession::guest(state.filter_model());
    save_shop_session(&session, &shop).await?;
    push_notice(&session, Notice::guest_entry()).await?;
    set_sentry_user(shop.user().login.as_str(), shop.role().as_str());

    tracing::info!("Guest entered");
    Ok(Redirect::to(Tab::Catalog.path()))
}

// =============================================================================
// Logout
// =============================================================================

/// Handle logout.
///
/// Drops the shop session so the next login starts on the catalog tab with
/// no filters.
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_shop_session(&session).await?;
    clear_sentry_user();
    Ok(Redirect::to(LOGIN_PATH))
}
