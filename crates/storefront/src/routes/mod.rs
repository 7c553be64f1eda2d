//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Redirect to the active tab (or login)
//! GET  /health                    - Health check
//!
//! # Auth
//! GET  /auth/login                - Login page
//! POST /auth/login                - Login action
//! POST /auth/guest                - Enter as guest
//! POST /auth/logout               - Logout action
//!
//! # Catalog (requires a session)
//! GET  /catalog                   - Catalog tab
//! POST /catalog/search            - Set search text
//! POST /catalog/sizes/toggle      - Toggle one size
//! POST /catalog/category          - Select or deselect a category
//! POST /catalog/filters/reset     - Clear search and structural filter
//!
//! # Cart (requires purchase capability)
//! POST /cart/add                  - Add to cart
//!
//! # Other tabs (require a session)
//! GET  /orders                    - Orders tab (staff only)
//! GET  /pickup                    - Pickup points tab
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod home;
pub mod orders;
pub mod pickup;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::error::Result;
use crate::middleware::{save_shop_session, take_notices};
use crate::models::{Notice, ShopSession, Tab};
use crate::state::AppState;

/// Header data shared by every tab page.
pub struct PageChrome {
    pub user_name: String,
    pub role_label: &'static str,
    pub tabs: Vec<Tab>,
    pub active_tab: Tab,
    pub notices: Vec<Notice>,
}

impl PageChrome {
    /// Build the header for a session, with the notices to show once.
    #[must_use]
    pub fn new(shop: &ShopSession, notices: Vec<Notice>) -> Self {
        Self {
            user_name: shop.user().name.clone(),
            role_label: shop.role().label(),
            tabs: shop.visible_tabs(),
            active_tab: shop.active_tab(),
            notices,
        }
    }

    /// Whether a tab is the one being rendered.
    #[must_use]
    pub fn is_active(&self, tab: &Tab) -> bool {
        *tab == self.active_tab
    }
}

/// Make `tab` the active tab, persist the session and drain pending notices.
///
/// Returns `Ok(None)` when the tab is not allowed; the caller redirects to
/// the tab that is still active.
pub(crate) async fn enter_tab(
    session: &Session,
    shop: &mut ShopSession,
    tab: Tab,
) -> Result<Option<PageChrome>> {
    if let Err(rejected) = shop.select_tab(tab) {
        tracing::info!(
            tab = %rejected.tab,
            role = %rejected.role,
            "Tab selection rejected"
        );
        return Ok(None);
    }

    save_shop_session(session, shop).await?;
    let notices = take_notices(session).await?;
    Ok(Some(PageChrome::new(shop, notices)))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/guest", post(auth::guest))
        .route("/logout", post(auth::logout))
}

/// Create the catalog filter routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/search", post(catalog::search))
        .route("/sizes/toggle", post(catalog::toggle_size))
        .route("/category", post(catalog::select_category))
        .route("/filters/reset", post(catalog::reset_filters))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/add", post(cart::add))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(home::health))
        .nest("/auth", auth_routes())
        .route("/catalog", get(catalog::index))
        .nest("/catalog", catalog_routes())
        .nest("/cart", cart_routes())
        .route("/orders", get(orders::index))
        .route("/pickup", get(pickup::index))
}
