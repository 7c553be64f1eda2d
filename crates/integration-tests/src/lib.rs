//! Integration tests for the shoe shop storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shoe-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth` - Login, guest entry and logout
//! - `tabs` - Tab visibility and the orders guard
//! - `catalog` - Filters, empty state and the purchase gate
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`.
//! [`TestContext`] plays the browser: it keeps the session cookie between
//! requests.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
};
use tower::ServiceExt;

use shoe_shop_storefront::{app, config::StorefrontConfig, state::AppState};

/// A browser-like client bound to one storefront instance.
pub struct TestContext {
    app: Router,
    cookie: Option<String>,
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Whether this is a redirect to `path`.
    #[must_use]
    pub fn redirects_to(&self, path: &str) -> bool {
        self.status.is_redirection() && self.location.as_deref() == Some(path)
    }

    /// Number of rendered product cards.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.body.matches("data-product-id=").count()
    }

    /// Whether the page renders the card for a product id.
    #[must_use]
    pub fn shows_product(&self, id: i32) -> bool {
        self.body.contains(&format!("data-product-id=\"{id}\""))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::with_config(StorefrontConfig::default())
    }
}

impl TestContext {
    /// A storefront with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A storefront with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the application state cannot be built.
    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        let state = AppState::new(config).expect("application state");
        Self {
            app: app(state),
            cookie: None,
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// Send a url-encoded form POST.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("valid request");
        self.send(request).await
    }

    /// Log in with a login and password.
    pub async fn login(&mut self, login: &str, password: &str) -> TestResponse {
        self.post_form("/auth/login", &[("login", login), ("password", password)])
            .await
    }

    /// Enter as a guest.
    pub async fn enter_as_guest(&mut self) -> TestResponse {
        self.post_form("/auth/guest", &[]).await
    }

    /// Log out.
    pub async fn logout(&mut self) -> TestResponse {
        self.post_form("/auth/logout", &[]).await
    }

    async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(COOKIE, cookie.parse().expect("valid cookie header"));
        }

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(set_cookie) = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
        {
            self.cookie = set_cookie.split(';').next().map(str::to_owned);
        }

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
