//! Cart route handlers.
//!
//! The demo has no cart contents: adding a product only confirms the action
//! with a notice. The action is gated on the session's purchase capability.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use shoe_shop_core::ProductId;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::{RequireShopSession, push_notice};
use crate::models::{Notice, Tab};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// Add a product to the cart.
///
/// Guests get 403 and no notice; unknown products get 404.
#[instrument(skip(state, session, shop))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    RequireShopSession(shop): RequireShopSession,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    if !shop.capabilities().can_purchase {
        return Err(AppError::Forbidden(format!(
            "role '{}' cannot purchase",
            shop.role()
        )));
    }

    let product = state
        .catalog()
        .product(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product", product.name.as_str())]),
    );
    tracing::info!(product = %product.name, login = %shop.user().login, "Added to cart");

    push_notice(&session, Notice::added_to_cart()).await?;
    Ok(Redirect::to(Tab::Catalog.path()))
}
