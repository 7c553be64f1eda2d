//! Orders tab route handler (staff only).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::catalog::Order;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireShopSession;
use crate::models::Tab;
use crate::routes::{PageChrome, enter_tab};
use crate::state::AppState;

/// Orders page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersTemplate<'a> {
    pub chrome: PageChrome,
    pub orders: &'a [Order],
}

/// Display the orders tab.
///
/// Sessions without `can_manage_orders` are redirected to their still-active
/// tab and never see order data.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireShopSession(mut shop): RequireShopSession,
) -> Result<Response> {
    let Some(chrome) = enter_tab(&session, &mut shop, Tab::Orders).await? else {
        return Ok(Redirect::to(shop.active_tab().path()).into_response());
    };

    Ok(OrdersTemplate {
        chrome,
        orders: state.catalog().orders(),
    }
    .into_response())
}
