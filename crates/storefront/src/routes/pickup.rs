//! Pickup points tab route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::catalog::PickupPoint;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireShopSession;
use crate::models::Tab;
use crate::routes::{PageChrome, enter_tab};
use crate::state::AppState;

/// Pickup points page template.
#[derive(Template, WebTemplate)]
#[template(path = "pickup/index.html")]
pub struct PickupTemplate<'a> {
    pub chrome: PageChrome,
    pub points: &'a [PickupPoint],
}

/// Display the pickup points tab.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireShopSession(mut shop): RequireShopSession,
) -> Result<Response> {
    let Some(chrome) = enter_tab(&session, &mut shop, Tab::Pickup).await? else {
        return Ok(Redirect::to(shop.active_tab().path()).into_response());
    };

    Ok(PickupTemplate {
        chrome,
        points: state.catalog().pickup_points(),
    }
    .into_response())
}
