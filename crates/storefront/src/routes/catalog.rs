//! Catalog tab route handlers.
//!
//! The catalog page renders whatever the access policy allows for the
//! session's role. Filter mutations are plain form posts that update the
//! session's query and redirect back to the page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use shoe_shop_core::ShoeSize;

use crate::catalog::{FilterModel, SIZE_OPTIONS};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{RequireShopSession, save_shop_session};
use crate::models::{ShopSession, Tab};
use crate::policy::{self, PolicyOutput};
use crate::routes::{PageChrome, enter_tab};
use crate::state::AppState;

/// Longest search text kept in the session.
const MAX_SEARCH_LEN: usize = 100;

// =============================================================================
// Form Types
// =============================================================================

/// Search form data.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

/// Size toggle form data.
#[derive(Debug, Deserialize)]
pub struct SizeForm {
    pub size: String,
}

/// Category form data.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub category: String,
}

// =============================================================================
// Templates
// =============================================================================

/// A size checkbox.
pub struct SizeOption {
    pub size: ShoeSize,
    pub checked: bool,
}

/// A category choice.
pub struct CategoryOption {
    pub name: String,
    pub selected: bool,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate<'a> {
    pub chrome: PageChrome,
    pub output: PolicyOutput<'a>,
    pub search: String,
    /// Empty unless the size filter model is active.
    pub size_options: Vec<SizeOption>,
    /// Empty unless the category filter model is active.
    pub category_options: Vec<CategoryOption>,
    pub has_active_filters: bool,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the catalog tab.
#[instrument(skip(state, session, shop))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireShopSession(mut shop): RequireShopSession,
) -> Result<Response> {
    let Some(chrome) = enter_tab(&session, &mut shop, Tab::Catalog).await? else {
        return Ok(Redirect::to(shop.active_tab().path()).into_response());
    };

    let catalog = state.catalog();
    let output = policy::evaluate(shop.role(), &shop.query, catalog.products());

    let structural = &shop.query.structural;
    let size_options = match structural.model() {
        FilterModel::Sizes => SIZE_OPTIONS
            .into_iter()
            .map(|size| SizeOption {
                size,
                checked: structural.has_size(&size),
            })
            .collect(),
        FilterModel::Category => Vec::new(),
    };
    let category_options = match structural.model() {
        FilterModel::Category => catalog
            .categories()
            .into_iter()
            .map(|name| CategoryOption {
                name: name.to_owned(),
                selected: structural.category() == Some(name),
            })
            .collect(),
        FilterModel::Sizes => Vec::new(),
    };

    tracing::debug!(
        role = %shop.role(),
        matches = output.products.len(),
        "Rendering catalog"
    );

    Ok(CatalogTemplate {
        chrome,
        has_active_filters: !shop.query.is_empty(),
        search: shop.query.search.clone(),
        output,
        size_options,
        category_options,
    }
    .into_response())
}

/// Set the search text.
pub async fn search(
    session: Session,
    RequireShopSession(mut shop): RequireShopSession,
    Form(form): Form<SearchForm>,
) -> Result<Redirect> {
    require_filters(&shop)?;

    shop.query.search = form.q.chars().take(MAX_SEARCH_LEN).collect();
    add_breadcrumb("catalog", "Search", Some(&[("q", shop.query.search.as_str())]));

    save_and_return(&session, &shop).await
}

/// Toggle one size in the size filter.
pub async fn toggle_size(
    session: Session,
    RequireShopSession(mut shop): RequireShopSession,
    Form(form): Form<SizeForm>,
) -> Result<Redirect> {
    require_filters(&shop)?;

    let size = ShoeSize::parse(&form.size).map_err(|e| AppError::BadRequest(e.to_string()))?;
    if !shop.query.structural.toggle_size(size) {
        return Err(AppError::BadRequest("size filter is not enabled".to_string()));
    }

    save_and_return(&session, &shop).await
}

/// Select a category, or deselect it if it is already selected.
pub async fn select_category(
    State(state): State<AppState>,
    session: Session,
    RequireShopSession(mut shop): RequireShopSession,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect> {
    require_filters(&shop)?;

    let category = form.category.trim();
    if !state.catalog().categories().contains(&category) {
        return Err(AppError::BadRequest(format!("unknown category '{category}'")));
    }
    if !shop.query.structural.select_category(category) {
        return Err(AppError::BadRequest(
            "category filter is not enabled".to_string(),
        ));
    }

    save_and_return(&session, &shop).await
}

/// Clear the search text and structural filter.
pub async fn reset_filters(
    session: Session,
    RequireShopSession(mut shop): RequireShopSession,
) -> Result<Redirect> {
    require_filters(&shop)?;

    shop.reset_filters();

    save_and_return(&session, &shop).await
}

fn require_filters(shop: &ShopSession) -> Result<()> {
    if shop.capabilities().can_use_filters {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "role '{}' cannot use filters",
            shop.role()
        )))
    }
}

async fn save_and_return(session: &Session, shop: &ShopSession) -> Result<Redirect> {
    save_shop_session(session, shop).await?;
    Ok(Redirect::to(Tab::Catalog.path()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shoe_shop_core::{Login, Role};

    use super::*;
    use crate::models::User;

    fn session_for(role: Role) -> ShopSession {
        let user = User::new(Login::from_static("someone"), role, "Someone");
        ShopSession::start(user, FilterModel::Sizes)
    }

    #[test]
    fn test_require_filters() {
        assert!(require_filters(&session_for(Role::Manager)).is_ok());
        assert!(require_filters(&session_for(Role::Admin)).is_ok());
        assert!(matches!(
            require_filters(&session_for(Role::Client)),
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            require_filters(&session_for(Role::Guest)),
            Err(AppError::Forbidden(_))
        ));
    }
}
