//! Session-related types.
//!
//! A [`ShopSession`] exists only while someone is logged in (as a user or as a
//! guest). Logging out removes it entirely, so every login starts from a fresh
//! one: the catalog tab and an empty query.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shoe_shop_core::{Capabilities, Role};

use crate::catalog::{CatalogQuery, FilterModel};
use crate::models::User;

/// Top-level navigation tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Catalog,
    Orders,
    Pickup,
}

impl Tab {
    /// Every tab, in navigation order.
    pub const ALL: [Self; 3] = [Self::Catalog, Self::Orders, Self::Pickup];

    /// Machine-readable tab name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Orders => "orders",
            Self::Pickup => "pickup",
        }
    }

    /// URL path that renders this tab.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Catalog => "/catalog",
            Self::Orders => "/orders",
            Self::Pickup => "/pickup",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Catalog => "Каталог",
            Self::Orders => "Заказы",
            Self::Pickup => "Пункты выдачи",
        }
    }

    /// Whether a session with these capabilities may see and select this tab.
    #[must_use]
    pub const fn is_allowed(&self, capabilities: Capabilities) -> bool {
        match self {
            Self::Catalog | Self::Pickup => true,
            Self::Orders => capabilities.can_manage_orders,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tab selection refused by the visibility guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tab '{tab}' is not available to role '{role}'")]
pub struct TabRejected {
    pub tab: Tab,
    pub role: Role,
}

/// Logged-in session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSession {
    user: User,
    active_tab: Tab,
    /// Search text and structural filter for the catalog.
    pub query: CatalogQuery,
}

impl ShopSession {
    /// Start a session for a user on the catalog tab with an empty query.
    #[must_use]
    pub fn start(user: User, filter_model: FilterModel) -> Self {
        Self {
            user,
            active_tab: Tab::Catalog,
            query: CatalogQuery::for_model(filter_model),
        }
    }

    /// Start a guest session.
    #[must_use]
    pub fn guest(filter_model: FilterModel) -> Self {
        Self::start(crate::services::auth::enter_as_guest(), filter_model)
    }

    /// The session's user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// The session's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.user.role
    }

    /// Capabilities of the session's user.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.user.capabilities()
    }

    /// The currently displayed tab.
    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Tabs shown in navigation, in order.
    #[must_use]
    pub fn visible_tabs(&self) -> Vec<Tab> {
        crate::policy::visible_tabs(self.capabilities())
    }

    /// Switch tabs.
    ///
    /// # Errors
    ///
    /// Returns `TabRejected` (leaving the active tab unchanged) if the tab is
    /// not allowed for this session's role.
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), TabRejected> {
        if !tab.is_allowed(self.capabilities()) {
            return Err(TabRejected {
                tab,
                role: self.role(),
            });
        }
        self.active_tab = tab;
        Ok(())
    }

    /// Clear search text and structural filter.
    pub fn reset_filters(&mut self) {
        self.query.reset();
    }
}

/// Session keys for shop state.
pub mod keys {
    /// Key for the logged-in [`ShopSession`](super::ShopSession).
    pub const SHOP_SESSION: &str = "shop_session";

    /// Key for pending one-shot notices.
    pub const NOTICES: &str = "notices";
}
