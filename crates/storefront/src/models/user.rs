//! User domain types.

use serde::{Deserialize, Serialize};

use shoe_shop_core::{Capabilities, Login, Role};

/// Display name given to anonymous visitors.
pub const GUEST_NAME: &str = "Гость";

/// Login recorded for anonymous visitors.
pub const GUEST_LOGIN: &str = "guest";

/// An identified shop user (domain type).
///
/// Never carries credentials: those stay inside the authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account login.
    pub login: Login,
    /// Role granted to this user.
    pub role: Role,
    /// Display name shown in the header.
    pub name: String,
}

impl User {
    /// Create a user.
    #[must_use]
    pub fn new(login: Login, role: Role, name: impl Into<String>) -> Self {
        Self {
            login,
            role,
            name: name.into(),
        }
    }

    /// The anonymous guest user.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            login: Login::from_static(GUEST_LOGIN),
            role: Role::Guest,
            name: GUEST_NAME.to_owned(),
        }
    }

    /// Capabilities granted to this user.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.role.capabilities()
    }
}
