//! Shop roles and the capabilities they grant.
//!
//! The role set is closed: every decision about what a session may see or do
//! is an exhaustive `match` on [`Role`], so adding a role forces every call
//! site to be revisited.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown role name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct RoleError(pub String);

/// Shop user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Anonymous visitor who skipped the login form.
    Guest,
    /// Registered customer.
    Client,
    /// Store manager.
    Manager,
    /// Store administrator.
    Admin,
}

impl Role {
    /// Every role, in ascending order of privilege.
    pub const ALL: [Self; 4] = [Self::Guest, Self::Client, Self::Manager, Self::Admin];

    /// Machine-readable role name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Client => "client",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    /// Human-readable role label shown in the header badge.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Guest => "Гость",
            Self::Client => "Клиент",
            Self::Manager => "Менеджер",
            Self::Admin => "Администратор",
        }
    }

    /// Capabilities granted to this role.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        Capabilities::for_role(*self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Self::Guest),
            "client" => Ok(Self::Client),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            _ => Err(RoleError(s.to_owned())),
        }
    }
}

/// Permissions derived from a [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    /// Search box and structural filter controls are shown and applied.
    pub can_use_filters: bool,
    /// The orders tab is listed and reachable.
    pub can_manage_orders: bool,
    /// The add-to-cart action is offered.
    pub can_purchase: bool,
}

impl Capabilities {
    /// Compute the capabilities for a role.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        let staff = match role {
            Role::Guest | Role::Client => false,
            Role::Manager | Role::Admin => true,
        };
        let can_purchase = match role {
            Role::Guest => false,
            Role::Client | Role::Manager | Role::Admin => true,
        };

        Self {
            can_use_filters: staff,
            can_manage_orders: staff,
            can_purchase,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_and_orders_are_granted_together() {
        for role in Role::ALL {
            let caps = role.capabilities();
            assert_eq!(caps.can_manage_orders, caps.can_use_filters, "{role}");
        }
    }

    #[test]
    fn test_only_guest_cannot_purchase() {
        assert!(!Role::Guest.capabilities().can_purchase);
        assert!(Role::Client.capabilities().can_purchase);
        assert!(Role::Manager.capabilities().can_purchase);
        assert!(Role::Admin.capabilities().can_purchase);
    }

    #[test]
    fn test_staff_capabilities() {
        assert!(!Role::Guest.capabilities().can_use_filters);
        assert!(!Role::Client.capabilities().can_use_filters);
        assert!(Role::Manager.capabilities().can_use_filters);
        assert!(Role::Admin.capabilities().can_use_filters);
    }

    #[test]
    fn test_role_from_str_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert_eq!(
            "owner".parse::<Role>(),
            Err(RoleError("owner".to_string()))
        );
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Guest.label(), "Гость");
        assert_eq!(Role::Admin.label(), "Администратор");
    }

    #[test]
    fn test_role_serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"manager\"");
    }
}
