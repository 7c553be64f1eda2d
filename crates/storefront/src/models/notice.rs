//! One-shot user-visible notices.
//!
//! Notices are queued in the session by an action and drained by the next
//! rendered page. They never feed back into shop state.

use serde::{Deserialize, Serialize};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// CSS modifier class for the notice banner.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Error => "notice--error",
            Self::Info => "notice--info",
        }
    }
}

/// A message shown once to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    /// Success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// Error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Greeting after a successful login.
    #[must_use]
    pub fn welcome(name: &str) -> Self {
        Self::success(format!("Добро пожаловать, {name}!"))
    }

    /// Failed login.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::error("Неверный логин или пароль")
    }

    /// Guest entry.
    #[must_use]
    pub fn guest_entry() -> Self {
        Self::info("Вход как гость")
    }

    /// Product added to cart.
    #[must_use]
    pub fn added_to_cart() -> Self {
        Self::success("Товар добавлен в корзину!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_message() {
        let notice = Notice::welcome("Анна Иванова");
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, "Добро пожаловать, Анна Иванова!");
    }

    #[test]
    fn test_severities() {
        assert_eq!(Notice::invalid_credentials().severity, Severity::Error);
        assert_eq!(Notice::guest_entry().severity, Severity::Info);
        assert_eq!(Notice::added_to_cart().severity.css_class(), "notice--success");
    }
}
