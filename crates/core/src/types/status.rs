//! Order status labels.
//!
//! Statuses are free-form labels: the demo does not enforce any transition
//! rules between them.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Order status label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    /// Label for an order still being processed.
    pub const PROCESSING: &'static str = "В обработке";
    /// Label for a delivered order.
    pub const DELIVERED: &'static str = "Доставлен";

    /// Create a status from any label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The status label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the delivered status (rendered with the primary badge).
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        self.0 == Self::DELIVERED
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_delivered() {
        assert!(OrderStatus::new(OrderStatus::DELIVERED).is_delivered());
        assert!(!OrderStatus::new(OrderStatus::PROCESSING).is_delivered());
        assert!(!OrderStatus::new("Отменён").is_delivered());
    }
}
