//! User-facing notifications.
//!
//! The pages surface short transient messages for cart mutations, form
//! submissions, and checkout. Each notification carries a severity kind
//! with a stable symbol so any front end can render it consistently.

use core::fmt;

use vetcare_core::Price;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Stable one-character symbol for rendering.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Info => "i",
            Self::Warning => "!",
        }
    }

    /// Lowercase label, e.g. for log fields.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// A short transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// Create a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// Create an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Create an info notification.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    /// Create a warning notification.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.symbol(), self.message)
    }
}

// =============================================================================
// Cart & Checkout Messages
// =============================================================================

/// Notification for a product added to the cart.
#[must_use]
pub fn item_added() -> Notification {
    Notification::success("Product added to cart")
}

/// Notification for several units added at once.
#[must_use]
pub fn items_added(quantity: u32) -> Notification {
    Notification::success(format!("{quantity} product(s) added to cart"))
}

/// Notification for a product removed from the cart.
#[must_use]
pub fn item_removed() -> Notification {
    Notification::info("Product removed from cart")
}

/// Notification for a cleared cart.
#[must_use]
pub fn cart_cleared() -> Notification {
    Notification::info("Cart emptied")
}

/// Notification for an unknown product id.
#[must_use]
pub fn product_not_found() -> Notification {
    Notification::error("Product not found")
}

/// Notification for checkout attempted on an empty cart.
#[must_use]
pub fn cart_empty() -> Notification {
    Notification::error("Your cart is empty")
}

/// Notification announcing the simulated checkout.
#[must_use]
pub fn checkout_processing(item_count: u32, total: Price) -> Notification {
    Notification::success(format!(
        "Processing order of {item_count} product(s) for {total}"
    ))
}
