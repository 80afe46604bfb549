//! Terminal rendering of cart state.
//!
//! [`TerminalRenderer`] is the site's implementation of the cart's
//! [`Renderer`] contract: after every mutation it receives the full cart
//! state and re-renders everything (line items, badge count, total). The
//! intermediate view structs keep formatting concerns out of the cart
//! crate.

use std::io::{self, Write};

use vetcare_cart::{Cart, LineItem, Renderer};

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price.to_string(),
            line_price: item.line_total().to_string(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// An empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: cart.total().to_string(),
            item_count: cart.item_count(),
        }
    }
}

/// Renders the cart to a terminal (or any writer, under test).
///
/// Write failures are swallowed: rendering is best-effort and must never
/// fail a cart mutation that has already been applied and persisted.
#[derive(Debug)]
pub struct TerminalRenderer<W = io::Stdout> {
    out: W,
}

impl TerminalRenderer {
    /// A renderer writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// A renderer writing to the given writer.
    pub const fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Consume the renderer and return its writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    fn render(&mut self, view: &CartView) -> io::Result<()> {
        if view.items.is_empty() {
            writeln!(self.out, "Your cart is empty.")?;
            return Ok(());
        }

        writeln!(self.out, "Cart ({} items)", view.item_count)?;
        for item in &view.items {
            writeln!(
                self.out,
                "  {} x {:<40} {:>8} each  {:>9}",
                item.quantity, item.name, item.price, item.line_price
            )?;
        }
        writeln!(self.out, "Total: {}", view.subtotal)?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn refresh(&mut self, cart: &Cart) {
        let view = CartView::from(cart);
        if let Err(e) = self.render(&view) {
            tracing::warn!(error = %e, "cart render failed");
        }
    }
}

/// Render a 0-5 rating as stars, e.g. `★★★★½ (4.5)`.
#[must_use]
pub fn render_stars(rating: f32) -> String {
    let rating = rating.clamp(0.0, 5.0);
    // Ratings are 0-5 in half-star steps; truncation is the point here.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full = rating.floor() as usize;
    let has_half = rating.fract() > f32::EPSILON;
    let empty = 5 - full - usize::from(has_half);

    let mut stars = "★".repeat(full);
    if has_half {
        stars.push('½');
    }
    stars.push_str(&"☆".repeat(empty));
    stars.push_str(&format!(" ({rating:.1})"));
    stars
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vetcare_cart::{CartStore, MemoryStore, NullRenderer};
    use vetcare_core::{Price, ProductId};

    fn populated_cart() -> Cart {
        let mut store = CartStore::load(MemoryStore::new(), NullRenderer);
        store
            .add(ProductId::new("1"), "Royal Canin Adult 15kg", Price::from_whole(45))
            .unwrap();
        store
            .add(ProductId::new("1"), "Royal Canin Adult 15kg", Price::from_whole(45))
            .unwrap();
        store
            .add(ProductId::new("4"), "LED Interactive Ball", Price::from_whole(18))
            .unwrap();
        store.cart().clone()
    }

    #[test]
    fn test_cart_view_mirrors_cart() {
        let view = CartView::from(&populated_cart());
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "$108.00");
        assert_eq!(view.items.len(), 2);

        let first = view.items.first().unwrap();
        assert_eq!(first.quantity, 2);
        assert_eq!(first.price, "$45.00");
        assert_eq!(first.line_price, "$90.00");
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::from(&Cart::new());
        assert_eq!(view, CartView::empty());
    }

    #[test]
    fn test_terminal_renderer_full_rerender() {
        let cart = populated_cart();
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.refresh(&cart);

        let output = String::from_utf8(renderer.into_writer()).unwrap();
        assert!(output.contains("Cart (3 items)"));
        assert!(output.contains("Royal Canin Adult 15kg"));
        assert!(output.contains("LED Interactive Ball"));
        assert!(output.contains("Total: $108.00"));
    }

    #[test]
    fn test_terminal_renderer_empty_cart() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.refresh(&Cart::new());

        let output = String::from_utf8(renderer.into_writer()).unwrap();
        assert_eq!(output, "Your cart is empty.\n");
    }

    #[test]
    fn test_render_stars() {
        assert_eq!(render_stars(4.5), "★★★★½ (4.5)");
        assert_eq!(render_stars(4.0), "★★★★☆ (4.0)");
        assert_eq!(render_stars(5.0), "★★★★★ (5.0)");
        assert_eq!(render_stars(0.0), "☆☆☆☆☆ (0.0)");
    }
}
