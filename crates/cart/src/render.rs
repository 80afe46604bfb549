//! Renderer contract.
//!
//! The renderer is an external collaborator: after every successful
//! mutation the [`CartStore`](crate::CartStore) hands it the full current
//! cart state, and the renderer re-renders everything it shows (line
//! items, badge count, total). There is no incremental-diff contract.

use crate::store::Cart;

/// Receives the full cart state after every mutation.
pub trait Renderer {
    /// Re-render from the given cart state.
    fn refresh(&mut self, cart: &Cart);
}

/// A renderer that does nothing. Useful for tests and headless commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn refresh(&mut self, _cart: &Cart) {}
}
