//! VetCare Cart - Persistent shopping cart store.
//!
//! The cart is an ordered collection of [`LineItem`]s, unique by product
//! id, owned by a [`CartStore`]. Every mutation runs to completion
//! synchronously: the in-memory state is updated, the full snapshot is
//! written to a [`SnapshotStore`] under [`STORAGE_KEY`], and a
//! [`Renderer`] is handed the fresh state for a full re-render.
//!
//! # Semantics
//!
//! - Repeated adds of the same id increment the quantity; the name and
//!   price captured by the first add win.
//! - A quantity driven to zero or below removes the item; items are never
//!   persisted at non-positive quantities.
//! - Clearing is a two-step command: [`CartStore::request_clear`] opens a
//!   confirmation gate (skipped entirely when the cart is empty) and
//!   [`CartStore::confirm_clear`] applies it.
//! - A failed snapshot write is recoverable: the in-memory cart remains
//!   authoritative and the error is surfaced to the caller.
//!
//! # Example
//!
//! ```
//! use vetcare_cart::{CartStore, MemoryStore, NullRenderer};
//! use vetcare_core::{Price, ProductId};
//!
//! let mut store = CartStore::load(MemoryStore::default(), NullRenderer);
//! store.add(ProductId::new("1"), "Adult Dog Food 15kg", Price::from_whole(45))?;
//! store.add(ProductId::new("1"), "Adult Dog Food 15kg", Price::from_whole(45))?;
//! assert_eq!(store.item_count(), 2);
//! assert_eq!(store.total(), Price::from_whole(90));
//! # Ok::<(), vetcare_cart::CartError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod item;
pub mod render;
pub mod storage;
pub mod store;

pub use error::CartError;
pub use item::LineItem;
pub use render::{NullRenderer, Renderer};
pub use storage::{FileStore, MemoryStore, SnapshotStore, StorageError};
pub use store::{Cart, CartStore, QuantityOutcome};

/// Fixed key the cart snapshot is stored under.
pub const STORAGE_KEY: &str = "vetcare_cart";
