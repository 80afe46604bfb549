//! Cart state and the persistent cart store.

use vetcare_core::{Price, ProductId};

use crate::STORAGE_KEY;
use crate::error::CartError;
use crate::item::LineItem;
use crate::render::Renderer;
use crate::storage::SnapshotStore;

/// Outcome of a quantity adjustment on a [`Cart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
    /// No item with the given id exists; nothing changed.
    NotFound,
    /// The quantity was adjusted and stayed positive.
    Adjusted,
    /// The quantity reached zero or below and the item was removed.
    Removed,
}

/// An ordered collection of line items, unique by product id.
///
/// `Cart` is pure state: no I/O, no rendering. Totals and counts are
/// recomputed on every call, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Add one unit of a product.
    ///
    /// If an item with the same id already exists its quantity is
    /// incremented and the supplied `name`/`price` are ignored: the
    /// snapshot captured by the first add wins. Otherwise a new line item
    /// is appended with quantity 1.
    pub fn add(&mut self, id: ProductId, name: &str, price: Price) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem::new(id, name, price));
        }
    }

    /// Remove the item with the given id. Returns whether anything was
    /// removed; an unknown id is a silent no-op, not an error.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Add `delta` (signed) to the quantity of the item with the given id.
    ///
    /// An unknown id changes nothing. A resulting quantity of zero or
    /// below removes the item, exactly as [`Cart::remove`] would.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> QuantityOutcome {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            return QuantityOutcome::NotFound;
        };

        let next = i64::from(item.quantity) + delta;
        if next <= 0 {
            self.remove(id);
            return QuantityOutcome::Removed;
        }

        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        QuantityOutcome::Adjusted
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity over all items. Pure read.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of all quantities (the badge count). Pure read.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The persistent cart store.
///
/// Owns the [`Cart`] together with its snapshot storage and renderer
/// handle; neither is reachable from outside except through these
/// operations. Every mutation is applied in memory first, then the full
/// snapshot is written under [`STORAGE_KEY`], then the renderer is handed
/// the fresh state. Operations are synchronous and run to completion
/// before the caller regains control.
pub struct CartStore<S, R> {
    cart: Cart,
    storage: S,
    renderer: R,
    pending_clear: bool,
}

impl<S: SnapshotStore, R: Renderer> CartStore<S, R> {
    /// Hydrate a store from the snapshot in `storage`, or start empty.
    ///
    /// A missing snapshot is the normal first-run case. A snapshot that
    /// cannot be read or parsed is discarded with a logged warning rather
    /// than failing startup.
    pub fn load(storage: S, renderer: R) -> Self {
        let cart = match storage.read(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<LineItem>>(&raw) {
                Ok(items) => {
                    tracing::debug!(items = items.len(), "hydrated cart snapshot");
                    Cart::from_items(items)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding corrupt cart snapshot");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read cart snapshot, starting empty");
                Cart::new()
            }
        };

        Self {
            cart,
            storage,
            renderer,
            pending_clear: false,
        }
    }

    /// Add one unit of a product (repeat adds increment the quantity; the
    /// first add's name and price win). Persists and signals the renderer.
    ///
    /// # Errors
    ///
    /// Returns a recoverable error if the snapshot write fails; the
    /// in-memory cart has already been updated.
    pub fn add(&mut self, id: ProductId, name: &str, price: Price) -> Result<(), CartError> {
        self.cart.add(id, name, price);
        self.pending_clear = false;
        self.commit()
    }

    /// Remove the item with the given id; an unknown id is a silent no-op.
    /// Persists and signals the renderer either way.
    ///
    /// # Errors
    ///
    /// Returns a recoverable error if the snapshot write fails; the
    /// in-memory cart has already been updated.
    pub fn remove(&mut self, id: &ProductId) -> Result<(), CartError> {
        self.cart.remove(id);
        self.pending_clear = false;
        self.commit()
    }

    /// Adjust the quantity of the item with the given id by `delta`.
    ///
    /// An unknown id changes nothing and neither persists nor signals.
    /// A quantity driven to zero or below removes the item.
    ///
    /// # Errors
    ///
    /// Returns a recoverable error if the snapshot write fails; the
    /// in-memory cart has already been updated.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> Result<(), CartError> {
        match self.cart.update_quantity(id, delta) {
            QuantityOutcome::NotFound => Ok(()),
            QuantityOutcome::Adjusted | QuantityOutcome::Removed => {
                self.pending_clear = false;
                self.commit()
            }
        }
    }

    /// Open the confirmation gate for clearing the cart.
    ///
    /// Returns `true` if confirmation is now pending. An empty cart skips
    /// the gate entirely and returns `false`: there is nothing to confirm.
    pub fn request_clear(&mut self) -> bool {
        if self.cart.is_empty() {
            return false;
        }
        self.pending_clear = true;
        true
    }

    /// Apply a previously requested clear.
    ///
    /// Returns `true` if the cart was cleared, `false` if no clear was
    /// pending (never requested, cancelled, or invalidated by an
    /// intervening mutation).
    ///
    /// # Errors
    ///
    /// Returns a recoverable error if the snapshot write fails; the
    /// in-memory cart has already been emptied.
    pub fn confirm_clear(&mut self) -> Result<bool, CartError> {
        if !self.pending_clear {
            return Ok(false);
        }
        self.pending_clear = false;
        self.cart.clear();
        self.commit()?;
        Ok(true)
    }

    /// Abandon a pending clear request.
    pub fn cancel_clear(&mut self) {
        self.pending_clear = false;
    }

    /// Whether a clear request is awaiting confirmation.
    #[must_use]
    pub const fn clear_pending(&self) -> bool {
        self.pending_clear
    }

    /// The current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum of price times quantity. Pure read, no side effects.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Sum of all quantities. Pure read, no side effects.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The snapshot storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist the snapshot, then signal the renderer.
    ///
    /// The renderer is signaled even when the write fails: the in-memory
    /// cart is authoritative and the view must reflect it. The failure is
    /// logged and returned for the caller to handle.
    fn commit(&mut self) -> Result<(), CartError> {
        let result = self.persist();
        if let Err(e) = &result {
            tracing::warn!(error = %e, "cart snapshot write failed, in-memory state kept");
        }
        self.renderer.refresh(&self.cart);
        result
    }

    fn persist(&mut self) -> Result<(), CartError> {
        let snapshot = serde_json::to_string(self.cart.items())?;
        self.storage.write(STORAGE_KEY, &snapshot)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;

    use super::*;
    use crate::render::NullRenderer;
    use crate::storage::{MemoryStore, StorageError};

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn store() -> CartStore<MemoryStore, NullRenderer> {
        CartStore::load(MemoryStore::new(), NullRenderer)
    }

    /// Counts renderer signals.
    #[derive(Default)]
    struct CountingRenderer {
        refreshes: usize,
        last_count: u32,
    }

    impl Renderer for CountingRenderer {
        fn refresh(&mut self, cart: &Cart) {
            self.refreshes += 1;
            self.last_count = cart.item_count();
        }
    }

    /// A store whose writes always fail.
    struct FailingStore;

    impl SnapshotStore for FailingStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(io::Error::other("disk full")))
        }
    }

    #[test]
    fn test_repeated_add_increments_and_pins_snapshot() {
        let mut store = store();
        store.add(id("1"), "Adult Dog Food 15kg", Price::from_whole(45)).unwrap();
        store.add(id("1"), "Renamed Later", Price::from_whole(99)).unwrap();
        store.add(id("1"), "Renamed Again", Price::from_whole(1)).unwrap();

        let item = store.cart().get(&id("1")).unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.name, "Adult Dog Food 15kg");
        assert_eq!(item.price, Price::from_whole(45));
    }

    #[test]
    fn test_counts_and_total_recompute() {
        let mut store = store();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        store.add(id("2"), "Toy", Price::from_whole(18)).unwrap();

        assert_eq!(store.item_count(), 3);
        assert_eq!(store.total(), Price::from_whole(108));

        store.update_quantity(&id("2"), 2).unwrap();
        assert_eq!(store.item_count(), 5);
        assert_eq!(store.total(), Price::from_whole(144));
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut store = store();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        store.add(id("2"), "Toy", Price::from_whole(18)).unwrap();

        store.update_quantity(&id("1"), -2).unwrap();
        assert!(store.cart().get(&id("1")).is_none());
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.total(), Price::from_whole(18));
    }

    #[test]
    fn test_update_quantity_matches_remove() {
        let mut via_update = store();
        via_update.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        via_update.add(id("2"), "Toy", Price::from_whole(18)).unwrap();
        via_update.update_quantity(&id("1"), -1).unwrap();

        let mut via_remove = store();
        via_remove.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        via_remove.add(id("2"), "Toy", Price::from_whole(18)).unwrap();
        via_remove.remove(&id("1")).unwrap();

        assert_eq!(via_update.cart(), via_remove.cart());
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut store = store();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        let before = store.cart().clone();

        store.update_quantity(&id("404"), 5).unwrap();
        assert_eq!(store.cart(), &before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = store();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        store.add(id("2"), "Toy", Price::from_whole(18)).unwrap();

        store.remove(&id("1")).unwrap();
        let after_first = store.cart().clone();
        store.remove(&id("1")).unwrap();
        assert_eq!(store.cart(), &after_first);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut store = store();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();

        assert!(store.request_clear());
        assert!(store.clear_pending());
        assert!(store.confirm_clear().unwrap());
        assert!(store.is_empty());
        assert_eq!(store.total(), Price::zero());
    }

    #[test]
    fn test_clear_on_empty_cart_skips_gate() {
        let mut store = store();
        assert!(!store.request_clear());
        assert!(!store.clear_pending());
        assert!(!store.confirm_clear().unwrap());
    }

    #[test]
    fn test_cancel_clear_keeps_items() {
        let mut store = store();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();

        assert!(store.request_clear());
        store.cancel_clear();
        assert!(!store.confirm_clear().unwrap());
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_mutation_invalidates_pending_clear() {
        let mut store = store();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();

        assert!(store.request_clear());
        store.add(id("2"), "Toy", Price::from_whole(18)).unwrap();
        assert!(!store.confirm_clear().unwrap());
        assert_eq!(store.items().len(), 2);
    }

    #[test]
    fn test_persist_reload_roundtrip_preserves_order() {
        let mut store = CartStore::load(MemoryStore::new(), NullRenderer);
        store.add(id("9"), "Dental Kit", Price::from_whole(8)).unwrap();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        store.add(id("9"), "Dental Kit", Price::from_whole(8)).unwrap();

        let snapshot = store.storage().read(STORAGE_KEY).unwrap().unwrap();
        let reloaded = CartStore::load(MemoryStore::with_entry(STORAGE_KEY, snapshot), NullRenderer);
        let ids: Vec<&str> = reloaded.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["9", "1"]);
        assert_eq!(reloaded.cart().get(&id("9")).unwrap().quantity, 2);
        assert_eq!(reloaded.item_count(), 3);
        assert_eq!(reloaded.total(), Price::from_whole(61));
    }

    #[test]
    fn test_load_tolerates_corrupt_snapshot() {
        let storage = MemoryStore::with_entry(STORAGE_KEY, "{not json");
        let store = CartStore::load(storage, NullRenderer);
        assert!(store.is_empty());
    }

    #[test]
    fn test_renderer_signaled_per_mutation_with_full_state() {
        let mut store = CartStore::load(MemoryStore::new(), CountingRenderer::default());
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        store.remove(&id("1")).unwrap();

        assert_eq!(store.renderer.refreshes, 3);
        assert_eq!(store.renderer.last_count, 0);
    }

    #[test]
    fn test_renderer_not_signaled_for_pure_reads_or_noop_update() {
        let mut store = CartStore::load(MemoryStore::new(), CountingRenderer::default());
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();

        let _ = store.total();
        let _ = store.item_count();
        store.update_quantity(&id("404"), 1).unwrap();

        assert_eq!(store.renderer.refreshes, 1);
    }

    #[test]
    fn test_failed_persist_keeps_memory_state() {
        let mut store = CartStore::load(FailingStore, NullRenderer);
        let result = store.add(id("1"), "Food", Price::from_whole(45));

        assert!(matches!(result, Err(CartError::Persist(_))));
        assert_eq!(store.item_count(), 1);
        assert_eq!(store.total(), Price::from_whole(45));
    }
}
