//! Cart store integration tests against the file-backed snapshot store.
//!
//! These exercise the full mutation -> persist -> reload cycle that the
//! CLI performs on every command invocation.

#![allow(clippy::unwrap_used)]

use vetcare_core::{Price, ProductId};
use vetcare_integration_tests::TestStore;

fn id(s: &str) -> ProductId {
    ProductId::new(s)
}

// =============================================================================
// Core Scenario
// =============================================================================

#[test]
fn test_add_twice_then_toy_scenario() {
    let data = TestStore::new();
    let mut store = data.open();

    store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
    store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
    store.add(id("2"), "Toy", Price::from_whole(18)).unwrap();

    assert_eq!(store.items().len(), 2);
    let food = store.cart().get(&id("1")).unwrap();
    assert_eq!(food.quantity, 2);
    assert_eq!(food.price, Price::from_whole(45));
    let toy = store.cart().get(&id("2")).unwrap();
    assert_eq!(toy.quantity, 1);

    assert_eq!(store.total(), Price::from_whole(108));
    assert_eq!(store.item_count(), 3);
}

#[test]
fn test_negative_delta_equal_to_quantity_removes() {
    let data = TestStore::new();
    let mut store = data.open();

    store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
    store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
    store.add(id("2"), "Toy", Price::from_whole(18)).unwrap();

    store.update_quantity(&id("1"), -2).unwrap();

    assert!(store.cart().get(&id("1")).is_none());
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.cart().get(&id("2")).unwrap().quantity, 1);
}

// =============================================================================
// Persist / Reload Round-Trips
// =============================================================================

#[test]
fn test_reload_preserves_items_and_order() {
    let data = TestStore::new();
    {
        let mut store = data.open();
        store.add(id("9"), "Dental Kit", Price::from_whole(8)).unwrap();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        store.add(id("9"), "Dental Kit", Price::from_whole(8)).unwrap();
    }

    let reloaded = data.open();
    let ids: Vec<&str> = reloaded.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["9", "1"]);

    let dental = reloaded.cart().get(&id("9")).unwrap();
    assert_eq!(dental.name, "Dental Kit");
    assert_eq!(dental.price, Price::from_whole(8));
    assert_eq!(dental.quantity, 2);

    assert_eq!(reloaded.item_count(), 3);
    assert_eq!(reloaded.total(), Price::from_whole(61));
}

#[test]
fn test_snapshot_is_a_json_array_with_numeric_prices() {
    let data = TestStore::new();
    {
        let mut store = data.open();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
    }

    let raw = data.raw_snapshot().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"id": "1", "name": "Food", "price": 45.0, "quantity": 2}
        ])
    );
}

#[test]
fn test_every_mutation_overwrites_the_snapshot() {
    let data = TestStore::new();
    let mut store = data.open();

    store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
    let after_add = data.raw_snapshot().unwrap();

    store.remove(&id("1")).unwrap();
    let after_remove = data.raw_snapshot().unwrap();

    assert_ne!(after_add, after_remove);
    assert_eq!(after_remove, "[]");
}

#[test]
fn test_price_snapshot_survives_reload_and_repeat_adds() {
    let data = TestStore::new();
    {
        let mut store = data.open();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
    }

    // The "catalog" now quotes a different price; the stored snapshot wins.
    let mut store = data.open();
    store.add(id("1"), "Food", Price::from_whole(50)).unwrap();

    let item = store.cart().get(&id("1")).unwrap();
    assert_eq!(item.quantity, 2);
    assert_eq!(item.price, Price::from_whole(45));
    assert_eq!(store.total(), Price::from_whole(90));
}

// =============================================================================
// Idempotence & Edge Cases
// =============================================================================

#[test]
fn test_remove_twice_is_idempotent_on_disk() {
    let data = TestStore::new();
    let mut store = data.open();

    store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
    store.add(id("2"), "Toy", Price::from_whole(18)).unwrap();

    store.remove(&id("1")).unwrap();
    let first = data.raw_snapshot().unwrap();

    store.remove(&id("1")).unwrap();
    let second = data.raw_snapshot().unwrap();

    assert_eq!(first, second);
    let reloaded = data.open();
    assert_eq!(reloaded.items().len(), 1);
}

#[test]
fn test_confirmed_clear_persists_an_empty_cart() {
    let data = TestStore::new();
    let mut store = data.open();

    store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
    store.add(id("2"), "Toy", Price::from_whole(18)).unwrap();

    assert!(store.request_clear());
    assert!(store.confirm_clear().unwrap());
    assert_eq!(store.total(), Price::zero());
    assert_eq!(data.raw_snapshot().unwrap(), "[]");

    let reloaded = data.open();
    assert!(reloaded.is_empty());
}

#[test]
fn test_corrupt_snapshot_hydrates_empty() {
    let data = TestStore::new();
    {
        let mut store = data.open();
        store.add(id("1"), "Food", Price::from_whole(45)).unwrap();
    }

    data.write_raw_snapshot("{definitely not an array");
    let store = data.open();
    assert!(store.is_empty());
}

#[test]
fn test_fresh_directory_hydrates_empty() {
    let data = TestStore::new();
    let store = data.open();
    assert!(store.is_empty());
    assert_eq!(store.item_count(), 0);
    assert_eq!(store.total(), Price::zero());
}
