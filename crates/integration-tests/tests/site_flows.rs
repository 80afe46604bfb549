//! Site flow integration tests: catalog to cart, rendering, checkout
//! messaging, and contact submission.

#![allow(clippy::unwrap_used)]

use vetcare_cart::Renderer;
use vetcare_core::{Phone, Price, ProductId};
use vetcare_integration_tests::TestStore;
use vetcare_site::catalog::{Catalog, CatalogSort};
use vetcare_site::contact::{
    AppointmentRequest, EmergencyRequest, submit_appointment, submit_emergency,
};
use vetcare_site::notify;
use vetcare_site::render::TerminalRenderer;

// =============================================================================
// Catalog -> Cart
// =============================================================================

#[test]
fn test_add_from_catalog_lookup() {
    let catalog = Catalog::builtin();
    let data = TestStore::new();
    let mut store = data.open();

    // The CLI resolves id, name, and price through the catalog
    let product = catalog.get(&ProductId::new("4")).unwrap();
    store
        .add(product.id.clone(), &product.name, product.price)
        .unwrap();

    let item = store.cart().get(&product.id).unwrap();
    assert_eq!(item.name, "LED Interactive Ball");
    assert_eq!(item.price, Price::from_whole(18));
}

#[test]
fn test_cart_price_stays_pinned_when_catalog_price_differs() {
    let catalog = Catalog::builtin();
    let data = TestStore::new();
    let mut store = data.open();

    let product = catalog.get(&ProductId::new("1")).unwrap();
    store
        .add(product.id.clone(), &product.name, product.price)
        .unwrap();

    // A later add quoting a changed catalog price must not re-sync the line
    store
        .add(product.id.clone(), &product.name, Price::from_whole(99))
        .unwrap();

    let item = store.cart().get(&product.id).unwrap();
    assert_eq!(item.price, product.price);
    assert_eq!(store.total(), product.price.times(2));
}

#[test]
fn test_browse_then_add_cheapest_product() {
    let catalog = Catalog::builtin();
    let data = TestStore::new();
    let mut store = data.open();

    let by_price = catalog.browse(None, "", CatalogSort::PriceAsc);
    let cheapest = by_price.first().unwrap();
    store
        .add(cheapest.id.clone(), &cheapest.name, cheapest.price)
        .unwrap();

    assert_eq!(store.total(), Price::from_whole(8));
}

// =============================================================================
// Rendering & Checkout Messaging
// =============================================================================

#[test]
fn test_terminal_renderer_shows_full_cart_state() {
    let data = TestStore::new();
    let mut store = data.open();
    store.add(ProductId::new("1"), "Food", Price::from_whole(45)).unwrap();
    store.add(ProductId::new("1"), "Food", Price::from_whole(45)).unwrap();
    store.add(ProductId::new("2"), "Toy", Price::from_whole(18)).unwrap();

    let mut renderer = TerminalRenderer::with_writer(Vec::new());
    renderer.refresh(store.cart());
    let output = String::from_utf8(renderer.into_writer()).unwrap();

    assert!(output.contains("Cart (3 items)"));
    assert!(output.contains("2 x Food"));
    assert!(output.contains("1 x Toy"));
    assert!(output.contains("Total: $108.00"));
}

#[test]
fn test_checkout_summary_message() {
    let data = TestStore::new();
    let mut store = data.open();
    store.add(ProductId::new("1"), "Food", Price::from_whole(45)).unwrap();
    store.add(ProductId::new("1"), "Food", Price::from_whole(45)).unwrap();
    store.add(ProductId::new("2"), "Toy", Price::from_whole(18)).unwrap();

    let note = notify::checkout_processing(store.item_count(), store.total());
    assert_eq!(note.message, "Processing order of 3 product(s) for $108.00");
}

// =============================================================================
// Contact Forms
// =============================================================================

#[test]
fn test_appointment_submission_happy_path() {
    let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    let request = AppointmentRequest {
        owner_name: "Ana Torres".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "+593 99 123 4567".to_owned(),
        pet_name: "Rocky".to_owned(),
        service: Some("Vaccination Plan".to_owned()),
        date: "2026-08-20".to_owned(),
        notes: None,
    };

    let receipt = submit_appointment(&request, today).unwrap();
    assert_eq!(receipt.title, "Appointment Requested!");
}

#[test]
fn test_emergency_receipt_uses_configured_phone() {
    let clinic_phone = Phone::parse("+593 2 600 0000").unwrap();
    let request = EmergencyRequest {
        owner_name: "Ana Torres".to_owned(),
        phone: "+593 99 123 4567".to_owned(),
        pet_name: "Rocky".to_owned(),
        description: "He swallowed a chew toy an hour ago.".to_owned(),
    };

    let receipt = submit_emergency(&request, &clinic_phone).unwrap();
    assert!(receipt.message.contains("+593 2 600 0000"));
}
