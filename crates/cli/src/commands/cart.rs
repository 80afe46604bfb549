//! Shopping cart commands.
//!
//! Every mutating command hydrates the store from the configured data
//! directory, applies the mutation (the store persists and re-renders the
//! cart after each one), and prints a notification. A failed snapshot
//! write is recoverable: the warning is shown and the command continues.

use std::io::{self, BufRead, Write};

use vetcare_cart::{CartError, CartStore, FileStore, NullRenderer, Renderer};
use vetcare_core::ProductId;
use vetcare_site::catalog::Catalog;
use vetcare_site::config::SiteConfig;
use vetcare_site::notify;
use vetcare_site::render::TerminalRenderer;

fn open_store(config: &SiteConfig) -> CartStore<FileStore, TerminalRenderer> {
    CartStore::load(FileStore::new(&config.data_dir), TerminalRenderer::stdout())
}

/// Print a persist failure as a non-fatal warning.
fn warn_persist(result: Result<(), CartError>) {
    if let Err(e) = result {
        println!("{}", notify::Notification::warning(format!("{e}")));
    }
}

/// Render the current cart without mutating it.
pub fn show(config: &SiteConfig) {
    let store = CartStore::load(FileStore::new(&config.data_dir), NullRenderer);
    TerminalRenderer::stdout().refresh(store.cart());
}

/// Add `quantity` units of a catalog product to the cart.
pub fn add(config: &SiteConfig, id: &str, quantity: u32) {
    let catalog = Catalog::builtin();
    let Some(product) = catalog.get(&ProductId::new(id)) else {
        println!("{}", notify::product_not_found());
        return;
    };

    let mut store = open_store(config);
    for _ in 0..quantity.max(1) {
        warn_persist(store.add(product.id.clone(), &product.name, product.price));
    }

    if quantity > 1 {
        println!("{}", notify::items_added(quantity));
    } else {
        println!("{}", notify::item_added());
    }
}

/// Remove a product from the cart.
pub fn remove(config: &SiteConfig, id: &str) {
    let mut store = open_store(config);
    warn_persist(store.remove(&ProductId::new(id)));
    println!("{}", notify::item_removed());
}

/// Adjust a product's quantity by a signed delta.
pub fn adjust(config: &SiteConfig, id: &str, delta: i64) {
    let mut store = open_store(config);
    let id = ProductId::new(id);
    let known = store.cart().get(&id).is_some();
    warn_persist(store.update_quantity(&id, delta));

    if known && store.cart().get(&id).is_none() {
        println!("{}", notify::item_removed());
    }
}

/// Empty the cart, prompting for confirmation unless `yes` is set.
pub fn clear(config: &SiteConfig, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config);

    if !store.request_clear() {
        // Empty cart: nothing to confirm, nothing to do
        println!("{}", notify::Notification::info("Your cart is already empty"));
        return Ok(());
    }

    if !yes && !prompt_confirmation("Are you sure you want to empty the cart? [y/N] ")? {
        store.cancel_clear();
        return Ok(());
    }

    match store.confirm_clear() {
        Ok(true) => println!("{}", notify::cart_cleared()),
        Ok(false) => {}
        Err(e) => {
            // The in-memory clear already happened; the write is what failed
            println!("{}", notify::Notification::warning(format!("{e}")));
            println!("{}", notify::cart_cleared());
        }
    }
    Ok(())
}

/// Simulated checkout: reports the order summary, leaves the cart intact.
pub fn checkout(config: &SiteConfig) {
    let store = CartStore::load(FileStore::new(&config.data_dir), NullRenderer);

    if store.is_empty() {
        println!("{}", notify::cart_empty());
        return;
    }

    println!("{}", notify::checkout_processing(store.item_count(), store.total()));
    println!(
        "Thank you for your purchase! In a real system you would be \
         redirected to the payment page."
    );
}

fn prompt_confirmation(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
