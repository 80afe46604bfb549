//! Product catalog commands.

use vetcare_core::ProductId;
use vetcare_site::catalog::{Badge, Catalog, CatalogSort, Category};
use vetcare_site::notify;
use vetcare_site::render::render_stars;

/// List products with optional category filter, search term, and sort.
pub fn list(
    category: Option<&str>,
    search: &str,
    sort: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    let category = parse_category(category)?;
    let sort = CatalogSort::parse(sort);

    let products = catalog.browse(category, search, sort);
    if products.is_empty() {
        println!("No products match your search.");
        return Ok(());
    }

    for product in &products {
        let badge = product
            .badge
            .as_ref()
            .map(|b| format!("  [{}]", b.text()))
            .unwrap_or_default();
        println!(
            "{:>3}  {:<38} {:<14} {:>8}{badge}",
            product.id.as_str(),
            product.name,
            product.category.label(),
            product.price.to_string(),
        );
    }
    println!("{} product(s)", products.len());
    Ok(())
}

/// Show the quick-view details for one product.
pub fn show(id: &str) {
    let catalog = Catalog::builtin();
    let Some(product) = catalog.get(&ProductId::new(id)) else {
        println!("{}", notify::product_not_found());
        return;
    };

    println!("{}", product.name);
    println!("Category: {}", product.category.label());
    println!("Rating:   {}", render_stars(product.rating));
    match (&product.old_price, &product.badge) {
        (Some(old), Some(Badge::Sale(label))) => {
            println!("Price:    {} (was {old}, {label})", product.price);
        }
        _ => println!("Price:    {}", product.price),
    }
    println!();
    println!("{}", product.description);
    println!();
    for feature in &product.features {
        println!("  - {feature}");
    }
}

fn parse_category(raw: Option<&str>) -> Result<Option<Category>, Box<dyn std::error::Error>> {
    let Some(raw) = raw else { return Ok(None) };
    Category::parse(raw).map(Some).ok_or_else(|| {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        format!("unknown category '{raw}' (expected one of: {})", labels.join(", ")).into()
    })
}
