//! Services directory commands.

use vetcare_site::services::{ServiceCategory, ServiceDirectory};

/// List services with optional category filter and search term.
pub fn list(category: Option<&str>, search: &str) -> Result<(), Box<dyn std::error::Error>> {
    let directory = ServiceDirectory::builtin();
    let category = parse_category(category)?;

    let services = directory.browse(category, search);
    if services.is_empty() {
        println!("No services match your search.");
        return Ok(());
    }

    for service in &services {
        println!(
            "{:>3}  {:<24} {:<14} {:>8}",
            service.id.as_str(),
            service.name,
            service.category.label(),
            service.price.to_string(),
        );
        println!("     {}", service.description);
    }
    println!("{} service(s)", services.len());
    Ok(())
}

fn parse_category(
    raw: Option<&str>,
) -> Result<Option<ServiceCategory>, Box<dyn std::error::Error>> {
    let Some(raw) = raw else { return Ok(None) };
    ServiceCategory::parse(raw).map(Some).ok_or_else(|| {
        let labels: Vec<&str> = ServiceCategory::ALL.iter().map(|c| c.label()).collect();
        format!("unknown category '{raw}' (expected one of: {})", labels.join(", ")).into()
    })
}
