//! Team directory commands.

use vetcare_site::render::render_stars;
use vetcare_site::team::{Specialty, TeamDirectory};

/// List team members with optional specialty filter and search term.
pub fn list(specialty: Option<&str>, search: &str) -> Result<(), Box<dyn std::error::Error>> {
    let team = TeamDirectory::builtin();
    let specialty = parse_specialty(specialty)?;

    let members = team.browse(specialty, search);
    let (shown, total) = team.summary(specialty, search);

    if members.is_empty() {
        println!("No team members match your search.");
        return Ok(());
    }

    for member in &members {
        let specialties: Vec<&str> = member.specialties.iter().map(|s| s.label()).collect();
        println!(
            "{:<22} {:<26} {}",
            member.name,
            member.role,
            render_stars(member.rating)
        );
        println!("     Specialties: {}", specialties.join(", "));
    }
    println!("Showing {shown} of {total} team members");
    Ok(())
}

fn parse_specialty(raw: Option<&str>) -> Result<Option<Specialty>, Box<dyn std::error::Error>> {
    let Some(raw) = raw else { return Ok(None) };
    Specialty::parse(raw).map(Some).ok_or_else(|| {
        let labels: Vec<&str> = Specialty::ALL.iter().map(|s| s.label()).collect();
        format!("unknown specialty '{raw}' (expected one of: {})", labels.join(", ")).into()
    })
}
