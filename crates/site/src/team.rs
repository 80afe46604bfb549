//! Team directory: seed data, specialty filter, and search.

use vetcare_core::MemberId;

/// A staff specialty, matching the team page filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialty {
    GeneralMedicine,
    Surgery,
    Dermatology,
    Cardiology,
    ExoticAnimals,
    Grooming,
}

impl Specialty {
    /// Every specialty, in display order.
    pub const ALL: [Self; 6] = [
        Self::GeneralMedicine,
        Self::Surgery,
        Self::Dermatology,
        Self::Cardiology,
        Self::ExoticAnimals,
        Self::Grooming,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GeneralMedicine => "General Medicine",
            Self::Surgery => "Surgery",
            Self::Dermatology => "Dermatology",
            Self::Cardiology => "Cardiology",
            Self::ExoticAnimals => "Exotic Animals",
            Self::Grooming => "Grooming",
        }
    }

    /// Parse from a filter value, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" | "general-medicine" | "general medicine" => Some(Self::GeneralMedicine),
            "surgery" => Some(Self::Surgery),
            "dermatology" => Some(Self::Dermatology),
            "cardiology" => Some(Self::Cardiology),
            "exotics" | "exotic-animals" | "exotic animals" => Some(Self::ExoticAnimals),
            "grooming" => Some(Self::Grooming),
            _ => None,
        }
    }
}

/// A member of the clinic team.
#[derive(Debug, Clone)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    /// One or more specialties; a member matches a filter if any of them
    /// does.
    pub specialties: Vec<Specialty>,
    /// Customer rating from 0 to 5.
    pub rating: f32,
}

impl TeamMember {
    /// Case-insensitive substring match over name, role, and specialty
    /// labels. `term` must already be lowercased and trimmed.
    fn matches(&self, term: &str) -> bool {
        term.is_empty()
            || self.name.to_lowercase().contains(term)
            || self.role.to_lowercase().contains(term)
            || self
                .specialties
                .iter()
                .any(|s| s.label().to_lowercase().contains(term))
    }
}

/// The clinic's team directory.
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    members: Vec<TeamMember>,
}

impl TeamDirectory {
    /// The clinic's built-in team list.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            members: builtin_members(),
        }
    }

    /// All members, in display order.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Filter by specialty and search term. A `None` specialty passes
    /// everyone; an empty term matches everyone.
    #[must_use]
    pub fn browse(&self, specialty: Option<Specialty>, term: &str) -> Vec<&TeamMember> {
        let term = term.trim().to_lowercase();
        self.members
            .iter()
            .filter(|m| specialty.is_none_or(|s| m.specialties.contains(&s)))
            .filter(|m| m.matches(&term))
            .collect()
    }

    /// Shown-of-total counts for a browse, for the "Showing X of Y team
    /// members" summary line.
    #[must_use]
    pub fn summary(&self, specialty: Option<Specialty>, term: &str) -> (usize, usize) {
        (self.browse(specialty, term).len(), self.members.len())
    }
}

fn member(id: &str, name: &str, role: &str, specialties: &[Specialty], rating: f32) -> TeamMember {
    TeamMember {
        id: MemberId::new(id),
        name: name.to_owned(),
        role: role.to_owned(),
        specialties: specialties.to_vec(),
        rating,
    }
}

fn builtin_members() -> Vec<TeamMember> {
    vec![
        member(
            "m1",
            "Dr. Carolina Mendoza",
            "Chief Veterinarian",
            &[Specialty::GeneralMedicine, Specialty::Cardiology],
            4.9,
        ),
        member(
            "m2",
            "Dr. Andrés Salazar",
            "Veterinary Surgeon",
            &[Specialty::Surgery],
            4.8,
        ),
        member(
            "m3",
            "Dr. Valeria Ríos",
            "Dermatology Specialist",
            &[Specialty::Dermatology, Specialty::GeneralMedicine],
            4.7,
        ),
        member(
            "m4",
            "Dr. Mateo Herrera",
            "Exotic Animal Specialist",
            &[Specialty::ExoticAnimals],
            4.6,
        ),
        member(
            "m5",
            "Sofía Carrasco",
            "Veterinary Technician",
            &[Specialty::GeneralMedicine],
            4.8,
        ),
        member(
            "m6",
            "Lucía Paredes",
            "Professional Groomer",
            &[Specialty::Grooming],
            4.9,
        ),
    ]
}
