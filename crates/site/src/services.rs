//! Services directory: seed data, category filter, and search.

use vetcare_core::{Price, ServiceId};

/// Service category, matching the services page filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    Consultations,
    Prevention,
    Grooming,
    Surgery,
    Dental,
}

impl ServiceCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::Consultations,
        Self::Prevention,
        Self::Grooming,
        Self::Surgery,
        Self::Dental,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Consultations => "Consultations",
            Self::Prevention => "Prevention",
            Self::Grooming => "Grooming",
            Self::Surgery => "Surgery",
            Self::Dental => "Dental",
        }
    }

    /// Parse from a filter value, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "consultations" | "consultation" => Some(Self::Consultations),
            "prevention" => Some(Self::Prevention),
            "grooming" => Some(Self::Grooming),
            "surgery" => Some(Self::Surgery),
            "dental" => Some(Self::Dental),
            _ => None,
        }
    }
}

/// A clinic service.
#[derive(Debug, Clone)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub category: ServiceCategory,
    /// Base price; the final quote can vary with the patient.
    pub price: Price,
    pub description: String,
    pub features: Vec<String>,
}

impl Service {
    /// Case-insensitive substring match over name, description, and
    /// category label. `term` must already be lowercased and trimmed.
    fn matches(&self, term: &str) -> bool {
        term.is_empty()
            || self.name.to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
            || self.category.label().to_lowercase().contains(term)
    }
}

/// The clinic's services directory.
#[derive(Debug, Clone)]
pub struct ServiceDirectory {
    services: Vec<Service>,
}

impl ServiceDirectory {
    /// The clinic's built-in service list.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            services: builtin_services(),
        }
    }

    /// All services, in display order.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Look up a service by id.
    #[must_use]
    pub fn get(&self, id: &ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| &s.id == id)
    }

    /// Filter by category and search term. A `None` category passes
    /// everything; an empty term matches everything.
    #[must_use]
    pub fn browse(&self, category: Option<ServiceCategory>, term: &str) -> Vec<&Service> {
        let term = term.trim().to_lowercase();
        self.services
            .iter()
            .filter(|s| category.is_none_or(|c| s.category == c))
            .filter(|s| s.matches(&term))
            .collect()
    }
}

fn service(
    id: &str,
    name: &str,
    category: ServiceCategory,
    price: u32,
    description: &str,
    features: &[&str],
) -> Service {
    Service {
        id: ServiceId::new(id),
        name: name.to_owned(),
        category,
        price: Price::from_whole(price),
        description: description.to_owned(),
        features: features.iter().map(|&f| f.to_owned()).collect(),
    }
}

fn builtin_services() -> Vec<Service> {
    vec![
        service(
            "s1",
            "General Consultation",
            ServiceCategory::Consultations,
            25,
            "Full physical examination with a treatment plan for your pet.",
            &["Complete physical exam", "Medical history review", "Treatment plan"],
        ),
        service(
            "s2",
            "Specialist Consultation",
            ServiceCategory::Consultations,
            40,
            "In-depth evaluation with one of our certified specialists.",
            &["Board-certified specialists", "Diagnostic imaging review", "Referral follow-up"],
        ),
        service(
            "s3",
            "Vaccination Plan",
            ServiceCategory::Prevention,
            15,
            "Age-appropriate vaccination schedule with digital records.",
            &["Core and optional vaccines", "Digital vaccination card", "Reminder notices"],
        ),
        service(
            "s4",
            "Deworming",
            ServiceCategory::Prevention,
            12,
            "Internal and external parasite control for dogs and cats.",
            &["Weight-adjusted dosing", "Internal and external parasites", "Quarterly plan available"],
        ),
        service(
            "s5",
            "Bath & Grooming",
            ServiceCategory::Grooming,
            30,
            "Full grooming session: bath, cut, nails, and ear cleaning.",
            &["Breed-appropriate cut", "Nail trimming", "Ear cleaning"],
        ),
        service(
            "s6",
            "Medicated Bath",
            ServiceCategory::Grooming,
            35,
            "Therapeutic bath for skin conditions, with prescribed products.",
            &["Veterinarian-prescribed products", "Gentle on irritated skin", "Post-bath skin check"],
        ),
        service(
            "s7",
            "Soft Tissue Surgery",
            ServiceCategory::Surgery,
            150,
            "Surgical procedures with full anesthetic monitoring.",
            &["Pre-surgical bloodwork", "Anesthetic monitoring", "Post-op pain management"],
        ),
        service(
            "s8",
            "Spay & Neuter",
            ServiceCategory::Surgery,
            120,
            "Routine sterilization with same-day discharge in most cases.",
            &["Same-day discharge", "Pain management included", "Recovery check included"],
        ),
        service(
            "s9",
            "Dental Cleaning",
            ServiceCategory::Dental,
            80,
            "Ultrasonic dental cleaning and polishing under sedation.",
            &["Ultrasonic scaling", "Polishing", "Dental chart and photos"],
        ),
    ]
}
