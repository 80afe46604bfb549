//! Product catalog: seed data, lookup, filtering, search, and sorting.
//!
//! The catalog is the add-time source of `id`, `name`, and `price` for the
//! cart. The cart treats those values as opaque snapshots; nothing here is
//! re-synced into existing cart lines.

use vetcare_core::{Price, ProductId};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Accessories,
    Hygiene,
    Toys,
    Health,
    Bedding,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 6] = [
        Self::Food,
        Self::Accessories,
        Self::Hygiene,
        Self::Toys,
        Self::Health,
        Self::Bedding,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Accessories => "Accessories",
            Self::Hygiene => "Hygiene",
            Self::Toys => "Toys",
            Self::Health => "Health",
            Self::Bedding => "Beds & Houses",
        }
    }

    /// Parse from a filter value, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "accessories" => Some(Self::Accessories),
            "hygiene" => Some(Self::Hygiene),
            "toys" => Some(Self::Toys),
            "health" => Some(Self::Health),
            "bedding" | "beds" | "beds-and-houses" => Some(Self::Bedding),
            _ => None,
        }
    }
}

/// Promotional badge shown on a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    /// Recently added product.
    New,
    /// Discounted product, with the discount label (e.g. `-20%`).
    Sale(String),
    /// Frequently bought product.
    Popular,
}

impl Badge {
    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::New => "New",
            Self::Sale(label) => label,
            Self::Popular => "Popular",
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    /// Pre-discount price, when the product is on sale.
    pub old_price: Option<Price>,
    pub badge: Option<Badge>,
    /// Customer rating from 0 to 5, in half-star steps.
    pub rating: f32,
    pub description: String,
    pub features: Vec<String>,
}

impl Product {
    /// Case-insensitive substring match over name, category label, and
    /// description. `term` must already be lowercased and trimmed.
    fn matches(&self, term: &str) -> bool {
        term.is_empty()
            || self.name.to_lowercase().contains(term)
            || self.category.label().to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
    }
}

/// Catalog sort order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSort {
    /// Keep catalog order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl CatalogSort {
    /// Parse from a sort parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" | "price_asc" => Self::PriceAsc,
            "price-desc" | "price_desc" => Self::PriceDesc,
            "name-asc" | "name_asc" => Self::NameAsc,
            "name-desc" | "name_desc" => Self::NameDesc,
            _ => Self::Featured,
        }
    }

    /// Convert to a sort parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }
}

/// The product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The clinic's built-in product list.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Browse the catalog: filter by category, search, then sort.
    ///
    /// An empty (or whitespace) search term matches everything; a `None`
    /// category passes all products. An empty result means "no products
    /// match" and is not an error.
    #[must_use]
    pub fn browse(
        &self,
        category: Option<Category>,
        term: &str,
        sort: CatalogSort,
    ) -> Vec<&Product> {
        let term = term.trim().to_lowercase();
        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| p.matches(&term))
            .collect();

        match sort {
            CatalogSort::Featured => {}
            CatalogSort::PriceAsc => matches.sort_by(|a, b| a.price.cmp(&b.price)),
            CatalogSort::PriceDesc => matches.sort_by(|a, b| b.price.cmp(&a.price)),
            CatalogSort::NameAsc => {
                matches.sort_by_key(|p| p.name.to_lowercase());
            }
            CatalogSort::NameDesc => {
                matches.sort_by_key(|p| std::cmp::Reverse(p.name.to_lowercase()));
            }
        }

        matches
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: Category,
    price: u32,
    old_price: Option<u32>,
    badge: Option<Badge>,
    rating: f32,
    description: &str,
    features: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category,
        price: Price::from_whole(price),
        old_price: old_price.map(Price::from_whole),
        badge,
        rating,
        description: description.to_owned(),
        features: features.iter().map(|&f| f.to_owned()).collect(),
    }
}

#[allow(clippy::too_many_lines)]
fn builtin_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Royal Canin Adult 15kg",
            Category::Food,
            45,
            None,
            Some(Badge::New),
            4.5,
            "Complete, balanced food for adult dogs of all breeds, with the \
             essential nutrients to keep your pet healthy and active.",
            &[
                "High-quality protein content",
                "Essential vitamins and minerals",
                "Omega 3 and 6 fatty acids",
                "Supports the immune system",
            ],
        ),
        product(
            "2",
            "Reflective Adjustable Collar",
            Category::Accessories,
            15,
            Some(18),
            Some(Badge::Sale("-20%".to_owned())),
            4.0,
            "Adjustable collar with high-visibility reflective material for \
             safe night walks. Made from tough, durable nylon.",
            &[
                "360° reflective material",
                "Adjustable from 30cm to 50cm",
                "Quick-release buckle",
                "Water resistant",
            ],
        ),
        product(
            "3",
            "Hypoallergenic Shampoo 500ml",
            Category::Hygiene,
            12,
            None,
            None,
            5.0,
            "Gentle paraben-free formula for sensitive and allergy-prone \
             skin, enriched with aloe vera and vitamin E for a soft, shiny \
             coat.",
            &[
                "No parabens or sulfates",
                "pH balanced for pets",
                "Enriched with aloe vera",
                "Dermatologically tested",
            ],
        ),
        product(
            "4",
            "LED Interactive Ball",
            Category::Toys,
            18,
            None,
            Some(Badge::Popular),
            4.7,
            "Ball with multicolor LED lights and automatic movement for \
             hours of fun. Perfect for stimulating your pet's hunting \
             instinct.",
            &[
                "Multicolor LED lights",
                "Unpredictable automatic movement",
                "Bite-resistant material",
                "USB rechargeable battery",
            ],
        ),
        product(
            "5",
            "Multivitamin Complex",
            Category::Health,
            22,
            None,
            None,
            4.9,
            "Complete vitamin supplement to strengthen the immune system. \
             Rich in vitamins A, D, E and B complex for optimal health.",
            &[
                "Complete vitamin complex",
                "Strengthens the immune system",
                "Supports joint health",
                "Rich in antioxidants",
            ],
        ),
        product(
            "6",
            "Orthopedic Memory Foam Bed",
            Category::Bedding,
            65,
            None,
            Some(Badge::New),
            5.0,
            "High-density memory foam bed for maximum comfort and joint \
             support. Ideal for senior pets or pets with joint problems.",
            &[
                "High-density memory foam",
                "Relieves joint pressure",
                "Removable washable cover",
                "Non-slip base",
            ],
        ),
        product(
            "7",
            "ProPlan Puppy 10kg",
            Category::Food,
            38,
            None,
            None,
            4.6,
            "Targeted nutrition for healthy puppy growth. Rich in DHA for \
             brain and vision development.",
            &[
                "High in quality protein",
                "DHA for brain development",
                "Balanced calcium and phosphorus",
                "For puppies from 2 to 12 months",
            ],
        ),
        product(
            "8",
            "Retractable Leash 5m",
            Category::Accessories,
            25,
            Some(29),
            Some(Badge::Sale("-15%".to_owned())),
            4.2,
            "Sturdy leash with automatic retraction and brake. Ergonomic \
             non-slip handle for better control.",
            &[
                "5 meter length",
                "Secure brake system",
                "Ergonomic handle",
                "Supports up to 50kg",
            ],
        ),
        product(
            "9",
            "Dental Kit Brush + Paste",
            Category::Hygiene,
            8,
            None,
            None,
            4.4,
            "Complete dental hygiene kit with a pet-friendly flavor. \
             Prevents plaque, tartar, and bad breath.",
            &[
                "Double-headed brush",
                "Meat-flavored toothpaste",
                "Prevents plaque and tartar",
                "Fluoride-free enzymatic formula",
            ],
        ),
        product(
            "10",
            "Tough Refillable Chew Toy",
            Category::Toys,
            14,
            None,
            Some(Badge::Popular),
            4.8,
            "Nearly indestructible toy that can be stuffed with treats. \
             Perfect for heavy chewers.",
            &[
                "Ultra-resistant material",
                "Refillable with treats",
                "Mentally stimulating",
                "Dishwasher safe",
            ],
        ),
        product(
            "11",
            "Spot-On Flea Treatment 3 Pipettes",
            Category::Health,
            16,
            None,
            None,
            4.5,
            "Protection against fleas, ticks, and mosquitoes for 3 months. \
             Fast-acting, long-lasting formula.",
            &[
                "30 days of protection per pipette",
                "Kills fleas within 24 hours",
                "Repels mosquitoes",
                "Water resistant",
            ],
        ),
        product(
            "12",
            "Cozy Thermal Pet House",
            Category::Bedding,
            55,
            Some(73),
            Some(Badge::Sale("-25%".to_owned())),
            4.9,
            "Thermal house with a removable roof and an ultra-soft washable \
             cushion. Keeps warmth in winter and stays cool in summer.",
            &[
                "Removable roof",
                "Ultra-soft washable cushion",
                "Insulating thermal material",
                "Easy to assemble",
            ],
        ),
    ]
}
