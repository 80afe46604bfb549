//! VetCare CLI - Catalog, cart, and contact tools for the clinic site.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! vetcare products list --category toys --sort price-asc
//! vetcare products show 4
//!
//! # Manage the cart (persisted under VETCARE_DATA_DIR)
//! vetcare cart add 1
//! vetcare cart adjust 1 -- -1
//! vetcare cart clear --yes
//! vetcare cart checkout
//!
//! # Directories and FAQ
//! vetcare services --search vaccination
//! vetcare team --specialty surgery
//! vetcare faq payment
//!
//! # Contact forms
//! vetcare contact appointment --name "Ana Torres" --email ana@example.com \
//!     --phone "+593 99 123 4567" --pet Rocky --date 2026-09-01
//! ```
//!
//! # Commands
//!
//! - `products` - List and inspect catalog products
//! - `cart` - Mutate and inspect the persistent shopping cart
//! - `services` - Browse clinic services
//! - `team` - Browse the clinic team
//! - `contact` - Submit contact forms
//! - `faq` - Search the FAQ

#![cfg_attr(not(test), forbid(unsafe_code))]
// The CLI's entire job is writing to stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use vetcare_site::config::SiteConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vetcare")]
#[command(author, version, about = "VetCare clinic storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and inspect catalog products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Mutate and inspect the persistent shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Browse clinic services
    Services {
        /// Filter by category (consultations, prevention, grooming,
        /// surgery, dental)
        #[arg(short, long)]
        category: Option<String>,

        /// Search term matched against name, description, and category
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Browse the clinic team
    Team {
        /// Filter by specialty (general, surgery, dermatology, cardiology,
        /// exotics, grooming)
        #[arg(long)]
        specialty: Option<String>,

        /// Search term matched against name, role, and specialties
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Submit contact forms
    Contact {
        #[command(subcommand)]
        form: ContactForm,
    },
    /// Search the FAQ
    Faq {
        /// Search term; omit to list every entry
        term: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, optionally filtered, searched, and sorted
    List {
        /// Filter by category (food, accessories, hygiene, toys, health,
        /// bedding)
        #[arg(short, long)]
        category: Option<String>,

        /// Search term matched against name, category, and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort order: featured, price-asc, price-desc, name-asc, name-desc
        #[arg(long, default_value = "featured")]
        sort: String,
    },
    /// Show full details for one product
    Show {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Render the current cart
    Show,
    /// Add a product from the catalog
    Add {
        /// Product id
        id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product
    Remove {
        /// Product id
        id: String,
    },
    /// Adjust a product's quantity by a signed delta
    Adjust {
        /// Product id
        id: String,

        /// Signed change, e.g. 1 or -2 (quantities at or below zero remove
        /// the item)
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Empty the cart (asks for confirmation unless --yes)
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Simulated checkout
    Checkout,
}

#[derive(Subcommand)]
enum ContactForm {
    /// Book an appointment
    Appointment {
        /// Owner's full name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Contact phone
        #[arg(long)]
        phone: String,

        /// Pet's name
        #[arg(long)]
        pet: String,

        /// Requested service
        #[arg(long)]
        service: Option<String>,

        /// Requested date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Additional notes (at least 10 characters when given)
        #[arg(long)]
        notes: Option<String>,
    },
    /// Send a general inquiry
    Consultation {
        /// Owner's full name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Contact phone
        #[arg(long)]
        phone: Option<String>,

        /// Your question (at least 10 characters)
        #[arg(long)]
        message: String,
    },
    /// Report an emergency
    Emergency {
        /// Owner's full name
        #[arg(long)]
        name: String,

        /// Contact phone
        #[arg(long)]
        phone: String,

        /// Pet's name
        #[arg(long)]
        pet: String,

        /// What happened (at least 10 characters)
        #[arg(long)]
        description: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::from_env()?;

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List {
                category,
                search,
                sort,
            } => commands::products::list(category.as_deref(), &search, &sort)?,
            ProductsAction::Show { id } => commands::products::show(&id),
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&config),
            CartAction::Add { id, quantity } => commands::cart::add(&config, &id, quantity),
            CartAction::Remove { id } => commands::cart::remove(&config, &id),
            CartAction::Adjust { id, delta } => commands::cart::adjust(&config, &id, delta),
            CartAction::Clear { yes } => commands::cart::clear(&config, yes)?,
            CartAction::Checkout => commands::cart::checkout(&config),
        },
        Commands::Services { category, search } => {
            commands::services::list(category.as_deref(), &search)?;
        }
        Commands::Team { specialty, search } => {
            commands::team::list(specialty.as_deref(), &search)?;
        }
        Commands::Contact { form } => match form {
            ContactForm::Appointment {
                name,
                email,
                phone,
                pet,
                service,
                date,
                notes,
            } => commands::contact::appointment(name, email, phone, pet, service, date, notes)?,
            ContactForm::Consultation {
                name,
                email,
                phone,
                message,
            } => commands::contact::consultation(name, email, phone, message)?,
            ContactForm::Emergency {
                name,
                phone,
                pet,
                description,
            } => commands::contact::emergency(&config, name, phone, pet, description)?,
        },
        Commands::Faq { term } => commands::faq::search(term.as_deref().unwrap_or("")),
    }
    Ok(())
}
