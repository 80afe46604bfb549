//! VetCare Core - Shared types library.
//!
//! This crate provides common types used across all VetCare components:
//! - `cart` - Persistent shopping cart store
//! - `site` - Catalog, directories, contact forms, and rendering
//! - `cli` - The `vetcare` command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no
//! environment access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   phone numbers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
