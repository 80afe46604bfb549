//! VetCare Site - The clinic site's interactive behavior.
//!
//! Everything the pages do, minus the pages themselves:
//!
//! - [`catalog`] - Product catalog with filtering, search, and sorting
//! - [`services`] - Services directory with category filter and search
//! - [`team`] - Team directory with specialty filter and search
//! - [`contact`] - Contact forms with field validation and simulated
//!   submission
//! - [`faq`] - FAQ keyword search
//! - [`notify`] - User-facing notifications
//! - [`render`] - Terminal renderer for cart state and listings
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod contact;
pub mod faq;
pub mod notify;
pub mod render;
pub mod services;
pub mod team;
