//! Business logic services for admin.
//!
//! # Services
//!
//! - `admin` - Admin lookups, permission checks and the upsert policy

pub mod admin;

pub use admin::{AdminError, AdminService};
