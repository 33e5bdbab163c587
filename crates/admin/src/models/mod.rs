//! Domain models for admin records.

pub mod admin;

pub use admin::{AdminChanges, AdminInput, AdminRecord, NewAdmin};
pub use warden_core::{AdminFlags, AdminIdentity, AdminRole};
