//! Core types for Warden.
//!
//! This module provides type-safe wrappers for admin identities, roles and
//! the static permission table.

pub mod identity;
pub mod permission;
pub mod role;

pub use identity::{AdminIdentity, IdentityError};
pub use permission::{AdminFlags, Grant, Permission};
pub use role::{AdminRole, RoleParseError};
