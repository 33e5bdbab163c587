//! Warden Core - Shared types library.
//!
//! This crate provides the types shared by the Warden components:
//! - `admin` - Admin records, the record store and the permission resolver
//! - `cli` - Command-line tools for migrations and admin management
//!
//! # Architecture
//!
//! The core crate contains only types and pure decision logic - no I/O, no
//! database access. The role → action table and the override-flag policy live
//! here so they can be checked without a store.
//!
//! # Modules
//!
//! - [`types`] - Admin identities, roles, permissions and override flags

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
