//! Warden Admin library.
//!
//! Administrator records, the record store they live in, and the
//! role-based permission resolver built on top of it.
//!
//! # Security
//!
//! This crate decides who may act on the operator surface. Callers are
//! expected to pass an identity that transport-level authentication has
//! already verified.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
pub mod services;

pub use config::{AdminConfig, ConfigError};
pub use db::{AdminRepository, AdminStore, MemoryAdminStore, RepositoryError};
pub use models::{AdminInput, AdminRecord};
pub use services::{AdminError, AdminService};
