//! Shoe Shop Core - Shared domain types.
//!
//! This crate provides the types used across all shoe shop components:
//! - `storefront` - Server-rendered demo storefront
//! - `cli` - Command-line access to the same catalog and policy
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no session storage. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, roles, sizes, logins, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
