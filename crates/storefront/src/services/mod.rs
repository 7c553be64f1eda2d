//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Account lookup behind the [`auth::Authenticator`] trait

pub mod auth;
