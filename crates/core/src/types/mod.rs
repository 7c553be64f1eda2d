//! Core types for the shoe shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod login;
pub mod price;
pub mod role;
pub mod size;
pub mod status;

pub use id::*;
pub use login::{Login, LoginError};
pub use price::{CurrencyCode, Price};
pub use role::{Capabilities, Role, RoleError};
pub use size::{ShoeSize, SizeError};
pub use status::OrderStatus;
