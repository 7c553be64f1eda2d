//! Subcommand implementations.
//!
//! Every command writes to a caller-supplied writer so output can be checked
//! in tests.

pub mod catalog;
pub mod info;
pub mod login;
