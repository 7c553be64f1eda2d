//! Domain models for storefront.

pub mod notice;
pub mod session;
pub mod user;

pub use notice::{Notice, Severity};
pub use session::{ShopSession, Tab, TabRejected, keys as session_keys};
pub use user::User;
