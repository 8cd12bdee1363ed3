//! User directory
//!
//! Read-only account table seeded once at startup.

pub mod record;
pub mod store;

pub use record::{Role, UserRecord};
pub use store::UserDirectory;
