//! Dotted version identifier handling
//!
//! Parses version strings like `1.2.3`, `1.2`, `v0.1.0` or `2.0.0-next` into
//! a structured [`VersionValue`], formats values back into strings, and bumps
//! individual components. Values are immutable; every bump returns a new
//! value.
//!
//! # Modules
//!
//! - [`value`]: The [`VersionValue`] type with parse, format and bump operations
//! - [`record`]: Typed interchange form with serde support
//! - [`error`]: Error type for version text parsing

pub mod error;
pub mod record;
pub mod value;

pub use error::ParseError;
pub use record::VersionRecord;
pub use value::{NO_PATCH, VersionValue};
