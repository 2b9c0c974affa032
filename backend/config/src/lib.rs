//! Runtime configuration for the askforge service.
//!
//! Everything is derived from environment variables at startup; there is no
//! config file. Credential values never leave this crate unmasked.

pub mod redact;
pub mod schema;

pub use redact::mask_secret;
pub use schema::{Config, PLACEHOLDER_API_KEY};
