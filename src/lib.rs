//! # Nasihun
//!
//! Fetch, search, and render hadith citations as shareable poster cards.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Collection, HadithRecord, requests)
//! - [`source`]: Remote provider client behind the [`source::HadithSource`] trait
//! - [`resolve`]: Lookup and search resolvers with graceful fallback
//! - [`synth`]: Deterministic placeholder synthesizer used when the provider fails
//! - [`poster`]: Terminal poster rendering and display preferences
//! - [`config`]: Configuration management
//!
//! Resolution never fails: a flaky provider degrades to synthesized placeholder
//! content rather than an error, so callers always receive a renderable record.

pub mod config;
pub mod models;
pub mod poster;
pub mod resolve;
pub mod source;
pub mod synth;
pub mod utils;

// Re-export commonly used types
pub use models::{Collection, HadithRecord, Language};
pub use resolve::{LookupResolver, SearchResolver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
