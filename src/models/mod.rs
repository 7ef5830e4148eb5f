//! Core data models for hadith collections, requests, and resolved records.

mod collection;
mod record;
mod request;

pub use collection::{Collection, Language};
pub use record::{Authenticity, HadithRecord, HadithRecordBuilder, Provenance};
pub use request::{CitationRequest, SearchRequest};
