//! Resolution pipeline: requests in, renderable records out.
//!
//! The two resolvers share one normalization path and never surface errors to
//! their callers; every resolution terminates in a valid record (or ordered
//! list of records) even when the provider is down.

mod lookup;
mod normalize;
mod search;

pub use lookup::LookupResolver;
pub use normalize::normalize_record;
pub use search::{SearchLimits, SearchResolver};
