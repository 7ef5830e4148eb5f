//! Basic usage example for the Nasihun library.
//!
//! This example resolves one citation and one search against the live
//! provider, falling back to synthesized placeholder content when the network
//! or the API key is unavailable.

use nasihun::config::get_config;
use nasihun::models::{CitationRequest, Collection, Language, SearchRequest};
use nasihun::resolve::{LookupResolver, SearchResolver};
use nasihun::source::HadithApiSource;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = get_config();
    let source = Arc::new(HadithApiSource::new(&config.api));

    // Look up one specific hadith.
    let request = CitationRequest::new(Collection::SahihBukhari, 1, Language::English);
    let record = LookupResolver::new(source.clone()).resolve(&request).await;

    println!("{}", record.title);
    println!("{}", record.text);
    println!("— {} ({:?})", record.source_label, record.provenance);

    // Search a collection for a phrase.
    let search = SearchRequest::new(Collection::SahihMuslim, "intentions", Language::English);
    let results = SearchResolver::new(source).resolve(&search).await;

    println!("\n{} results for \"{}\"", results.len(), search.query);
    for (i, result) in results.iter().take(3).enumerate() {
        println!("\n{}. {}", i + 1, result.source_label);
        println!("   {}", result.text);
    }

    Ok(())
}
