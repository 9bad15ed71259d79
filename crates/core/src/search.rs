//! Free-text search over the listing collection.
//!
//! The query is normalised into lowercase whitespace-separated tokens. A
//! listing is kept when every token is a case-insensitive substring of at
//! least one searchable field: name, primary specialty, any specialty, or
//! any condition. Tokens are matched as literal substrings, never as
//! patterns, so queries containing regex metacharacters behave like any
//! other text.
//!
//! The search is a stable filter over the input: result order is input
//! order and there is no relevance scoring.

use crate::listing::Listing;

/// Filters `listings` down to those matching every token of `query`.
///
/// An empty or whitespace-only query returns the full collection unchanged.
///
/// Pure and order-preserving; safe to call on every (debounced) keystroke.
pub fn search(listings: &[Listing], query: &str) -> Vec<Listing> {
    let tokens: Vec<String> = query
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect();

    if tokens.is_empty() {
        return listings.to_vec();
    }

    tracing::debug!(token_count = tokens.len(), "running listing search");

    listings
        .iter()
        .filter(|listing| tokens.iter().all(|token| token_matches(listing, token)))
        .cloned()
        .collect()
}

/// True when `token` (already lowercase) matches any searchable field.
fn token_matches(listing: &Listing, token: &str) -> bool {
    field_contains(&listing.name, token)
        || field_contains(&listing.primary_specialty, token)
        || listing.specialties.iter().any(|s| field_contains(s, token))
        || listing.conditions.iter().any(|c| field_contains(c, token))
}

fn field_contains(field: &str, token: &str) -> bool {
    field.to_lowercase().contains(token)
}
