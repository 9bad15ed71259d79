//! Directory composition service.
//!
//! Holds the full listing collection and composes search and filtering into
//! the display set. Keeping the collection behind this service guarantees
//! that filter options are always derived from the unfiltered universe,
//! never from an intermediate result.

use crate::filters::{apply_filters, filter_options, ActiveFilters, FilterOptions};
use crate::listing::Listing;
use crate::search::search;

/// Pure query operations over a materialized listing collection.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    listings: Vec<Listing>,
}

impl DirectoryService {
    /// Creates a service over a complete listing collection.
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// The full collection, in its original order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Derives the selectable filter values from the full collection.
    ///
    /// Always computed from the unfiltered universe, so selecting a filter
    /// never shrinks the option lists shown to the user.
    pub fn filter_options(&self) -> FilterOptions {
        filter_options(&self.listings)
    }

    /// Computes the display set for the current search text and filter
    /// selections.
    ///
    /// Search and filtering are both pure set-intersections over the same
    /// universe and neither reorders, so they commute; search runs first
    /// only by convention.
    pub fn query(&self, text: &str, active: &ActiveFilters) -> Vec<Listing> {
        let results = apply_filters(&search(&self.listings, text), active);
        tracing::debug!(
            total = self.listings.len(),
            matched = results.len(),
            "directory query"
        );
        results
    }
}
